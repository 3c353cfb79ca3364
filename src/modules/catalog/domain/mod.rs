pub mod models;
pub mod traits;

pub use models::{BookSearchResult, MovieSearchResult};
pub use traits::{BookCatalog, MovieCatalog};
