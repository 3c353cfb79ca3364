//! External catalog adapters: TMDb for movies, Google Books for books.

pub mod domain;
pub mod infrastructure;

pub use domain::{BookCatalog, BookSearchResult, MovieCatalog, MovieSearchResult};
pub use infrastructure::{GoogleBooksClient, TmdbClient};
