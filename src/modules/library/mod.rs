//! Personal libraries: which contents a user has watched, read, or
//! queued up.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::LibraryService;
pub use domain::{LibraryEntry, LibraryRepository, LibraryStatus};
pub use infrastructure::LibraryRepositoryImpl;
