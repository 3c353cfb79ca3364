pub mod google_books;
pub mod http;
pub mod tmdb;

pub use google_books::GoogleBooksClient;
pub use tmdb::TmdbClient;
