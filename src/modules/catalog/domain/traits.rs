use async_trait::async_trait;

use super::models::{BookSearchResult, MovieSearchResult};
use crate::modules::content::domain::{NewBook, NewMovie};
use crate::shared::errors::AppResult;

/// External movie catalog. Implemented by the TMDb client.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn search_movies(&self, query: &str, page: i32) -> AppResult<Vec<MovieSearchResult>>;

    /// Full details for one movie, ready to persist. `Ok(None)` when the
    /// catalog does not know the id.
    async fn movie_details(&self, tmdb_id: i32) -> AppResult<Option<NewMovie>>;

    async fn popular_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>>;

    async fn top_rated_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>>;
}

/// External book catalog. Implemented by the Google Books client.
#[async_trait]
pub trait BookCatalog: Send + Sync {
    async fn search_books(&self, query: &str, page: i32) -> AppResult<Vec<BookSearchResult>>;

    /// Full details for one volume, ready to persist. `Ok(None)` when the
    /// catalog does not know the id.
    async fn book_details(&self, google_books_id: &str) -> AppResult<Option<NewBook>>;

    async fn search_by_isbn(&self, isbn: &str) -> AppResult<Option<BookSearchResult>>;
}
