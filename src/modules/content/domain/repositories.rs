use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{Content, ContentSummary, NewBook, NewMovie};
use super::value_objects::ContentType;
use crate::shared::errors::AppResult;
use crate::shared::pagination::Page;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>>;

    async fn find_movie_by_tmdb_id(&self, tmdb_id: i32) -> AppResult<Option<Content>>;

    async fn find_book_by_google_id(&self, google_books_id: &str) -> AppResult<Option<Content>>;

    async fn insert_movie(&self, new_movie: NewMovie) -> AppResult<Content>;

    async fn insert_book(&self, new_book: NewBook) -> AppResult<Content>;

    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    async fn list(&self, kind: Option<ContentType>, page: Page) -> AppResult<Vec<Content>>;

    /// Rated contents ordered by average rating, best first.
    async fn top_rated(&self, kind: Option<ContentType>, limit: i64) -> AppResult<Vec<Content>>;

    /// Reviewed contents ordered by review count, most discussed first.
    async fn most_popular(&self, kind: Option<ContentType>, limit: i64) -> AppResult<Vec<Content>>;

    async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, ContentSummary>>;

    /// Recomputes the denormalized rating and review figures for one
    /// content row from the current ratings and reviews tables.
    ///
    /// A full recount rather than an incremental adjustment, so a lost
    /// update between two concurrent writers self-heals on the next call.
    /// Succeeds as a no-op when the content row no longer exists.
    async fn refresh_stats(&self, content_id: Uuid) -> AppResult<()>;
}
