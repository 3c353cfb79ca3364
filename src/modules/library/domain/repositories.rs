use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{LibraryEntry, LibraryStatus};
use crate::shared::errors::AppResult;
use crate::shared::pagination::Page;

#[async_trait]
pub trait LibraryRepository: Send + Sync {
    async fn find_for(&self, user_id: Uuid, content_id: Uuid)
        -> AppResult<Option<LibraryEntry>>;

    async fn insert(
        &self,
        user_id: Uuid,
        content_id: Uuid,
        status: LibraryStatus,
    ) -> AppResult<LibraryEntry>;

    async fn update_status(&self, id: Uuid, status: LibraryStatus) -> AppResult<LibraryEntry>;

    async fn delete_for(&self, user_id: Uuid, content_id: Uuid) -> AppResult<bool>;

    async fn list(
        &self,
        user_id: Uuid,
        status: Option<LibraryStatus>,
        page: Page,
    ) -> AppResult<Vec<LibraryEntry>>;
}
