use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{CustomList, ListChanges, ListDetail, ListItem, ListSummary};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait ListRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: Uuid,
        name: String,
        description: Option<String>,
        is_public: bool,
    ) -> AppResult<CustomList>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CustomList>>;

    async fn update(&self, id: Uuid, changes: ListChanges) -> AppResult<CustomList>;

    /// Items go with the list via the foreign key cascade.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn count_items(&self, list_id: Uuid) -> AppResult<i64>;

    async fn find_item(&self, list_id: Uuid, content_id: Uuid) -> AppResult<Option<ListItem>>;

    async fn insert_item(
        &self,
        list_id: Uuid,
        content_id: Uuid,
        position: i32,
    ) -> AppResult<ListItem>;

    async fn delete_item(&self, list_id: Uuid, content_id: Uuid) -> AppResult<bool>;

    async fn list_for_user(&self, user_id: Uuid, only_public: bool)
        -> AppResult<Vec<ListSummary>>;

    /// The list with its items joined to their contents, ordered by
    /// position.
    async fn detail(&self, id: Uuid) -> AppResult<Option<ListDetail>>;

    /// Summaries (list plus item count) for a batch of lists. Deleted
    /// lists are absent from the map.
    async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, ListSummary>>;
}
