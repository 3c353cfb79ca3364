use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::{Activity, NewActivity};
use crate::modules::users::domain::entities::UserSummary;
use crate::shared::errors::AppResult;
use crate::shared::pagination::Page;

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn insert(&self, new_activity: NewActivity) -> AppResult<Activity>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Activity>>;

    /// Newest-first activities from the given authors. Ties on the
    /// timestamp order by id so pagination stays stable.
    async fn page_for_authors(&self, author_ids: &[Uuid], page: Page)
        -> AppResult<Vec<Activity>>;

    async fn page_for_author(&self, author_id: Uuid, page: Page) -> AppResult<Vec<Activity>>;

    async fn page_all(&self, page: Page) -> AppResult<Vec<Activity>>;

    /// Removes the list_create and list_add events of a deleted list.
    /// The one place activities are not append-only.
    async fn delete_for_list(&self, list_id: Uuid) -> AppResult<usize>;
}

#[async_trait]
pub trait ActivityLikeRepository: Send + Sync {
    async fn exists(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<bool>;

    async fn insert(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<()>;

    async fn delete(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<bool>;

    /// Live count for one activity.
    async fn count(&self, activity_id: Uuid) -> AppResult<i64>;

    /// Live counts for a batch of activities. Activities with no likes are
    /// absent from the map.
    async fn counts_by_activity(&self, activity_ids: &[Uuid])
        -> AppResult<HashMap<Uuid, i64>>;

    /// Which of the given activities this user has liked.
    async fn liked_by(&self, user_id: Uuid, activity_ids: &[Uuid])
        -> AppResult<HashSet<Uuid>>;

    /// Who liked an activity, most recent first.
    async fn likers(
        &self,
        activity_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<(UserSummary, DateTime<Utc>)>>;
}
