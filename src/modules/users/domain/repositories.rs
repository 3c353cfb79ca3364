use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{ProfileChanges, User, UserStats, UserSummary};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Batch lookup used by the feed assembler; unknown ids are simply absent
    /// from the result map.
    async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, UserSummary>>;

    async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<User>;

    /// Live counts over rating/review/follow rows.
    async fn stats(&self, id: Uuid) -> AppResult<UserStats>;
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Inserts the directed edge. The unique (follower, followed) index turns
    /// a duplicate insert into a Conflict.
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<()>;

    /// Removes the edge; returns false when it did not exist.
    async fn delete(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<bool>;

    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<bool>;

    /// Ids of everyone `user_id` follows; the feed visibility filter.
    async fn followed_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>>;

    async fn followers_of(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>>;

    async fn following_of(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>>;
}
