use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::entities::{NewRating, NewReview, Rating, Review, ReviewWithAuthor};
use crate::shared::errors::AppResult;
use crate::shared::pagination::Page;

#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Fails with Conflict when the user already rated the content.
    async fn insert(&self, new_rating: NewRating) -> AppResult<Rating>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rating>>;

    async fn find_by_user_and_content(
        &self,
        user_id: Uuid,
        content_id: Uuid,
    ) -> AppResult<Option<Rating>>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, Rating>>;

    async fn update_score(&self, id: Uuid, score: f64) -> AppResult<Rating>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn list_for_content(&self, content_id: Uuid, page: Page) -> AppResult<Vec<Rating>>;

    async fn list_for_user(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Rating>>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn insert(&self, new_review: NewReview) -> AppResult<Review>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>>;

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, Review>>;

    async fn update_text(&self, id: Uuid, text: String) -> AppResult<Review>;

    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    async fn list_for_content(
        &self,
        content_id: Uuid,
        page: Page,
    ) -> AppResult<Vec<ReviewWithAuthor>>;

    async fn list_for_user(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Review>>;

    /// Records a like and bumps the review's counter in one transaction.
    /// Returns the new counter value. Fails with Conflict when this user
    /// already liked the review.
    async fn like(&self, user_id: Uuid, review_id: Uuid) -> AppResult<i32>;

    /// Removes a like and decrements the counter. `Ok(None)` when the user
    /// had not liked the review.
    async fn unlike(&self, user_id: Uuid, review_id: Uuid) -> AppResult<Option<i32>>;
}
