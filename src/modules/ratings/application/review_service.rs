use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::{NewReview, Review, ReviewWithAuthor},
    repositories::ReviewRepository,
};
use crate::log_debug;
use crate::modules::content::domain::repositories::ContentRepository;
use crate::modules::feed::domain::{entities::NewActivity, repositories::ActivityRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;
use crate::shared::utils::Validator;

pub struct ReviewService {
    review_repo: Arc<dyn ReviewRepository>,
    content_repo: Arc<dyn ContentRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
}

impl ReviewService {
    pub fn new(
        review_repo: Arc<dyn ReviewRepository>,
        content_repo: Arc<dyn ContentRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            review_repo,
            content_repo,
            activity_repo,
        }
    }

    pub async fn create_review(
        &self,
        user_id: Uuid,
        content_id: Uuid,
        text: String,
    ) -> AppResult<Review> {
        if !self.content_repo.exists(content_id).await? {
            return Err(AppError::NotFound(format!(
                "Content with ID {} not found",
                content_id
            )));
        }

        Validator::validate_review_text(&text)?;

        let review = self
            .review_repo
            .insert(NewReview {
                user_id,
                content_id,
                text,
            })
            .await?;

        self.content_repo.refresh_stats(content_id).await?;
        self.activity_repo
            .insert(NewActivity::review(user_id, content_id, review.id))
            .await?;

        log_debug!("User {} reviewed content {}", user_id, content_id);
        Ok(review)
    }

    /// Edits the text only. Review counts are unaffected, so the content
    /// stats are left alone.
    pub async fn update_review(
        &self,
        user_id: Uuid,
        review_id: Uuid,
        text: String,
    ) -> AppResult<Review> {
        self.owned_review(user_id, review_id).await?;

        Validator::validate_review_text(&text)?;

        self.review_repo.update_text(review_id, text).await
    }

    pub async fn delete_review(&self, user_id: Uuid, review_id: Uuid) -> AppResult<()> {
        let existing = self.owned_review(user_id, review_id).await?;

        self.review_repo.delete(review_id).await?;
        self.content_repo.refresh_stats(existing.content_id).await?;

        Ok(())
    }

    pub async fn content_reviews(
        &self,
        content_id: Uuid,
        page: Page,
    ) -> AppResult<Vec<ReviewWithAuthor>> {
        self.review_repo.list_for_content(content_id, page).await
    }

    pub async fn user_reviews(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Review>> {
        self.review_repo.list_for_user(user_id, page).await
    }

    /// Returns the review's new like count. A second like from the same
    /// user is a Conflict, unlike activity likes which are idempotent.
    pub async fn like_review(&self, user_id: Uuid, review_id: Uuid) -> AppResult<i32> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))?;

        self.review_repo.like(user_id, review_id).await
    }

    pub async fn unlike_review(&self, user_id: Uuid, review_id: Uuid) -> AppResult<i32> {
        self.review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))?;

        self.review_repo
            .unlike(user_id, review_id)
            .await?
            .ok_or_else(|| AppError::NotFound("You have not liked this review".to_string()))
    }

    async fn owned_review(&self, user_id: Uuid, review_id: Uuid) -> AppResult<Review> {
        let review = self
            .review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", review_id)))?;

        if review.user_id != user_id {
            return Err(AppError::Forbidden(
                "You can only modify your own reviews".to_string(),
            ));
        }

        Ok(review)
    }
}
