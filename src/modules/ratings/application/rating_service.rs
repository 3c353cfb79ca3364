use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::{NewRating, Rating},
    repositories::RatingRepository,
};
use crate::log_debug;
use crate::modules::content::domain::repositories::ContentRepository;
use crate::modules::feed::domain::{entities::NewActivity, repositories::ActivityRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;
use crate::shared::utils::Validator;

pub struct RatingService {
    rating_repo: Arc<dyn RatingRepository>,
    content_repo: Arc<dyn ContentRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
}

impl RatingService {
    pub fn new(
        rating_repo: Arc<dyn RatingRepository>,
        content_repo: Arc<dyn ContentRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            rating_repo,
            content_repo,
            activity_repo,
        }
    }

    pub async fn create_rating(
        &self,
        user_id: Uuid,
        content_id: Uuid,
        score: f64,
    ) -> AppResult<Rating> {
        if !self.content_repo.exists(content_id).await? {
            return Err(AppError::NotFound(format!(
                "Content with ID {} not found",
                content_id
            )));
        }

        Validator::validate_score(score)?;

        if self
            .rating_repo
            .find_by_user_and_content(user_id, content_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "You have already rated this content".to_string(),
            ));
        }

        let rating = self
            .rating_repo
            .insert(NewRating {
                user_id,
                content_id,
                score,
            })
            .await?;

        self.content_repo.refresh_stats(content_id).await?;
        self.activity_repo
            .insert(NewActivity::rating(user_id, content_id, rating.id))
            .await?;

        log_debug!("User {} rated content {}: {}", user_id, content_id, score);
        Ok(rating)
    }

    /// Changes the score in place. The original feed event keeps pointing
    /// at this rating, so no new activity is recorded.
    pub async fn update_rating(
        &self,
        user_id: Uuid,
        rating_id: Uuid,
        score: f64,
    ) -> AppResult<Rating> {
        let existing = self.owned_rating(user_id, rating_id).await?;

        Validator::validate_score(score)?;

        let updated = self.rating_repo.update_score(rating_id, score).await?;
        self.content_repo.refresh_stats(existing.content_id).await?;

        Ok(updated)
    }

    pub async fn delete_rating(&self, user_id: Uuid, rating_id: Uuid) -> AppResult<()> {
        let existing = self.owned_rating(user_id, rating_id).await?;

        self.rating_repo.delete(rating_id).await?;
        self.content_repo.refresh_stats(existing.content_id).await?;

        Ok(())
    }

    pub async fn rating_for(&self, user_id: Uuid, content_id: Uuid) -> AppResult<Option<Rating>> {
        self.rating_repo
            .find_by_user_and_content(user_id, content_id)
            .await
    }

    pub async fn content_ratings(&self, content_id: Uuid, page: Page) -> AppResult<Vec<Rating>> {
        self.rating_repo.list_for_content(content_id, page).await
    }

    pub async fn user_ratings(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Rating>> {
        self.rating_repo.list_for_user(user_id, page).await
    }

    async fn owned_rating(&self, user_id: Uuid, rating_id: Uuid) -> AppResult<Rating> {
        let rating = self
            .rating_repo
            .find_by_id(rating_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Rating with ID {} not found", rating_id)))?;

        if rating.user_id != user_id {
            return Err(AppError::Forbidden(
                "You can only modify your own ratings".to_string(),
            ));
        }

        Ok(rating)
    }
}
