use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::super::domain::{
    entities::ActivityLikeState,
    repositories::{ActivityLikeRepository, ActivityRepository},
};
use crate::modules::users::domain::entities::UserSummary;
use crate::shared::errors::{AppError, AppResult};

const MAX_LIKERS: i64 = 50;

/// Likes on feed activities. Unlike review likes, liking twice is not an
/// error: the call is idempotent and reports the resulting state either
/// way. Counts are always computed live from the like rows.
pub struct EngagementService {
    activity_repo: Arc<dyn ActivityRepository>,
    like_repo: Arc<dyn ActivityLikeRepository>,
}

impl EngagementService {
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        like_repo: Arc<dyn ActivityLikeRepository>,
    ) -> Self {
        Self {
            activity_repo,
            like_repo,
        }
    }

    pub async fn like_activity(
        &self,
        user_id: Uuid,
        activity_id: Uuid,
    ) -> AppResult<ActivityLikeState> {
        self.require_activity(activity_id).await?;

        if !self.like_repo.exists(user_id, activity_id).await? {
            match self.like_repo.insert(user_id, activity_id).await {
                Ok(()) => {}
                // Lost a race against an identical like; same outcome
                Err(AppError::Conflict(_)) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(ActivityLikeState {
            likes_count: self.like_repo.count(activity_id).await?,
            is_liked: true,
        })
    }

    pub async fn unlike_activity(
        &self,
        user_id: Uuid,
        activity_id: Uuid,
    ) -> AppResult<ActivityLikeState> {
        self.require_activity(activity_id).await?;

        let removed = self.like_repo.delete(user_id, activity_id).await?;
        if !removed {
            return Err(AppError::NotFound(
                "You have not liked this activity".to_string(),
            ));
        }

        Ok(ActivityLikeState {
            likes_count: self.like_repo.count(activity_id).await?,
            is_liked: false,
        })
    }

    pub async fn like_status(
        &self,
        viewer: Option<Uuid>,
        activity_id: Uuid,
    ) -> AppResult<ActivityLikeState> {
        self.require_activity(activity_id).await?;

        let is_liked = match viewer {
            Some(viewer) => self.like_repo.exists(viewer, activity_id).await?,
            None => false,
        };

        Ok(ActivityLikeState {
            likes_count: self.like_repo.count(activity_id).await?,
            is_liked,
        })
    }

    pub async fn likers(
        &self,
        activity_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<(UserSummary, DateTime<Utc>)>> {
        self.require_activity(activity_id).await?;

        self.like_repo
            .likers(activity_id, limit.clamp(1, MAX_LIKERS))
            .await
    }

    async fn require_activity(&self, activity_id: Uuid) -> AppResult<()> {
        self.activity_repo
            .find_by_id(activity_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Activity with ID {} not found", activity_id))
            })?;
        Ok(())
    }
}
