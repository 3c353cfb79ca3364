use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::{ProfileChanges, User, UserProfile, UserStats, UserSummary},
    repositories::{FollowRepository, UserRepository},
};
use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, follow_repo: Arc<dyn FollowRepository>) -> Self {
        Self {
            user_repo,
            follow_repo,
        }
    }

    pub async fn me(&self, user_id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", user_id)))
    }

    /// Public profile plus live statistics, looked up by username.
    pub async fn profile(&self, username: &str) -> AppResult<UserProfile> {
        let user = self.find_by_username(username).await?;
        let stats = self.user_repo.stats(user.id).await?;

        Ok(UserProfile { user, stats })
    }

    pub async fn user_stats(&self, user_id: Uuid) -> AppResult<UserStats> {
        // Stats for a missing user are all-zero either way, but surface the
        // absence explicitly.
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", user_id)))?;

        self.user_repo.stats(user_id).await
    }

    pub async fn update_profile(&self, user_id: Uuid, changes: ProfileChanges) -> AppResult<User> {
        let current = self.me(user_id).await?;

        if let Some(new_username) = changes.username.as_deref() {
            if new_username != current.username {
                Validator::validate_username(new_username)?;

                if self.user_repo.find_by_username(new_username).await?.is_some() {
                    return Err(AppError::Conflict(format!(
                        "Username '{}' is already taken",
                        new_username
                    )));
                }
            }
        }

        self.user_repo.update_profile(user_id, changes).await
    }

    pub async fn follow(&self, follower_id: Uuid, username: &str) -> AppResult<()> {
        let target = self.find_by_username(username).await?;

        if target.id == follower_id {
            return Err(AppError::Conflict("You cannot follow yourself".to_string()));
        }

        if self.follow_repo.exists(follower_id, target.id).await? {
            return Err(AppError::Conflict(format!(
                "You are already following '{}'",
                username
            )));
        }

        self.follow_repo.insert(follower_id, target.id).await?;
        log_info!("User {} now follows {}", follower_id, target.id);
        Ok(())
    }

    pub async fn unfollow(&self, follower_id: Uuid, username: &str) -> AppResult<()> {
        let target = self.find_by_username(username).await?;

        let removed = self.follow_repo.delete(follower_id, target.id).await?;
        if !removed {
            return Err(AppError::NotFound(format!(
                "You are not following '{}'",
                username
            )));
        }
        Ok(())
    }

    pub async fn followed_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        self.follow_repo.followed_ids(user_id).await
    }

    pub async fn followers(&self, username: &str) -> AppResult<Vec<UserSummary>> {
        let user = self.find_by_username(username).await?;
        self.follow_repo.followers_of(user.id).await
    }

    pub async fn following(&self, username: &str) -> AppResult<Vec<UserSummary>> {
        let user = self.find_by_username(username).await?;
        self.follow_repo.following_of(user.id).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
    }
}
