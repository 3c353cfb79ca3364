use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use super::super::domain::{
    entities::{LibraryEntry, LibraryStatus},
    repositories::LibraryRepository,
};
use crate::log_debug;
use crate::modules::content::domain::repositories::ContentRepository;
use crate::modules::feed::domain::{entities::NewActivity, repositories::ActivityRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;

pub struct LibraryService {
    library_repo: Arc<dyn LibraryRepository>,
    content_repo: Arc<dyn ContentRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
}

impl LibraryService {
    pub fn new(
        library_repo: Arc<dyn LibraryRepository>,
        content_repo: Arc<dyn ContentRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            library_repo,
            content_repo,
            activity_repo,
        }
    }

    /// Adds a content to the user's library, or moves an existing entry to
    /// the new status. Only a genuinely new entry shows up in the feed; a
    /// status change stays quiet.
    pub async fn add_entry(
        &self,
        user_id: Uuid,
        content_id: Uuid,
        status: LibraryStatus,
    ) -> AppResult<LibraryEntry> {
        if !self.content_repo.exists(content_id).await? {
            return Err(AppError::NotFound(format!(
                "Content with ID {} not found",
                content_id
            )));
        }

        if let Some(existing) = self.library_repo.find_for(user_id, content_id).await? {
            log_debug!(
                "Library entry {} moves to status {}",
                existing.id,
                status
            );
            return self.library_repo.update_status(existing.id, status).await;
        }

        let entry = self.library_repo.insert(user_id, content_id, status).await?;

        self.activity_repo
            .insert(NewActivity::library_add(
                user_id,
                content_id,
                json!({ "status": status }),
            ))
            .await?;

        Ok(entry)
    }

    pub async fn remove_entry(&self, user_id: Uuid, content_id: Uuid) -> AppResult<()> {
        let removed = self.library_repo.delete_for(user_id, content_id).await?;
        if !removed {
            return Err(AppError::NotFound(
                "This content is not in your library".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn entries(
        &self,
        user_id: Uuid,
        status: Option<LibraryStatus>,
        page: Page,
    ) -> AppResult<Vec<LibraryEntry>> {
        self.library_repo.list(user_id, status, page).await
    }

    pub async fn entry_for(
        &self,
        user_id: Uuid,
        content_id: Uuid,
    ) -> AppResult<Option<LibraryEntry>> {
        self.library_repo.find_for(user_id, content_id).await
    }
}
