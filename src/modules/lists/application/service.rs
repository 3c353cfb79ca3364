use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::{CustomList, ListChanges, ListDetail, ListItem, ListSummary},
    repositories::ListRepository,
};
use crate::log_info;
use crate::modules::content::domain::repositories::ContentRepository;
use crate::modules::feed::domain::{entities::NewActivity, repositories::ActivityRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

pub struct ListService {
    list_repo: Arc<dyn ListRepository>,
    content_repo: Arc<dyn ContentRepository>,
    activity_repo: Arc<dyn ActivityRepository>,
}

impl ListService {
    pub fn new(
        list_repo: Arc<dyn ListRepository>,
        content_repo: Arc<dyn ContentRepository>,
        activity_repo: Arc<dyn ActivityRepository>,
    ) -> Self {
        Self {
            list_repo,
            content_repo,
            activity_repo,
        }
    }

    pub async fn create_list(
        &self,
        user_id: Uuid,
        name: String,
        description: Option<String>,
        is_public: bool,
    ) -> AppResult<CustomList> {
        Validator::validate_list_name(&name)?;

        let list = self
            .list_repo
            .insert(user_id, name, description, is_public)
            .await?;

        self.activity_repo
            .insert(NewActivity::list_create(user_id, list.id))
            .await?;

        Ok(list)
    }

    pub async fn update_list(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        changes: ListChanges,
    ) -> AppResult<CustomList> {
        self.owned_list(user_id, list_id).await?;

        if let Some(name) = changes.name.as_deref() {
            Validator::validate_list_name(name)?;
        }

        self.list_repo.update(list_id, changes).await
    }

    /// Deletes the list, its items, and its feed events. List activities
    /// are the one kind that does not outlive its source.
    pub async fn delete_list(&self, user_id: Uuid, list_id: Uuid) -> AppResult<()> {
        self.owned_list(user_id, list_id).await?;

        let removed_events = self.activity_repo.delete_for_list(list_id).await?;
        self.list_repo.delete(list_id).await?;

        log_info!(
            "Deleted list {} along with {} feed events",
            list_id,
            removed_events
        );
        Ok(())
    }

    pub async fn add_item(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        content_id: Uuid,
    ) -> AppResult<ListItem> {
        self.owned_list(user_id, list_id).await?;

        if !self.content_repo.exists(content_id).await? {
            return Err(AppError::NotFound(format!(
                "Content with ID {} not found",
                content_id
            )));
        }

        if self
            .list_repo
            .find_item(list_id, content_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "This content is already in the list".to_string(),
            ));
        }

        // Append position is the current size; gaps from removals stay
        let position = self.list_repo.count_items(list_id).await? as i32;
        let item = self
            .list_repo
            .insert_item(list_id, content_id, position)
            .await?;

        self.activity_repo
            .insert(NewActivity::list_add(user_id, list_id, content_id))
            .await?;

        Ok(item)
    }

    pub async fn remove_item(
        &self,
        user_id: Uuid,
        list_id: Uuid,
        content_id: Uuid,
    ) -> AppResult<()> {
        self.owned_list(user_id, list_id).await?;

        let removed = self.list_repo.delete_item(list_id, content_id).await?;
        if !removed {
            return Err(AppError::NotFound(
                "This content is not in the list".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn my_lists(&self, user_id: Uuid) -> AppResult<Vec<ListSummary>> {
        self.list_repo.list_for_user(user_id, false).await
    }

    pub async fn public_lists_of(&self, user_id: Uuid) -> AppResult<Vec<ListSummary>> {
        self.list_repo.list_for_user(user_id, true).await
    }

    /// Private lists are visible to their owner only.
    pub async fn get_list(&self, viewer: Option<Uuid>, list_id: Uuid) -> AppResult<ListDetail> {
        let detail = self
            .list_repo
            .detail(list_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List with ID {} not found", list_id)))?;

        if !detail.list.is_public && viewer != Some(detail.list.user_id) {
            return Err(AppError::Forbidden(
                "This list is private".to_string(),
            ));
        }

        Ok(detail)
    }

    async fn owned_list(&self, user_id: Uuid, list_id: Uuid) -> AppResult<CustomList> {
        let list = self
            .list_repo
            .find_by_id(list_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("List with ID {} not found", list_id)))?;

        if list.user_id != user_id {
            return Err(AppError::Forbidden(
                "You can only modify your own lists".to_string(),
            ));
        }

        Ok(list)
    }
}
