use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{LibraryEntryModel, NewLibraryEntry};
use crate::modules::library::domain::{
    entities::{LibraryEntry, LibraryStatus},
    repositories::LibraryRepository,
};
use crate::schema::user_libraries;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;

pub struct LibraryRepositoryImpl {
    db: Arc<Database>,
}

impl LibraryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn to_entity(model: LibraryEntryModel) -> LibraryEntry {
        LibraryEntry {
            id: model.id,
            user_id: model.user_id,
            content_id: model.content_id,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl LibraryRepository for LibraryRepositoryImpl {
    async fn find_for(
        &self,
        user_id: Uuid,
        content_id: Uuid,
    ) -> AppResult<Option<LibraryEntry>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<LibraryEntryModel>> {
            let mut conn = db.get_connection()?;
            let m = user_libraries::table
                .filter(user_libraries::user_id.eq(user_id))
                .filter(user_libraries::content_id.eq(content_id))
                .first::<LibraryEntryModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::to_entity))
    }

    async fn insert(
        &self,
        user_id: Uuid,
        content_id: Uuid,
        status: LibraryStatus,
    ) -> AppResult<LibraryEntry> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<LibraryEntryModel> {
            let mut conn = db.get_connection()?;

            let row = NewLibraryEntry {
                id: Uuid::new_v4(),
                user_id,
                content_id,
                status,
            };

            // unique_user_content_library catches a concurrent double-add
            let model = diesel::insert_into(user_libraries::table)
                .values(&row)
                .get_result::<LibraryEntryModel>(&mut conn)?;
            Ok(model)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn update_status(&self, id: Uuid, status: LibraryStatus) -> AppResult<LibraryEntry> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<LibraryEntryModel> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(user_libraries::table.filter(user_libraries::id.eq(id)))
                .set((
                    user_libraries::status.eq(status),
                    user_libraries::updated_at.eq(Utc::now()),
                ))
                .get_result::<LibraryEntryModel>(&mut conn)
                .optional()?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Library entry with ID {} not found", id))
                })?;
            Ok(updated)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn delete_for(&self, user_id: Uuid, content_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(
                user_libraries::table
                    .filter(user_libraries::user_id.eq(user_id))
                    .filter(user_libraries::content_id.eq(content_id)),
            )
            .execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }

    async fn list(
        &self,
        user_id: Uuid,
        status: Option<LibraryStatus>,
        page: Page,
    ) -> AppResult<Vec<LibraryEntry>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<LibraryEntry>> {
            let mut conn = db.get_connection()?;

            let mut query = user_libraries::table
                .filter(user_libraries::user_id.eq(user_id))
                .into_boxed();
            if let Some(status) = status {
                query = query.filter(user_libraries::status.eq(status));
            }

            // Shelf order is by when the entry was added; a status change
            // bumps updated_at but must not reorder the shelf.
            let models = query
                .order(user_libraries::created_at.desc())
                .offset(page.offset())
                .limit(page.limit())
                .load::<LibraryEntryModel>(&mut conn)?;

            Ok(models.into_iter().map(Self::to_entity).collect())
        })
        .await?
    }
}
