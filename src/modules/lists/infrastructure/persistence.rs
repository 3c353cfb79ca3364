use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{ListChangeset, ListItemModel, ListModel, NewListItemRow, NewListRow};
use crate::modules::content::domain::entities::ContentSummary;
use crate::modules::content::domain::value_objects::ContentType;
use crate::modules::lists::domain::{
    entities::{CustomList, ListChanges, ListDetail, ListItem, ListItemDetail, ListSummary},
    repositories::ListRepository,
};
use crate::schema::{contents, custom_list_items, custom_lists};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct ListRepositoryImpl {
    db: Arc<Database>,
}

impl ListRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn to_entity(model: ListModel) -> CustomList {
        CustomList {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            description: model.description,
            is_public: model.is_public,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn item_to_entity(model: ListItemModel) -> ListItem {
        ListItem {
            id: model.id,
            list_id: model.list_id,
            content_id: model.content_id,
            position: model.position,
            added_at: model.added_at,
        }
    }
}

#[async_trait]
impl ListRepository for ListRepositoryImpl {
    async fn insert(
        &self,
        user_id: Uuid,
        name: String,
        description: Option<String>,
        is_public: bool,
    ) -> AppResult<CustomList> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ListModel> {
            let mut conn = db.get_connection()?;

            let row = NewListRow {
                id: Uuid::new_v4(),
                user_id,
                name,
                description,
                is_public,
            };

            let model = diesel::insert_into(custom_lists::table)
                .values(&row)
                .get_result::<ListModel>(&mut conn)?;
            Ok(model)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CustomList>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<ListModel>> {
            let mut conn = db.get_connection()?;
            let m = custom_lists::table
                .filter(custom_lists::id.eq(id))
                .first::<ListModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::to_entity))
    }

    async fn update(&self, id: Uuid, changes: ListChanges) -> AppResult<CustomList> {
        let db = Arc::clone(&self.db);

        let changeset = ListChangeset {
            name: changes.name,
            description: changes.description,
            is_public: changes.is_public,
            updated_at: Some(Utc::now()),
        };

        let model = task::spawn_blocking(move || -> AppResult<ListModel> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(custom_lists::table.filter(custom_lists::id.eq(id)))
                .set(&changeset)
                .get_result::<ListModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("List with ID {} not found", id)))?;
            Ok(updated)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(custom_lists::table.filter(custom_lists::id.eq(id)))
                .execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }

    async fn count_items(&self, list_id: Uuid) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count: i64 = custom_list_items::table
                .filter(custom_list_items::list_id.eq(list_id))
                .count()
                .get_result(&mut conn)?;
            Ok(count)
        })
        .await?
    }

    async fn find_item(&self, list_id: Uuid, content_id: Uuid) -> AppResult<Option<ListItem>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<ListItemModel>> {
            let mut conn = db.get_connection()?;
            let m = custom_list_items::table
                .filter(custom_list_items::list_id.eq(list_id))
                .filter(custom_list_items::content_id.eq(content_id))
                .first::<ListItemModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::item_to_entity))
    }

    async fn insert_item(
        &self,
        list_id: Uuid,
        content_id: Uuid,
        position: i32,
    ) -> AppResult<ListItem> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ListItemModel> {
            let mut conn = db.get_connection()?;

            let row = NewListItemRow {
                id: Uuid::new_v4(),
                list_id,
                content_id,
                position,
            };

            // unique_list_content turns a concurrent duplicate into Conflict
            let model = diesel::insert_into(custom_list_items::table)
                .values(&row)
                .get_result::<ListItemModel>(&mut conn)?;
            Ok(model)
        })
        .await??;

        Ok(Self::item_to_entity(model))
    }

    async fn delete_item(&self, list_id: Uuid, content_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(
                custom_list_items::table
                    .filter(custom_list_items::list_id.eq(list_id))
                    .filter(custom_list_items::content_id.eq(content_id)),
            )
            .execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
        only_public: bool,
    ) -> AppResult<Vec<ListSummary>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<ListSummary>> {
            let mut conn = db.get_connection()?;

            let mut query = custom_lists::table
                .filter(custom_lists::user_id.eq(user_id))
                .into_boxed();
            if only_public {
                query = query.filter(custom_lists::is_public.eq(true));
            }

            let models = query
                .order(custom_lists::created_at.desc())
                .load::<ListModel>(&mut conn)?;

            let list_ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
            let mut counts: HashMap<Uuid, i64> = HashMap::new();
            if !list_ids.is_empty() {
                let rows: Vec<(Uuid, i64)> = custom_list_items::table
                    .filter(custom_list_items::list_id.eq_any(&list_ids))
                    .group_by(custom_list_items::list_id)
                    .select((custom_list_items::list_id, diesel::dsl::count_star()))
                    .load(&mut conn)?;
                counts.extend(rows);
            }

            Ok(models
                .into_iter()
                .map(|model| {
                    let items_count = counts.get(&model.id).copied().unwrap_or(0);
                    ListSummary {
                        list: Self::to_entity(model),
                        items_count,
                    }
                })
                .collect())
        })
        .await?
    }

    async fn detail(&self, id: Uuid) -> AppResult<Option<ListDetail>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<ListDetail>> {
            let mut conn = db.get_connection()?;

            let Some(model) = custom_lists::table
                .filter(custom_lists::id.eq(id))
                .first::<ListModel>(&mut conn)
                .optional()?
            else {
                return Ok(None);
            };

            let rows = custom_list_items::table
                .inner_join(contents::table)
                .filter(custom_list_items::list_id.eq(id))
                .order(custom_list_items::position.asc())
                .select((
                    ListItemModel::as_select(),
                    (
                        contents::id,
                        contents::content_type,
                        contents::title,
                        contents::cover_image_url,
                    ),
                ))
                .load::<(ListItemModel, (Uuid, ContentType, String, Option<String>))>(&mut conn)?;

            let items = rows
                .into_iter()
                .map(
                    |(item, (content_id, content_type, title, cover_image_url))| ListItemDetail {
                        item: Self::item_to_entity(item),
                        content: ContentSummary {
                            id: content_id,
                            content_type,
                            title,
                            cover_image_url,
                        },
                    },
                )
                .collect();

            Ok(Some(ListDetail {
                list: Self::to_entity(model),
                items,
            }))
        })
        .await?
    }

    async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, ListSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<Uuid, ListSummary>> {
            let mut conn = db.get_connection()?;

            let models = custom_lists::table
                .filter(custom_lists::id.eq_any(&ids))
                .load::<ListModel>(&mut conn)?;

            let mut counts: HashMap<Uuid, i64> = HashMap::new();
            if !models.is_empty() {
                let rows: Vec<(Uuid, i64)> = custom_list_items::table
                    .filter(custom_list_items::list_id.eq_any(&ids))
                    .group_by(custom_list_items::list_id)
                    .select((custom_list_items::list_id, diesel::dsl::count_star()))
                    .load(&mut conn)?;
                counts.extend(rows);
            }

            Ok(models
                .into_iter()
                .map(|model| {
                    let items_count = counts.get(&model.id).copied().unwrap_or(0);
                    (
                        model.id,
                        ListSummary {
                            list: Self::to_entity(model),
                            items_count,
                        },
                    )
                })
                .collect())
        })
        .await?
    }
}
