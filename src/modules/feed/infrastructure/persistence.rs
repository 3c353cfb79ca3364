use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{ActivityModel, NewActivityLike, NewActivityRow};
use crate::modules::feed::domain::{
    entities::{Activity, NewActivity},
    repositories::{ActivityLikeRepository, ActivityRepository},
};
use crate::modules::users::domain::entities::UserSummary;
use crate::schema::{activities, likes, users};
use crate::shared::database::Database;
use crate::shared::errors::AppResult;
use crate::shared::pagination::Page;

pub struct ActivityRepositoryImpl {
    db: Arc<Database>,
}

impl ActivityRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn to_entity(model: ActivityModel) -> AppResult<Activity> {
        let extra = model
            .extra
            .as_deref()
            .map(serde_json::from_str)
            .transpose()?;

        Ok(Activity {
            id: model.id,
            user_id: model.user_id,
            activity_type: model.activity_type,
            content_id: model.content_id,
            rating_id: model.rating_id,
            review_id: model.review_id,
            list_id: model.list_id,
            extra,
            created_at: model.created_at,
        })
    }

    fn to_entities(models: Vec<ActivityModel>) -> AppResult<Vec<Activity>> {
        models.into_iter().map(Self::to_entity).collect()
    }
}

#[async_trait]
impl ActivityRepository for ActivityRepositoryImpl {
    async fn insert(&self, new_activity: NewActivity) -> AppResult<Activity> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ActivityModel> {
            let mut conn = db.get_connection()?;

            let row = NewActivityRow {
                id: Uuid::new_v4(),
                user_id: new_activity.user_id,
                activity_type: new_activity.activity_type,
                content_id: new_activity.content_id,
                rating_id: new_activity.rating_id,
                review_id: new_activity.review_id,
                list_id: new_activity.list_id,
                extra: new_activity.extra.map(|v| v.to_string()),
            };

            let model = diesel::insert_into(activities::table)
                .values(&row)
                .get_result::<ActivityModel>(&mut conn)?;
            Ok(model)
        })
        .await??;

        Self::to_entity(model)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Activity>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<ActivityModel>> {
            let mut conn = db.get_connection()?;
            let m = activities::table
                .filter(activities::id.eq(id))
                .first::<ActivityModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        model.map(Self::to_entity).transpose()
    }

    async fn page_for_authors(
        &self,
        author_ids: &[Uuid],
        page: Page,
    ) -> AppResult<Vec<Activity>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let author_ids = author_ids.to_vec();

        let models = task::spawn_blocking(move || -> AppResult<Vec<ActivityModel>> {
            let mut conn = db.get_connection()?;
            let models = activities::table
                .filter(activities::user_id.eq_any(&author_ids))
                .order((activities::created_at.desc(), activities::id.desc()))
                .offset(page.offset())
                .limit(page.limit())
                .load::<ActivityModel>(&mut conn)?;
            Ok(models)
        })
        .await??;

        Self::to_entities(models)
    }

    async fn page_for_author(&self, author_id: Uuid, page: Page) -> AppResult<Vec<Activity>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ActivityModel>> {
            let mut conn = db.get_connection()?;
            let models = activities::table
                .filter(activities::user_id.eq(author_id))
                .order((activities::created_at.desc(), activities::id.desc()))
                .offset(page.offset())
                .limit(page.limit())
                .load::<ActivityModel>(&mut conn)?;
            Ok(models)
        })
        .await??;

        Self::to_entities(models)
    }

    async fn page_all(&self, page: Page) -> AppResult<Vec<Activity>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ActivityModel>> {
            let mut conn = db.get_connection()?;
            let models = activities::table
                .order((activities::created_at.desc(), activities::id.desc()))
                .offset(page.offset())
                .limit(page.limit())
                .load::<ActivityModel>(&mut conn)?;
            Ok(models)
        })
        .await??;

        Self::to_entities(models)
    }

    async fn delete_for_list(&self, list_id: Uuid) -> AppResult<usize> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(activities::table.filter(activities::list_id.eq(list_id)))
                .execute(&mut conn)?;
            Ok(n)
        })
        .await?
    }
}

pub struct ActivityLikeRepositoryImpl {
    db: Arc<Database>,
}

impl ActivityLikeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityLikeRepository for ActivityLikeRepositoryImpl {
    async fn exists(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let count: i64 = likes::table
                .filter(likes::user_id.eq(user_id))
                .filter(likes::activity_id.eq(activity_id))
                .count()
                .get_result(&mut conn)?;
            Ok(count > 0)
        })
        .await?
    }

    async fn insert(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let row = NewActivityLike {
                id: Uuid::new_v4(),
                user_id,
                activity_id,
            };

            // unique_user_activity_like turns a duplicate into Conflict
            diesel::insert_into(likes::table)
                .values(&row)
                .execute(&mut conn)?;
            Ok(())
        })
        .await?
    }

    async fn delete(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(
                likes::table
                    .filter(likes::user_id.eq(user_id))
                    .filter(likes::activity_id.eq(activity_id)),
            )
            .execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }

    async fn count(&self, activity_id: Uuid) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count: i64 = likes::table
                .filter(likes::activity_id.eq(activity_id))
                .count()
                .get_result(&mut conn)?;
            Ok(count)
        })
        .await?
    }

    async fn counts_by_activity(
        &self,
        activity_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, i64>> {
        if activity_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let activity_ids = activity_ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<Uuid, i64>> {
            let mut conn = db.get_connection()?;

            let rows: Vec<(Option<Uuid>, i64)> = likes::table
                .filter(likes::activity_id.eq_any(&activity_ids))
                .group_by(likes::activity_id)
                .select((likes::activity_id, diesel::dsl::count_star()))
                .load(&mut conn)?;

            Ok(rows
                .into_iter()
                .filter_map(|(id, count)| id.map(|id| (id, count)))
                .collect())
        })
        .await?
    }

    async fn liked_by(
        &self,
        user_id: Uuid,
        activity_ids: &[Uuid],
    ) -> AppResult<HashSet<Uuid>> {
        if activity_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let db = Arc::clone(&self.db);
        let activity_ids = activity_ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashSet<Uuid>> {
            let mut conn = db.get_connection()?;

            let rows: Vec<Option<Uuid>> = likes::table
                .filter(likes::user_id.eq(user_id))
                .filter(likes::activity_id.eq_any(&activity_ids))
                .select(likes::activity_id)
                .load(&mut conn)?;

            Ok(rows.into_iter().flatten().collect())
        })
        .await?
    }

    async fn likers(
        &self,
        activity_id: Uuid,
        limit: i64,
    ) -> AppResult<Vec<(UserSummary, DateTime<Utc>)>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<(UserSummary, DateTime<Utc>)>> {
            let mut conn = db.get_connection()?;

            let rows = likes::table
                .inner_join(users::table)
                .filter(likes::activity_id.eq(activity_id))
                .order(likes::created_at.desc())
                .limit(limit)
                .select((
                    (users::id, users::username, users::avatar_url),
                    likes::created_at,
                ))
                .load::<((Uuid, String, Option<String>), DateTime<Utc>)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|((id, username, avatar_url), liked_at)| {
                    (
                        UserSummary {
                            id,
                            username,
                            avatar_url,
                        },
                        liked_at,
                    )
                })
                .collect())
        })
        .await?
    }
}
