use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{FollowModel, NewFollow, UserChangeset, UserModel};
use crate::modules::users::domain::{
    entities::{ProfileChanges, User, UserStats, UserSummary},
    repositories::{FollowRepository, UserRepository},
};
use crate::schema::{follows, ratings, reviews, users};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct UserRepositoryImpl {
    db: Arc<Database>,
}

impl UserRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn model_to_entity(model: UserModel) -> User {
        User {
            id: model.id,
            username: model.username,
            email: model.email,
            avatar_url: model.avatar_url,
            bio: model.bio,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::id.eq(id))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::model_to_entity))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let db = Arc::clone(&self.db);
        let needle = username.to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<UserModel>> {
            let mut conn = db.get_connection()?;
            let m = users::table
                .filter(users::username.eq(&needle))
                .first::<UserModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::model_to_entity))
    }

    async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, UserSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<Uuid, UserSummary>> {
            let mut conn = db.get_connection()?;

            let rows = users::table
                .filter(users::id.eq_any(&ids))
                .select((users::id, users::username, users::avatar_url))
                .load::<(Uuid, String, Option<String>)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(id, username, avatar_url)| {
                    (
                        id,
                        UserSummary {
                            id,
                            username,
                            avatar_url,
                        },
                    )
                })
                .collect())
        })
        .await?
    }

    async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<User> {
        let db = Arc::clone(&self.db);

        let changeset = UserChangeset {
            username: changes.username,
            bio: changes.bio,
            avatar_url: changes.avatar_url,
            updated_at: Some(chrono::Utc::now()),
        };

        let model = task::spawn_blocking(move || -> AppResult<UserModel> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(users::table.filter(users::id.eq(id)))
                .set(&changeset)
                .get_result::<UserModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("User with ID {} not found", id)))?;
            Ok(updated)
        })
        .await??;

        Ok(Self::model_to_entity(model))
    }

    async fn stats(&self, id: Uuid) -> AppResult<UserStats> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<UserStats> {
            let mut conn = db.get_connection()?;

            let total_ratings: i64 = ratings::table
                .filter(ratings::user_id.eq(id))
                .count()
                .get_result(&mut conn)?;
            let total_reviews: i64 = reviews::table
                .filter(reviews::user_id.eq(id))
                .count()
                .get_result(&mut conn)?;
            let followers_count: i64 = follows::table
                .filter(follows::followed_id.eq(id))
                .count()
                .get_result(&mut conn)?;
            let following_count: i64 = follows::table
                .filter(follows::follower_id.eq(id))
                .count()
                .get_result(&mut conn)?;

            Ok(UserStats {
                total_ratings,
                total_reviews,
                followers_count,
                following_count,
            })
        })
        .await?
    }
}

pub struct FollowRepositoryImpl {
    db: Arc<Database>,
}

impl FollowRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryImpl {
    async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let edge = NewFollow {
                id: Uuid::new_v4(),
                follower_id,
                followed_id,
            };

            // unique_follow turns a concurrent duplicate into Conflict
            diesel::insert_into(follows::table)
                .values(&edge)
                .execute(&mut conn)?;

            Ok(())
        })
        .await?
    }

    async fn delete(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;

            let n = diesel::delete(
                follows::table
                    .filter(follows::follower_id.eq(follower_id))
                    .filter(follows::followed_id.eq(followed_id)),
            )
            .execute(&mut conn)?;

            Ok(n > 0)
        })
        .await?
    }

    async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;

            let found = follows::table
                .filter(follows::follower_id.eq(follower_id))
                .filter(follows::followed_id.eq(followed_id))
                .first::<FollowModel>(&mut conn)
                .optional()?;

            Ok(found.is_some())
        })
        .await?
    }

    async fn followed_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Uuid>> {
            let mut conn = db.get_connection()?;

            let ids = follows::table
                .filter(follows::follower_id.eq(user_id))
                .select(follows::followed_id)
                .load::<Uuid>(&mut conn)?;

            Ok(ids)
        })
        .await?
    }

    async fn followers_of(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<UserSummary>> {
            let mut conn = db.get_connection()?;

            let rows = follows::table
                .inner_join(users::table.on(users::id.eq(follows::follower_id)))
                .filter(follows::followed_id.eq(user_id))
                .select((users::id, users::username, users::avatar_url))
                .load::<(Uuid, String, Option<String>)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(id, username, avatar_url)| UserSummary {
                    id,
                    username,
                    avatar_url,
                })
                .collect())
        })
        .await?
    }

    async fn following_of(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<UserSummary>> {
            let mut conn = db.get_connection()?;

            let rows = follows::table
                .inner_join(users::table.on(users::id.eq(follows::followed_id)))
                .filter(follows::follower_id.eq(user_id))
                .select((users::id, users::username, users::avatar_url))
                .load::<(Uuid, String, Option<String>)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(id, username, avatar_url)| UserSummary {
                    id,
                    username,
                    avatar_url,
                })
                .collect())
        })
        .await?
    }
}
