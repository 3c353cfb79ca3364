use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{NewRatingRow, NewReviewLike, NewReviewRow, RatingModel, ReviewModel};
use crate::modules::ratings::domain::{
    entities::{NewRating, NewReview, Rating, Review, ReviewWithAuthor},
    repositories::{RatingRepository, ReviewRepository},
};
use crate::modules::users::domain::entities::UserSummary;
use crate::schema::{likes, ratings, reviews, users};
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;

pub struct RatingRepositoryImpl {
    db: Arc<Database>,
}

impl RatingRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn to_entity(model: RatingModel) -> Rating {
        Rating {
            id: model.id,
            user_id: model.user_id,
            content_id: model.content_id,
            score: model.score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryImpl {
    async fn insert(&self, new_rating: NewRating) -> AppResult<Rating> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<RatingModel> {
            let mut conn = db.get_connection()?;

            let row = NewRatingRow {
                id: Uuid::new_v4(),
                user_id: new_rating.user_id,
                content_id: new_rating.content_id,
                score: new_rating.score,
            };

            // unique_user_content_rating turns a concurrent double-submit
            // into Conflict
            let model = diesel::insert_into(ratings::table)
                .values(&row)
                .get_result::<RatingModel>(&mut conn)?;
            Ok(model)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rating>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<RatingModel>> {
            let mut conn = db.get_connection()?;
            let m = ratings::table
                .filter(ratings::id.eq(id))
                .first::<RatingModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::to_entity))
    }

    async fn find_by_user_and_content(
        &self,
        user_id: Uuid,
        content_id: Uuid,
    ) -> AppResult<Option<Rating>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<RatingModel>> {
            let mut conn = db.get_connection()?;
            let m = ratings::table
                .filter(ratings::user_id.eq(user_id))
                .filter(ratings::content_id.eq(content_id))
                .first::<RatingModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::to_entity))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, Rating>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<Uuid, Rating>> {
            let mut conn = db.get_connection()?;

            let models = ratings::table
                .filter(ratings::id.eq_any(&ids))
                .load::<RatingModel>(&mut conn)?;

            Ok(models
                .into_iter()
                .map(|m| (m.id, Self::to_entity(m)))
                .collect())
        })
        .await?
    }

    async fn update_score(&self, id: Uuid, score: f64) -> AppResult<Rating> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<RatingModel> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(ratings::table.filter(ratings::id.eq(id)))
                .set((ratings::score.eq(score), ratings::updated_at.eq(Utc::now())))
                .get_result::<RatingModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("Rating with ID {} not found", id)))?;
            Ok(updated)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(ratings::table.filter(ratings::id.eq(id)))
                .execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }

    async fn list_for_content(&self, content_id: Uuid, page: Page) -> AppResult<Vec<Rating>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Rating>> {
            let mut conn = db.get_connection()?;

            let models = ratings::table
                .filter(ratings::content_id.eq(content_id))
                .order(ratings::created_at.desc())
                .offset(page.offset())
                .limit(page.limit())
                .load::<RatingModel>(&mut conn)?;

            Ok(models.into_iter().map(Self::to_entity).collect())
        })
        .await?
    }

    async fn list_for_user(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Rating>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Rating>> {
            let mut conn = db.get_connection()?;

            let models = ratings::table
                .filter(ratings::user_id.eq(user_id))
                .order(ratings::created_at.desc())
                .offset(page.offset())
                .limit(page.limit())
                .load::<RatingModel>(&mut conn)?;

            Ok(models.into_iter().map(Self::to_entity).collect())
        })
        .await?
    }
}

pub struct ReviewRepositoryImpl {
    db: Arc<Database>,
}

impl ReviewRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn to_entity(model: ReviewModel) -> Review {
        Review {
            id: model.id,
            user_id: model.user_id,
            content_id: model.content_id,
            text: model.text,
            likes_count: model.likes_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn insert(&self, new_review: NewReview) -> AppResult<Review> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;

            let row = NewReviewRow {
                id: Uuid::new_v4(),
                user_id: new_review.user_id,
                content_id: new_review.content_id,
                text: new_review.text,
            };

            let model = diesel::insert_into(reviews::table)
                .values(&row)
                .get_result::<ReviewModel>(&mut conn)?;
            Ok(model)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<ReviewModel>> {
            let mut conn = db.get_connection()?;
            let m = reviews::table
                .filter(reviews::id.eq(id))
                .first::<ReviewModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Self::to_entity))
    }

    async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, Review>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<Uuid, Review>> {
            let mut conn = db.get_connection()?;

            let models = reviews::table
                .filter(reviews::id.eq_any(&ids))
                .load::<ReviewModel>(&mut conn)?;

            Ok(models
                .into_iter()
                .map(|m| (m.id, Self::to_entity(m)))
                .collect())
        })
        .await?
    }

    async fn update_text(&self, id: Uuid, text: String) -> AppResult<Review> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ReviewModel> {
            let mut conn = db.get_connection()?;
            let updated = diesel::update(reviews::table.filter(reviews::id.eq(id)))
                .set((reviews::text.eq(text), reviews::updated_at.eq(Utc::now())))
                .get_result::<ReviewModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("Review with ID {} not found", id)))?;
            Ok(updated)
        })
        .await??;

        Ok(Self::to_entity(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(reviews::table.filter(reviews::id.eq(id)))
                .execute(&mut conn)?;
            Ok(n > 0)
        })
        .await?
    }

    async fn list_for_content(
        &self,
        content_id: Uuid,
        page: Page,
    ) -> AppResult<Vec<ReviewWithAuthor>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<ReviewWithAuthor>> {
            let mut conn = db.get_connection()?;

            let rows = reviews::table
                .inner_join(users::table)
                .filter(reviews::content_id.eq(content_id))
                .order(reviews::created_at.desc())
                .offset(page.offset())
                .limit(page.limit())
                .select((
                    ReviewModel::as_select(),
                    (users::id, users::username, users::avatar_url),
                ))
                .load::<(ReviewModel, (Uuid, String, Option<String>))>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(model, (id, username, avatar_url))| ReviewWithAuthor {
                    review: Self::to_entity(model),
                    author: UserSummary {
                        id,
                        username,
                        avatar_url,
                    },
                })
                .collect())
        })
        .await?
    }

    async fn list_for_user(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Review>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Review>> {
            let mut conn = db.get_connection()?;

            let models = reviews::table
                .filter(reviews::user_id.eq(user_id))
                .order(reviews::created_at.desc())
                .offset(page.offset())
                .limit(page.limit())
                .load::<ReviewModel>(&mut conn)?;

            Ok(models.into_iter().map(Self::to_entity).collect())
        })
        .await?
    }

    async fn like(&self, user_id: Uuid, review_id: Uuid) -> AppResult<i32> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i32> {
            let mut conn = db.get_connection()?;

            conn.transaction::<i32, AppError, _>(|conn| {
                let row = NewReviewLike {
                    id: Uuid::new_v4(),
                    user_id,
                    review_id,
                };

                // unique_user_review_like turns a duplicate into Conflict,
                // rolling back the counter bump with it
                diesel::insert_into(likes::table)
                    .values(&row)
                    .execute(conn)?;

                let new_count = diesel::update(reviews::table.filter(reviews::id.eq(review_id)))
                    .set(reviews::likes_count.eq(reviews::likes_count + 1))
                    .returning(reviews::likes_count)
                    .get_result::<i32>(conn)?;

                Ok(new_count)
            })
        })
        .await?
    }

    async fn unlike(&self, user_id: Uuid, review_id: Uuid) -> AppResult<Option<i32>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<i32>> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Option<i32>, AppError, _>(|conn| {
                let removed = diesel::delete(
                    likes::table
                        .filter(likes::user_id.eq(user_id))
                        .filter(likes::review_id.eq(review_id)),
                )
                .execute(conn)?;

                if removed == 0 {
                    return Ok(None);
                }

                // Floor at zero in case the counter ever drifted low
                let current: i32 = reviews::table
                    .filter(reviews::id.eq(review_id))
                    .select(reviews::likes_count)
                    .get_result(conn)?;

                let new_count = (current - 1).max(0);
                diesel::update(reviews::table.filter(reviews::id.eq(review_id)))
                    .set(reviews::likes_count.eq(new_count))
                    .execute(conn)?;

                Ok(Some(new_count))
            })
        })
        .await?
    }
}
