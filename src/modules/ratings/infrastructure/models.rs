use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::{likes, ratings, reviews};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct RatingModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub score: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = ratings)]
pub struct NewRatingRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub score: f64,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct ReviewModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub text: String,
    pub likes_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct NewReviewRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub text: String,
}

// A like row targets either a review or an activity; this one is the
// review flavor.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = likes)]
pub struct NewReviewLike {
    pub id: Uuid,
    pub user_id: Uuid,
    pub review_id: Uuid,
}
