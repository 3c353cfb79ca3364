use crate::schema::{follows, users};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

// For reading user rows
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct UserModel {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For partial profile updates. Outer None is skipped by diesel;
// Some(None) writes NULL, so bio and avatar can be cleared.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = users)]
pub struct UserChangeset {
    pub username: Option<String>,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = follows)]
pub struct FollowModel {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followed_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = follows)]
pub struct NewFollow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followed_id: Uuid,
}
