use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::feed::domain::entities::ActivityType;
use crate::schema::{activities, likes};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = activities)]
pub struct ActivityModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub content_id: Option<Uuid>,
    pub rating_id: Option<Uuid>,
    pub review_id: Option<Uuid>,
    pub list_id: Option<Uuid>,
    /// JSON payload serialized to text
    pub extra: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = activities)]
pub struct NewActivityRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub content_id: Option<Uuid>,
    pub rating_id: Option<Uuid>,
    pub review_id: Option<Uuid>,
    pub list_id: Option<Uuid>,
    pub extra: Option<String>,
}

// The activity flavor of a like row
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = likes)]
pub struct NewActivityLike {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_id: Uuid,
}
