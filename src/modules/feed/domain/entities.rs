use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::modules::content::domain::entities::ContentSummary;
use crate::modules::lists::domain::entities::ListSummary;
use crate::modules::users::domain::entities::UserSummary;

/// What happened. Maps onto the `activity_type` Postgres enum.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ActivityType"]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Rating,
    Review,
    LibraryAdd,
    ListCreate,
    ListAdd,
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ActivityType::Rating => "rating",
            ActivityType::Review => "review",
            ActivityType::LibraryAdd => "library_add",
            ActivityType::ListCreate => "list_create",
            ActivityType::ListAdd => "list_add",
        };
        write!(f, "{}", name)
    }
}

/// An append-only feed event. The rating, review, and list ids are weak
/// references: the pointed-to row may be deleted afterwards and the
/// activity stays behind, so readers must tolerate dangling ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub content_id: Option<Uuid>,
    pub rating_id: Option<Uuid>,
    pub review_id: Option<Uuid>,
    pub list_id: Option<Uuid>,
    pub extra: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub user_id: Uuid,
    pub activity_type: ActivityType,
    pub content_id: Option<Uuid>,
    pub rating_id: Option<Uuid>,
    pub review_id: Option<Uuid>,
    pub list_id: Option<Uuid>,
    pub extra: Option<serde_json::Value>,
}

impl NewActivity {
    pub fn rating(user_id: Uuid, content_id: Uuid, rating_id: Uuid) -> Self {
        Self {
            user_id,
            activity_type: ActivityType::Rating,
            content_id: Some(content_id),
            rating_id: Some(rating_id),
            review_id: None,
            list_id: None,
            extra: None,
        }
    }

    pub fn review(user_id: Uuid, content_id: Uuid, review_id: Uuid) -> Self {
        Self {
            user_id,
            activity_type: ActivityType::Review,
            content_id: Some(content_id),
            rating_id: None,
            review_id: Some(review_id),
            list_id: None,
            extra: None,
        }
    }

    pub fn library_add(user_id: Uuid, content_id: Uuid, extra: serde_json::Value) -> Self {
        Self {
            user_id,
            activity_type: ActivityType::LibraryAdd,
            content_id: Some(content_id),
            rating_id: None,
            review_id: None,
            list_id: None,
            extra: Some(extra),
        }
    }

    pub fn list_create(user_id: Uuid, list_id: Uuid) -> Self {
        Self {
            user_id,
            activity_type: ActivityType::ListCreate,
            content_id: None,
            rating_id: None,
            review_id: None,
            list_id: Some(list_id),
            extra: None,
        }
    }

    pub fn list_add(user_id: Uuid, list_id: Uuid, content_id: Uuid) -> Self {
        Self {
            user_id,
            activity_type: ActivityType::ListAdd,
            content_id: Some(content_id),
            rating_id: None,
            review_id: None,
            list_id: Some(list_id),
            extra: None,
        }
    }
}

/// A feed entry after enrichment: the raw activity plus whatever its weak
/// references still resolve to, and the viewer's like state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub activity_type: ActivityType,
    pub author: UserSummary,
    pub content: Option<ContentSummary>,
    pub rating_score: Option<f64>,
    pub review_text: Option<String>,
    pub review_likes_count: Option<i32>,
    pub list: Option<ListSummary>,
    pub extra: Option<serde_json::Value>,
    pub likes_count: i64,
    pub is_liked_by_viewer: bool,
    pub created_at: DateTime<Utc>,
}

/// Like state of one activity as seen by one viewer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityLikeState {
    pub likes_count: i64,
    pub is_liked: bool,
}
