use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::content::domain::entities::ContentSummary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ListChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// Membership of one content in one list. `position` is assigned at append
/// time and never renumbered, so removals leave gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub list_id: Uuid,
    pub content_id: Uuid,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSummary {
    pub list: CustomList,
    pub items_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItemDetail {
    pub item: ListItem,
    pub content: ContentSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDetail {
    pub list: CustomList,
    pub items: Vec<ListItemDetail>,
}
