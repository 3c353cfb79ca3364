use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::schema::{custom_list_items, custom_lists};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = custom_lists)]
pub struct ListModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = custom_lists)]
pub struct NewListRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
}

#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = custom_lists)]
pub struct ListChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = custom_list_items)]
pub struct ListItemModel {
    pub id: Uuid,
    pub list_id: Uuid,
    pub content_id: Uuid,
    pub position: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = custom_list_items)]
pub struct NewListItemRow {
    pub id: Uuid,
    pub list_id: Uuid,
    pub content_id: Uuid,
    pub position: i32,
}
