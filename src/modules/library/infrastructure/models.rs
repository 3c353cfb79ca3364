use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::library::domain::entities::LibraryStatus;
use crate::schema::user_libraries;

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = user_libraries)]
pub struct LibraryEntryModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub status: LibraryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user_libraries)]
pub struct NewLibraryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub status: LibraryStatus,
}
