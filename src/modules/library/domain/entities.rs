use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Consumption state of a content in someone's library. Maps onto the
/// `library_status` Postgres enum; the first two fit movies, the last
/// two fit books, but nothing enforces the pairing.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::LibraryStatus"]
#[serde(rename_all = "snake_case")]
pub enum LibraryStatus {
    Watched,
    ToWatch,
    Read,
    ToRead,
}

impl fmt::Display for LibraryStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LibraryStatus::Watched => "watched",
            LibraryStatus::ToWatch => "to_watch",
            LibraryStatus::Read => "read",
            LibraryStatus::ToRead => "to_read",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_id: Uuid,
    pub status: LibraryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
