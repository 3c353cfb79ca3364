use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant for the two catalogued media kinds. Maps onto the
/// `content_type` Postgres enum.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::ContentType"]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Book,
}

impl ContentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ContentType::Movie => "movie",
            ContentType::Book => "book",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
