use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::ContentType;

/// A catalogued title together with its kind-specific details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub tmdb_id: Option<i32>,
    pub google_books_id: Option<String>,
    pub stats: ContentStats,
    pub details: ContentDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self.details {
            ContentDetails::Movie(_) => ContentType::Movie,
            ContentDetails::Book(_) => ContentType::Book,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "lowercase")]
pub enum ContentDetails {
    Movie(MovieDetails),
    Book(BookDetails),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub director: Option<String>,
    pub cast_names: Option<String>,
    pub genres: Option<String>,
    pub original_language: Option<String>,
    pub imdb_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookDetails {
    pub authors: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub page_count: Option<i32>,
    pub isbn_10: Option<String>,
    pub isbn_13: Option<String>,
    pub categories: Option<String>,
    pub language: Option<String>,
}

/// Denormalized rating figures stored on the content row itself.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContentStats {
    pub average_rating: f64,
    pub total_ratings: i32,
    pub total_reviews: i32,
}

/// The slice of a content row that feed items and list views embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummary {
    pub id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub cover_image_url: Option<String>,
}

impl From<&Content> for ContentSummary {
    fn from(content: &Content) -> Self {
        Self {
            id: content.id,
            content_type: content.content_type(),
            title: content.title.clone(),
            cover_image_url: content.cover_image_url.clone(),
        }
    }
}

/// Payload for persisting a movie fetched from the external catalog.
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub tmdb_id: i32,
    pub details: MovieDetails,
}

/// Payload for persisting a book fetched from the external catalog.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub google_books_id: String,
    pub details: BookDetails,
}
