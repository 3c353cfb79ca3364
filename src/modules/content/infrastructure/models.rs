use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::content::domain::value_objects::ContentType;
use crate::schema::{books, contents, movies};

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = contents)]
pub struct ContentModel {
    pub id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub tmdb_id: Option<i32>,
    pub google_books_id: Option<String>,
    pub average_rating: f64,
    pub total_ratings: i32,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = contents)]
pub struct NewContentRow {
    pub id: Uuid,
    pub content_type: ContentType,
    pub title: String,
    pub original_title: Option<String>,
    pub description: Option<String>,
    pub cover_image_url: Option<String>,
    pub tmdb_id: Option<i32>,
    pub google_books_id: Option<String>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies, primary_key(content_id))]
pub struct MovieModel {
    pub content_id: Uuid,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub director: Option<String>,
    pub cast_names: Option<String>,
    pub genres: Option<String>,
    pub original_language: Option<String>,
    pub imdb_id: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovieRow {
    pub content_id: Uuid,
    pub release_date: Option<NaiveDate>,
    pub runtime: Option<i32>,
    pub director: Option<String>,
    pub cast_names: Option<String>,
    pub genres: Option<String>,
    pub original_language: Option<String>,
    pub imdb_id: Option<String>,
}

#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = books, primary_key(content_id))]
pub struct BookModel {
    pub content_id: Uuid,
    pub authors: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub page_count: Option<i32>,
    pub isbn_10: Option<String>,
    pub isbn_13: Option<String>,
    pub categories: Option<String>,
    pub language: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct NewBookRow {
    pub content_id: Uuid,
    pub authors: Option<String>,
    pub publisher: Option<String>,
    pub published_date: Option<NaiveDate>,
    pub page_count: Option<i32>,
    pub isbn_10: Option<String>,
    pub isbn_13: Option<String>,
    pub categories: Option<String>,
    pub language: Option<String>,
}
