use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One hit from a TMDb movie search or discovery listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSearchResult {
    pub tmdb_id: i32,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub vote_average: Option<f64>,
}

/// One hit from a Google Books volume search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSearchResult {
    pub google_books_id: String,
    pub title: String,
    pub authors: Option<String>,
    pub cover_url: Option<String>,
    pub published_date: Option<String>,
}
