use crate::shared::errors::{AppError, AppResult};
use std::env;

/// Runtime settings pulled from the environment. A `.env` file in the
/// working directory is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub tmdb_api_key: String,
    /// Google Books works unauthenticated at a lower quota, so the key is optional.
    pub google_books_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::DatabaseError("DATABASE_URL environment variable not found".to_string())
        })?;

        let tmdb_api_key = env::var("TMDB_API_KEY").map_err(|_| {
            AppError::InvalidInput("TMDB_API_KEY environment variable not found".to_string())
        })?;

        let google_books_api_key = env::var("GOOGLE_BOOKS_API_KEY").ok().filter(|k| !k.is_empty());

        Ok(Self {
            database_url,
            tmdb_api_key,
            google_books_api_key,
        })
    }
}
