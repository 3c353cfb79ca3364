use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::Content, repositories::ContentRepository, value_objects::ContentType,
};
use crate::log_info;
use crate::modules::catalog::domain::{
    BookCatalog, BookSearchResult, MovieCatalog, MovieSearchResult,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;

const MAX_CHART_SIZE: i64 = 50;

pub struct ContentService {
    content_repo: Arc<dyn ContentRepository>,
    movie_catalog: Arc<dyn MovieCatalog>,
    book_catalog: Arc<dyn BookCatalog>,
}

impl ContentService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        movie_catalog: Arc<dyn MovieCatalog>,
        book_catalog: Arc<dyn BookCatalog>,
    ) -> Self {
        Self {
            content_repo,
            movie_catalog,
            book_catalog,
        }
    }

    pub async fn get_content(&self, id: Uuid) -> AppResult<Content> {
        self.content_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Content with ID {} not found", id)))
    }

    pub async fn list_contents(
        &self,
        kind: Option<ContentType>,
        page: Page,
    ) -> AppResult<Vec<Content>> {
        self.content_repo.list(kind, page).await
    }

    pub async fn top_rated(
        &self,
        kind: Option<ContentType>,
        limit: i64,
    ) -> AppResult<Vec<Content>> {
        self.content_repo
            .top_rated(kind, limit.clamp(1, MAX_CHART_SIZE))
            .await
    }

    pub async fn most_popular(
        &self,
        kind: Option<ContentType>,
        limit: i64,
    ) -> AppResult<Vec<Content>> {
        self.content_repo
            .most_popular(kind, limit.clamp(1, MAX_CHART_SIZE))
            .await
    }

    /// Returns the local content row for a TMDb movie, importing it from the
    /// external catalog on first access.
    pub async fn get_or_fetch_movie(&self, tmdb_id: i32) -> AppResult<Content> {
        if let Some(existing) = self.content_repo.find_movie_by_tmdb_id(tmdb_id).await? {
            return Ok(existing);
        }

        let new_movie = self
            .movie_catalog
            .movie_details(tmdb_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Movie with TMDb ID {} not found", tmdb_id))
            })?;

        match self.content_repo.insert_movie(new_movie).await {
            Ok(content) => {
                log_info!("Imported movie '{}' (tmdb {})", content.title, tmdb_id);
                Ok(content)
            }
            // A concurrent import won the unique index race; their row is ours
            Err(AppError::Conflict(_)) => self
                .content_repo
                .find_movie_by_tmdb_id(tmdb_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Movie with TMDb ID {} vanished after conflicting import",
                        tmdb_id
                    ))
                }),
            Err(e) => Err(e),
        }
    }

    /// Returns the local content row for a Google Books volume, importing it
    /// from the external catalog on first access.
    pub async fn get_or_fetch_book(&self, google_books_id: &str) -> AppResult<Content> {
        if let Some(existing) = self
            .content_repo
            .find_book_by_google_id(google_books_id)
            .await?
        {
            return Ok(existing);
        }

        let new_book = self
            .book_catalog
            .book_details(google_books_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Book with volume ID {} not found", google_books_id))
            })?;

        match self.content_repo.insert_book(new_book).await {
            Ok(content) => {
                log_info!(
                    "Imported book '{}' (volume {})",
                    content.title,
                    google_books_id
                );
                Ok(content)
            }
            Err(AppError::Conflict(_)) => self
                .content_repo
                .find_book_by_google_id(google_books_id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Book with volume ID {} vanished after conflicting import",
                        google_books_id
                    ))
                }),
            Err(e) => Err(e),
        }
    }

    pub async fn search_movies(
        &self,
        query: &str,
        page: i32,
    ) -> AppResult<Vec<MovieSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        self.movie_catalog.search_movies(query, page.max(1)).await
    }

    pub async fn search_books(&self, query: &str, page: i32) -> AppResult<Vec<BookSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        self.book_catalog.search_books(query, page.max(1)).await
    }

    pub async fn search_book_by_isbn(&self, isbn: &str) -> AppResult<Option<BookSearchResult>> {
        self.book_catalog.search_by_isbn(isbn.trim()).await
    }

    pub async fn browse_popular_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>> {
        self.movie_catalog.popular_movies(page.max(1)).await
    }

    pub async fn browse_top_rated_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>> {
        self.movie_catalog.top_rated_movies(page.max(1)).await
    }
}
