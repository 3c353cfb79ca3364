use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use super::dto::{Volume, VolumesResponse};
use super::mapper::GoogleBooksMapper;
use crate::modules::catalog::domain::{BookCatalog, BookSearchResult};
use crate::modules::catalog::infrastructure::http::CatalogHttpHandler;
use crate::modules::content::domain::NewBook;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

const GOOGLE_BOOKS_BASE_URL: &str = "https://www.googleapis.com/books/v1";
const PAGE_SIZE: i32 = 20;

pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    rate_limiter: Arc<RateLimiter>,
}

impl GoogleBooksClient {
    /// The API key is optional; anonymous requests get a lower quota.
    pub fn new(api_key: Option<String>) -> AppResult<Self> {
        let client = CatalogHttpHandler::create_http_client(30, "Shelfstream/1.0")?;

        Ok(Self {
            client,
            base_url: GOOGLE_BOOKS_BASE_URL.to_string(),
            api_key,
            rate_limiter: Arc::new(RateLimiter::new(2.0)),
        })
    }

    async fn search_volumes(&self, query: &str, page: i32) -> AppResult<Vec<Volume>> {
        self.rate_limiter.wait().await;

        let start_index = (page.max(1) - 1) * PAGE_SIZE;

        let mut request = self
            .client
            .get(format!("{}/volumes", self.base_url))
            .query(&[
                ("q", query.to_string()),
                ("startIndex", start_index.to_string()),
                ("maxResults", PAGE_SIZE.to_string()),
            ]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        CatalogHttpHandler::handle_response_status(response.status(), "Google Books")?;

        let body = response
            .json::<VolumesResponse>()
            .await
            .map_err(|e| {
                AppError::ApiError(format!("Failed to parse Google Books response: {}", e))
            })?;

        Ok(body.items.unwrap_or_default())
    }
}

#[async_trait]
impl BookCatalog for GoogleBooksClient {
    async fn search_books(&self, query: &str, page: i32) -> AppResult<Vec<BookSearchResult>> {
        let volumes = self.search_volumes(query, page).await?;

        Ok(volumes
            .into_iter()
            .map(GoogleBooksMapper::to_search_result)
            .collect())
    }

    async fn book_details(&self, google_books_id: &str) -> AppResult<Option<NewBook>> {
        self.rate_limiter.wait().await;

        let mut request = self
            .client
            .get(format!("{}/volumes/{}", self.base_url, google_books_id));
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        match CatalogHttpHandler::handle_response_status(response.status(), "Google Books") {
            Ok(()) => {}
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        }

        let volume = response.json::<Volume>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse Google Books response: {}", e))
        })?;

        Ok(Some(GoogleBooksMapper::to_new_book(volume)))
    }

    async fn search_by_isbn(&self, isbn: &str) -> AppResult<Option<BookSearchResult>> {
        let query = format!("isbn:{}", isbn);
        let volumes = self.search_volumes(&query, 1).await?;

        Ok(volumes
            .into_iter()
            .next()
            .map(GoogleBooksMapper::to_search_result))
    }
}
