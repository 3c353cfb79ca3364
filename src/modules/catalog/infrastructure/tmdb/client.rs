use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use super::dto::{TmdbMovieDetail, TmdbPagedResponse};
use super::mapper::TmdbMapper;
use crate::modules::catalog::domain::{MovieCatalog, MovieSearchResult};
use crate::modules::catalog::infrastructure::http::CatalogHttpHandler;
use crate::modules::content::domain::NewMovie;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    rate_limiter: Arc<RateLimiter>,
}

impl TmdbClient {
    pub fn new(api_key: String) -> AppResult<Self> {
        let client = CatalogHttpHandler::create_http_client(30, "Shelfstream/1.0")?;

        Ok(Self {
            client,
            base_url: TMDB_BASE_URL.to_string(),
            api_key,
            // TMDb allows roughly 40 requests per 10 seconds
            rate_limiter: Arc::new(RateLimiter::new(4.0)),
        })
    }

    async fn fetch_page(&self, path: &str, query: &[(&str, String)]) -> AppResult<TmdbPagedResponse> {
        self.rate_limiter.wait().await;

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.clone())])
            .query(query)
            .send()
            .await?;

        CatalogHttpHandler::handle_response_status(response.status(), "TMDb")?;

        response
            .json::<TmdbPagedResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse TMDb response: {}", e)))
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn search_movies(&self, query: &str, page: i32) -> AppResult<Vec<MovieSearchResult>> {
        let response = self
            .fetch_page(
                "/search/movie",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("include_adult", "false".to_string()),
                ],
            )
            .await?;

        Ok(response
            .results
            .into_iter()
            .map(TmdbMapper::to_search_result)
            .collect())
    }

    async fn movie_details(&self, tmdb_id: i32) -> AppResult<Option<NewMovie>> {
        self.rate_limiter.wait().await;

        let url = format!("{}/movie/{}", self.base_url, tmdb_id);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("append_to_response", "credits"),
            ])
            .send()
            .await?;

        match CatalogHttpHandler::handle_response_status(response.status(), "TMDb") {
            Ok(()) => {}
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        }

        let detail = response
            .json::<TmdbMovieDetail>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse TMDb response: {}", e)))?;

        Ok(Some(TmdbMapper::to_new_movie(detail)))
    }

    async fn popular_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>> {
        let response = self
            .fetch_page("/movie/popular", &[("page", page.to_string())])
            .await?;

        Ok(response
            .results
            .into_iter()
            .map(TmdbMapper::to_search_result)
            .collect())
    }

    async fn top_rated_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>> {
        let response = self
            .fetch_page("/movie/top_rated", &[("page", page.to_string())])
            .await?;

        Ok(response
            .results
            .into_iter()
            .map(TmdbMapper::to_search_result)
            .collect())
    }
}
