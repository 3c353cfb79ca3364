use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::shared::errors::{AppError, AppResult};

/// Shared HTTP plumbing for the external catalog clients.
pub struct CatalogHttpHandler;

impl CatalogHttpHandler {
    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Maps non-success status codes to errors consistently across catalogs.
    pub fn handle_response_status(status: StatusCode, provider_name: &str) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::ExternalServiceError(format!(
                "{} rate limit exceeded",
                provider_name
            ))),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(AppError::ApiError(format!(
                "{} rejected the API key",
                provider_name
            ))),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {} API",
                provider_name
            ))),
            _ if status.is_server_error() => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable",
                provider_name
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                provider_name, status
            ))),
        }
    }
}
