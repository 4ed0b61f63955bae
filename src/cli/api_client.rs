use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::env;

use crate::cli::error::{CliError, CliResult};

/// Environment variable consulted when no `--api-url` is given.
pub const API_URL_ENV: &str = "TODOS_API_URL";

/// Base URL used when neither `--api-url` nor `TODOS_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// API client for communicating with the todos REST API
pub struct ApiClient {
    base_url: String,
    client: Client,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Priority for base URL:
    /// 1. Explicit `api_url` parameter
    /// 2. TODOS_API_URL environment variable
    /// 3. Default: http://localhost:8000
    pub fn new(api_url: Option<String>) -> Self {
        // reqwest is built without a bundled crypto provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let base_url = api_url
            .or_else(|| env::var(API_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Create a GET request builder
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.get(self.url(path))
    }

    /// Create a POST request builder
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.post(self.url(path))
    }

    /// Create a PUT request builder
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.put(self.url(path))
    }

    /// Create a DELETE request builder
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.client.delete(self.url(path))
    }

    /// Handle API response with standardized error handling
    ///
    /// Returns the deserialized response body on success,
    /// otherwise `CliError::InvalidTodo` for a 422 and `CliError::ApiError`
    /// for any other status. The server's `{"error": ...}` message is used
    /// when the body has one.
    pub async fn handle_response<T: DeserializeOwned>(response: Response) -> CliResult<T> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::InvalidResponse {
                    message: e.to_string(),
                })
        } else {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let message = serde_json::from_str::<ErrorBody>(&error_text)
                .map(|body| body.error)
                .unwrap_or(error_text);
            match status {
                422 => Err(CliError::InvalidTodo { message }),
                _ => Err(CliError::ApiError { status, message }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_new_with_explicit_url() {
        let client = ApiClient::new(Some("http://custom:8080".to_string()));
        assert_eq!(client.base_url(), "http://custom:8080");
    }

    #[test]
    #[serial]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new(Some("http://custom:8080/".to_string()));
        assert_eq!(client.base_url(), "http://custom:8080");
        assert_eq!(client.url("/api/v1/todos"), "http://custom:8080/api/v1/todos");
    }

    #[test]
    #[serial]
    fn test_env_var_used_when_no_explicit_url() {
        unsafe {
            env::set_var(API_URL_ENV, "http://from-env:9999");
        }

        let client = ApiClient::new(None);
        assert_eq!(client.base_url(), "http://from-env:9999");

        // Explicit URL still wins
        let client = ApiClient::new(Some("http://explicit:7777".to_string()));
        assert_eq!(client.base_url(), "http://explicit:7777");

        unsafe {
            env::remove_var(API_URL_ENV);
        }
    }

    #[test]
    #[serial]
    fn test_default_url_without_env() {
        unsafe {
            env::remove_var(API_URL_ENV);
        }
        let client = ApiClient::new(None);
        assert_eq!(client.base_url(), DEFAULT_API_URL);
    }

    // handle_response is covered by the command tests against a live server
}
