//! HTTP client for the article service.
//!
//! All operations are plain request/response calls: no queueing, no retry,
//! no cancellation. Callers get back a value or an [`ApiError`] and decide
//! themselves whether to navigate; nothing here touches UI state.

use std::fmt;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::article::{Article, ArticleDraft};

/// Standard User-Agent header for scrawl API requests.
pub const USER_AGENT: &str = concat!("scrawl/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// Errors
// ============================================================================

/// Classification of API failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never completed (DNS, connect, timeout, ...).
    Network,
    /// The server rejected the session (401 / invalid credentials).
    Auth,
    /// Client-side field constraints unmet; nothing was sent.
    Validation,
    /// Any other non-2xx response, or a malformed success body.
    Server,
}

/// An API failure with a user-presentable message.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Auth,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Validation,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Server,
            message: message.into(),
        }
    }

    /// Returns true if this failure must force the unauthenticated redirect.
    pub fn is_auth(&self) -> bool {
        self.kind == ApiErrorKind::Auth
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================================================
// Response payloads
// ============================================================================

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginOutcome {
    pub token: String,
    pub message: String,
}

/// Successful list response. Order is the server's order.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleList {
    pub articles: Vec<Article>,
    pub message: String,
}

/// Successful create/update response carrying the server's copy.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSaved {
    pub article: Article,
    pub message: String,
}

/// Successful delete response.
#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    pub message: String,
}

/// Error body shape used by the service for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Base URL resolution
// ============================================================================

/// Resolves the API base URL with precedence: env > config.
///
/// # Errors
/// Returns an error if the resolved URL is not well-formed.
pub fn resolve_base_url(config_base_url: &str) -> Result<String> {
    if let Ok(env_url) = std::env::var("SCRAWL_BASE_URL") {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    let trimmed = config_base_url.trim();
    validate_url(trimmed)?;
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid base URL: {url}"))?;
    Ok(())
}

// ============================================================================
// Client
// ============================================================================

/// Client for the article service.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the given base URL (no trailing slash).
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    /// Exchanges credentials for a session token.
    ///
    /// Credentials are expected to already pass the client-side gate; the
    /// server's verdict is authoritative either way.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginOutcome> {
        let url = format!("{}/login", self.base_url);
        debug!(target: "scrawl::api", "POST /login");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    /// Fetches all articles for the session.
    pub async fn list_articles(&self, token: &str) -> ApiResult<ArticleList> {
        let url = format!("{}/articles", self.base_url);
        debug!(target: "scrawl::api", "GET /articles");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    /// Creates a new article. The server assigns the `article_id`.
    pub async fn create_article(&self, token: &str, draft: &ArticleDraft) -> ApiResult<ArticleSaved> {
        draft.validate().map_err(ApiError::validation)?;

        let url = format!("{}/articles", self.base_url);
        debug!(target: "scrawl::api", "POST /articles");

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    /// Replaces the fields of an existing article.
    pub async fn update_article(
        &self,
        token: &str,
        article_id: i64,
        draft: &ArticleDraft,
    ) -> ApiResult<ArticleSaved> {
        draft.validate().map_err(ApiError::validation)?;

        let url = format!("{}/articles/{article_id}", self.base_url);
        debug!(target: "scrawl::api", article_id, "PUT /articles/{{id}}");

        let response = self
            .http
            .put(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }

    /// Deletes an article by id.
    pub async fn delete_article(&self, token: &str, article_id: i64) -> ApiResult<Deleted> {
        let url = format!("{}/articles/{article_id}", self.base_url);
        debug!(target: "scrawl::api", article_id, "DELETE /articles/{{id}}");

        let response = self
            .http
            .delete(&url)
            .header(reqwest::header::AUTHORIZATION, token)
            .send()
            .await
            .map_err(transport_error)?;

        parse_response(response).await
    }
}

fn transport_error(e: reqwest::Error) -> ApiError {
    warn!(target: "scrawl::api", error = %e, "request failed");
    ApiError::network(format!("Request failed: {e}"))
}

/// Converts a response into a parsed payload or a classified error.
///
/// State mutations upstream happen only after this returns Ok, so a body
/// that fails to parse leaves local state untouched.
async fn parse_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();

    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.message)
            .unwrap_or_else(|_| format!("Request failed with status {status}"));

        warn!(target: "scrawl::api", status = status.as_u16(), "server rejected request");
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::auth(message));
        }
        return Err(ApiError::server(message));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::server(format!("Malformed response body: {e}")))
}
