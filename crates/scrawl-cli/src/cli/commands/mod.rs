//! CLI command handlers.

pub mod articles;
pub mod auth;
pub mod config;

use anyhow::Result;
use scrawl_core::api::{ApiClient, ApiError, resolve_base_url};
use scrawl_core::config::Config;
use scrawl_core::session::SessionStore;

/// Builds an API client from the resolved base URL.
pub fn client(config: &Config) -> Result<ApiClient> {
    let base_url = resolve_base_url(&config.base_url)?;
    Ok(ApiClient::new(base_url)?)
}

/// Returns the persisted token, or an error directing the user to sign in.
pub fn require_token(store: &SessionStore) -> Result<String> {
    store
        .load()
        .ok_or_else(|| anyhow::anyhow!("Not logged in. Run `scrawl login` first."))
}

/// Maps an API error to a CLI error, dropping the persisted session when
/// the server rejected it.
pub fn handle_api_error(store: &SessionStore, error: ApiError) -> anyhow::Error {
    if error.is_auth() {
        if let Err(e) = store.clear() {
            tracing::warn!("failed to clear session: {e:#}");
        }
        anyhow::anyhow!("Session expired: {}. Run `scrawl login` again.", error.message)
    } else {
        anyhow::anyhow!(error)
    }
}
