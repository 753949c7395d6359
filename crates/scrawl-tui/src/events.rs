//! UI event types.
//!
//! Events are the reducer's only input. Terminal input and timer ticks come
//! from the runtime's event loop; API results arrive through the inbox
//! channel as [`ApiEvent`]s.

use scrawl_core::api::{ApiError, ArticleList, ArticleSaved, Deleted, LoginOutcome};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Sent once before the first frame (kicks off the initial fetch when a
    /// persisted session exists).
    Started,
    /// Periodic timer tick (spinner animation).
    Tick,
    /// Raw terminal event.
    Terminal(crossterm::event::Event),
    /// Completion of an API request.
    Api(ApiEvent),
}

/// API request completions.
///
/// Every variant clears `busy` on arrival, success or failure.
#[derive(Debug)]
pub enum ApiEvent {
    LoggedIn(Result<LoginOutcome, ApiError>),
    Listed(Result<ArticleList, ApiError>),
    Created(Result<ArticleSaved, ApiError>),
    Updated(Result<ArticleSaved, ApiError>),
    Deleted {
        article_id: i64,
        result: Result<Deleted, ApiError>,
    },
}
