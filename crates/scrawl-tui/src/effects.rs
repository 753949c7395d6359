//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only (network requests, token persistence); the
//! reducer itself never performs I/O.

use scrawl_core::article::ArticleDraft;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Exchange credentials for a session token.
    Login { username: String, password: String },

    /// Fetch the full article collection.
    FetchArticles,

    /// Create a new article from the draft.
    CreateArticle { draft: ArticleDraft },

    /// Replace an existing article's fields.
    UpdateArticle { article_id: i64, draft: ArticleDraft },

    /// Delete an article by id.
    DeleteArticle { article_id: i64 },

    /// Persist the session token to the credential store.
    PersistToken { token: String },

    /// Remove the persisted session token.
    ClearToken,
}
