//! Article list slice.

mod render;
mod state;
mod update;

pub use render::render_articles;
pub use state::{ArticlesMutation, ArticlesState};
pub use update::{ArticlesAction, handle_key};
