//! Article editor slice (create and edit).

mod render;
mod state;
mod update;

pub use render::render_editor;
pub use state::{EditorField, EditorFormState};
pub use update::{EditorAction, handle_key};
