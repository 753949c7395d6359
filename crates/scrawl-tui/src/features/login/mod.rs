//! Login form slice.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginFormState};
pub use update::{LoginAction, handle_key};
