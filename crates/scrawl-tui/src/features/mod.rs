//! Feature slices for the TUI (state/update/render per slice).

pub mod articles;
pub mod editor;
pub mod login;
