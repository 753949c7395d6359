//! Shared UI building blocks.

mod field;

pub use field::TextField;
