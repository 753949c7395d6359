//! Core scrawl library (config, session persistence, article types, API client).

pub mod api;
pub mod article;
pub mod config;
pub mod logging;
pub mod session;
