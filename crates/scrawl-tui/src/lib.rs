//! Full-screen TUI for the Scrawl article client.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use runtime::TuiRuntime;
use scrawl_core::api::{ApiClient, resolve_base_url};
use scrawl_core::config::Config;
use scrawl_core::session::SessionStore;

/// Runs the interactive article client.
///
/// Must be called from within a multi-threaded tokio runtime; API calls
/// are spawned onto it while the event loop blocks this task.
pub async fn run(config: &Config, store: SessionStore) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `scrawl articles list` and friends for non-interactive use."
        );
    }

    let base_url = resolve_base_url(&config.base_url)?;
    let client = ApiClient::new(base_url)?;

    let mut runtime = TuiRuntime::new(client, store)?;
    let result = runtime.run();
    drop(runtime);
    result
}
