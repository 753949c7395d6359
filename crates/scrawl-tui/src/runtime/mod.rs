//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async results arrive through an "inbox" channel:
//! - API tasks send `UiEvent`s to `inbox_tx` when they complete
//! - The runtime drains `inbox_rx` each frame
//!
//! This eliminates per-operation receivers and keeps event collection in
//! one place.

mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use scrawl_core::api::ApiClient;
use scrawl_core::session::SessionStore;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::{ApiEvent, UiEvent};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration while a request is in flight (spinner animation).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(80);

/// Poll duration when idle. Longer timeout reduces CPU usage when nothing
/// is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Inbox sender - API tasks send completion events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - drained each frame.
    inbox_rx: UiEventReceiver,
    client: Arc<ApiClient>,
    store: SessionStore,
    last_tick: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(client: ApiClient, store: SessionStore) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(store.load());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            client: Arc::new(client),
            store,
            last_tick: std::time::Instant::now(),
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        self.dispatch_event(UiEvent::Started);

        let mut dirty = true;
        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Only Tick triggers render; input events batch renders to
                // the next Tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the inbox and the terminal.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling only while a request is in flight, for the spinner.
        let tick_interval = if self.state.status.busy {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due, unless events are already
        // waiting to be processed.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::Login { username, password } => {
                let client = Arc::clone(&self.client);
                self.spawn_api(async move {
                    ApiEvent::LoggedIn(client.login(&username, &password).await)
                });
            }
            UiEffect::FetchArticles => {
                let client = Arc::clone(&self.client);
                let token = self.state.token.clone().unwrap_or_default();
                self.spawn_api(async move { ApiEvent::Listed(client.list_articles(&token).await) });
            }
            UiEffect::CreateArticle { draft } => {
                let client = Arc::clone(&self.client);
                let token = self.state.token.clone().unwrap_or_default();
                self.spawn_api(async move {
                    ApiEvent::Created(client.create_article(&token, &draft).await)
                });
            }
            UiEffect::UpdateArticle { article_id, draft } => {
                let client = Arc::clone(&self.client);
                let token = self.state.token.clone().unwrap_or_default();
                self.spawn_api(async move {
                    ApiEvent::Updated(client.update_article(&token, article_id, &draft).await)
                });
            }
            UiEffect::DeleteArticle { article_id } => {
                let client = Arc::clone(&self.client);
                let token = self.state.token.clone().unwrap_or_default();
                self.spawn_api(async move {
                    ApiEvent::Deleted {
                        article_id,
                        result: client.delete_article(&token, article_id).await,
                    }
                });
            }
            UiEffect::PersistToken { token } => {
                if let Err(e) = self.store.save(&token) {
                    tracing::warn!("failed to persist session: {e:#}");
                }
            }
            UiEffect::ClearToken => {
                if let Err(e) = self.store.clear() {
                    tracing::warn!("failed to clear session: {e:#}");
                }
            }
        }
    }

    /// Spawns an API call, sending its completion event to the inbox.
    fn spawn_api<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = ApiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(UiEvent::Api(fut.await));
        });
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
