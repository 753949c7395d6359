//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use scrawl_core::session::SessionStore;
use scrawl_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "scrawl")]
#[command(version)]
#[command(about = "Terminal client for the article service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in and persist the session token
    Login {
        /// Username (3+ characters)
        #[arg(short, long)]
        username: String,

        /// Password (8+ characters)
        #[arg(short, long)]
        password: String,
    },

    /// Drop the persisted session token
    Logout,

    /// Manage articles
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ArticleCommands {
    /// Lists all articles
    List,
    /// Posts a new article
    Post {
        /// Title (1-50 characters)
        #[arg(long)]
        title: String,
        /// Body text (1-200 characters)
        #[arg(long)]
        text: String,
        /// Topic: JavaScript, React, or Node
        #[arg(long)]
        topic: String,
    },
    /// Replaces an existing article
    Edit {
        /// The ID of the article to edit
        #[arg(value_name = "ARTICLE_ID")]
        id: i64,
        /// Title (1-50 characters)
        #[arg(long)]
        title: String,
        /// Body text (1-200 characters)
        #[arg(long)]
        text: String,
        /// Topic: JavaScript, React, or Node
        #[arg(long)]
        topic: String,
    },
    /// Deletes an article
    Delete {
        /// The ID of the article to delete
        #[arg(value_name = "ARTICLE_ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive for the process lifetime so logs flush on exit
    let _log_guard = logging::init().context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    let store = SessionStore::from_home();

    // default to the interactive client
    let Some(command) = cli.command else {
        return scrawl_tui::run(&config, store).await;
    };

    match command {
        Commands::Login { username, password } => {
            commands::auth::login(&config, &store, &username, &password).await
        }
        Commands::Logout => commands::auth::logout(&store),

        Commands::Articles { command } => match command {
            ArticleCommands::List => commands::articles::list(&config, &store).await,
            ArticleCommands::Post { title, text, topic } => {
                commands::articles::post(&config, &store, title, text, &topic).await
            }
            ArticleCommands::Edit {
                id,
                title,
                text,
                topic,
            } => commands::articles::edit(&config, &store, id, title, text, &topic).await,
            ArticleCommands::Delete { id } => commands::articles::delete(&config, &store, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
