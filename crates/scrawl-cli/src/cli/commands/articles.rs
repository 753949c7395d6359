//! Article command handlers.

use std::str::FromStr;

use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use scrawl_core::article::{Article, ArticleDraft, Topic};
use scrawl_core::config::Config;
use scrawl_core::session::SessionStore;

use super::{client, handle_api_error, require_token};

pub async fn list(config: &Config, store: &SessionStore) -> Result<()> {
    let token = require_token(store)?;
    let client = client(config)?;

    let list = client
        .list_articles(&token)
        .await
        .map_err(|e| handle_api_error(store, e))?;

    if list.articles.is_empty() {
        println!("No articles.");
    } else {
        println!("{}", render_table(&list.articles));
    }
    if !list.message.is_empty() {
        println!("{}", list.message);
    }
    Ok(())
}

pub async fn post(
    config: &Config,
    store: &SessionStore,
    title: String,
    text: String,
    topic: &str,
) -> Result<()> {
    let token = require_token(store)?;
    let client = client(config)?;
    let draft = draft(title, text, topic)?;

    let saved = client
        .create_article(&token, &draft)
        .await
        .map_err(|e| handle_api_error(store, e))?;

    println!("Posted article #{}", saved.article.article_id);
    if !saved.message.is_empty() {
        println!("{}", saved.message);
    }
    Ok(())
}

pub async fn edit(
    config: &Config,
    store: &SessionStore,
    id: i64,
    title: String,
    text: String,
    topic: &str,
) -> Result<()> {
    let token = require_token(store)?;
    let client = client(config)?;
    let draft = draft(title, text, topic)?;

    let saved = client
        .update_article(&token, id, &draft)
        .await
        .map_err(|e| handle_api_error(store, e))?;

    println!("Updated article #{}", saved.article.article_id);
    if !saved.message.is_empty() {
        println!("{}", saved.message);
    }
    Ok(())
}

pub async fn delete(config: &Config, store: &SessionStore, id: i64) -> Result<()> {
    let token = require_token(store)?;
    let client = client(config)?;

    let deleted = client
        .delete_article(&token, id)
        .await
        .map_err(|e| handle_api_error(store, e))?;

    println!("Deleted article #{id}");
    if !deleted.message.is_empty() {
        println!("{}", deleted.message);
    }
    Ok(())
}

fn draft(title: String, text: String, topic: &str) -> Result<ArticleDraft> {
    let topic = Topic::from_str(topic).map_err(|e| anyhow::anyhow!(e))?;
    let draft = ArticleDraft { title, text, topic };
    draft.validate().map_err(|e| anyhow::anyhow!(e))?;
    Ok(draft)
}

fn render_table(articles: &[Article]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(["ID", "Topic", "Title", "Text"]);
    for article in articles {
        table.add_row([
            article.article_id.to_string(),
            article.topic.label().to_string(),
            article.title.clone(),
            article.text.clone(),
        ]);
    }
    table
}
