//! Session command handlers.

use anyhow::Result;
use scrawl_core::config::Config;
use scrawl_core::session::{Credentials, PASSWORD_MIN_CHARS, SessionStore, USERNAME_MIN_CHARS};

use super::client;

pub async fn login(
    config: &Config,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<()> {
    let credentials = Credentials {
        username: username.to_string(),
        password: password.to_string(),
    };
    if !credentials.is_valid() {
        anyhow::bail!(
            "Invalid credentials: username needs {USERNAME_MIN_CHARS}+ characters \
             and password {PASSWORD_MIN_CHARS}+ characters"
        );
    }

    let client = client(config)?;
    let outcome = client
        .login(&credentials.username, &credentials.password)
        .await
        .map_err(|e| anyhow::anyhow!("An error occurred during login: {}", e.message))?;

    store.save(&outcome.token)?;
    println!("{}", outcome.message);
    Ok(())
}

pub fn logout(store: &SessionStore) -> Result<()> {
    store.clear()?;
    println!("Goodbye!");
    Ok(())
}
