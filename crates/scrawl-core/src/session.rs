//! Session token storage and credential validation.
//!
//! The session token is persisted as `<base>/session.json` with restricted
//! permissions (0600). Tokens are never logged.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Minimum trimmed username length accepted by the login gate.
pub const USERNAME_MIN_CHARS: usize = 3;

/// Minimum trimmed password length accepted by the login gate.
pub const PASSWORD_MIN_CHARS: usize = 8;

/// Login credentials, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Returns true if the credentials pass the client-side gate:
    /// trimmed username >= 3 chars and trimmed password >= 8 chars.
    ///
    /// Submission is disabled while this returns false; credentials that
    /// fail the gate are never sent to the server.
    pub fn is_valid(&self) -> bool {
        self.username.trim().chars().count() >= USERNAME_MIN_CHARS
            && self.password.trim().chars().count() >= PASSWORD_MIN_CHARS
    }
}

/// On-disk session file shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    token: Option<String>,
}

/// Persistent store for the session token.
///
/// Constructed with an explicit base directory so callers (TUI runtime, CLI
/// commands, tests) inject it rather than reaching for hidden global state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Creates a store rooted at the default scrawl home.
    pub fn from_home() -> Self {
        Self {
            path: paths::session_path(),
        }
    }

    /// Creates a store backed by a specific file path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the persisted token, if any.
    ///
    /// A missing file means no session. A malformed file is treated the same
    /// way rather than failing startup.
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let file: SessionFile = serde_json::from_str(&contents).ok()?;
        file.token.filter(|t| !t.is_empty())
    }

    /// Persists the token with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(&SessionFile {
            token: Some(token.to_string()),
        })
        .context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted token. Idempotent: a missing file is fine.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be removed.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to remove session at {}", self.path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_credential_gate() {
        assert!(!creds("ab", "longenough1").is_valid());
        assert!(!creds("abc", "short").is_valid());
        assert!(creds("abc", "longenough1").is_valid());
        // Whitespace padding does not help.
        assert!(!creds("  ab  ", "longenough1").is_valid());
        assert!(!creds("abc", "  pass  ").is_valid());
    }

    #[test]
    fn test_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load(), None);
        store.save("tok-123").unwrap();
        assert_eq!(store.load(), Some("tok-123".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        // clear is idempotent
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_store_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(path.clone());
        store.save("tok").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_malformed_file_means_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = SessionStore::new(path);
        assert_eq!(store.load(), None);
    }
}
