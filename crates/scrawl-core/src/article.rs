//! Article data model and client-side validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum title length in characters.
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum text length in characters.
pub const TEXT_MAX_CHARS: usize = 200;

/// Closed set of article topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

impl Topic {
    /// Returns all topics for iteration (e.g., in the topic selector).
    pub fn all() -> &'static [Topic] {
        &[Topic::JavaScript, Topic::React, Topic::Node]
    }

    /// Returns the wire/display label for this topic.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "JavaScript" => Ok(Topic::JavaScript),
            "React" => Ok(Topic::React),
            "Node" => Ok(Topic::Node),
            other => Err(format!(
                "Unknown topic \"{other}\" (expected JavaScript, React or Node)"
            )),
        }
    }
}

/// A server-owned article record.
///
/// `article_id` is assigned by the server and immutable; it is unique within
/// the collection and never reused within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

/// Uncommitted article fields, as edited in a form.
///
/// Drafts carry no `article_id`: the server assigns one on create, and the
/// target id for an update travels separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDraft {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl ArticleDraft {
    /// Validates the draft against the article field constraints.
    ///
    /// Runs again in the API client before anything is sent, so an invalid
    /// draft never reaches the wire.
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title must not be empty".to_string());
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(format!("Title must be at most {TITLE_MAX_CHARS} characters"));
        }

        let text = self.text.trim();
        if text.is_empty() {
            return Err("Text must not be empty".to_string());
        }
        if text.chars().count() > TEXT_MAX_CHARS {
            return Err(format!("Text must be at most {TEXT_MAX_CHARS} characters"));
        }

        Ok(())
    }
}
