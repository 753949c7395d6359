//! Article editor state.

use scrawl_core::article::{Article, ArticleDraft, TEXT_MAX_CHARS, TITLE_MAX_CHARS, Topic};

use crate::common::TextField;

/// Which editor input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Text,
    Topic,
}

/// Article editor state.
///
/// `editing` carries the id of the article being edited; `None` means the
/// form submits as a create. Loading a different article replaces the whole
/// form, so uncommitted edits to the previous one are discarded.
#[derive(Debug, Default)]
pub struct EditorFormState {
    pub title: TextField,
    pub text: TextField,
    pub topic: Option<Topic>,
    pub editing: Option<i64>,
    pub focus: EditorField,
}

impl EditorFormState {
    pub fn new() -> Self {
        Self {
            title: TextField::with_max(TITLE_MAX_CHARS),
            text: TextField::with_max(TEXT_MAX_CHARS),
            topic: None,
            editing: None,
            focus: EditorField::Title,
        }
    }

    /// Loads an article into the form for editing.
    pub fn load(&mut self, article: &Article) {
        self.reset();
        self.title.set_value(&article.title);
        self.text.set_value(&article.text);
        self.topic = Some(article.topic);
        self.editing = Some(article.article_id);
    }

    /// Clears the form back to create mode.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns true if the submit gate is open.
    pub fn can_submit(&self) -> bool {
        self.draft().is_some_and(|d| d.validate().is_ok())
    }

    /// Returns the form contents as a draft, if a topic is chosen.
    pub fn draft(&self) -> Option<ArticleDraft> {
        Some(ArticleDraft {
            title: self.title.value().to_string(),
            text: self.text.value().to_string(),
            topic: self.topic?,
        })
    }

    /// Advances focus: title, text, topic, back to title.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            EditorField::Title => EditorField::Text,
            EditorField::Text => EditorField::Topic,
            EditorField::Topic => EditorField::Title,
        };
    }

    /// Steps the topic selection forward or backward through the fixed set.
    pub fn cycle_topic(&mut self, forward: bool) {
        let all = Topic::all();
        let idx = self.topic.and_then(|t| all.iter().position(|&x| x == t));
        let next = match (idx, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % all.len(),
            (Some(i), false) => (i + all.len() - 1) % all.len(),
        };
        self.topic = Some(all[next]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            article_id: 7,
            title: "Hooks".to_string(),
            text: "useEffect pitfalls".to_string(),
            topic: Topic::React,
        }
    }

    #[test]
    fn test_load_switches_to_edit_mode() {
        let mut form = EditorFormState::new();
        form.load(&article());
        assert_eq!(form.editing, Some(7));
        assert_eq!(form.title.value(), "Hooks");
        assert_eq!(form.topic, Some(Topic::React));
        assert!(form.can_submit());
    }

    #[test]
    fn test_load_discards_previous_draft() {
        let mut form = EditorFormState::new();
        form.load(&article());
        form.title.set_value("changed but not saved");

        let other = Article {
            article_id: 8,
            title: "Streams".to_string(),
            text: "backpressure".to_string(),
            topic: Topic::Node,
        };
        form.load(&other);
        assert_eq!(form.editing, Some(8));
        assert_eq!(form.title.value(), "Streams");
    }

    #[test]
    fn test_submit_gate_requires_topic() {
        let mut form = EditorFormState::new();
        form.title.set_value("t");
        form.text.set_value("x");
        assert!(!form.can_submit());
        form.cycle_topic(true);
        assert!(form.can_submit());
    }

    #[test]
    fn test_submit_gate_rejects_blank_title() {
        let mut form = EditorFormState::new();
        form.title.set_value("   ");
        form.text.set_value("x");
        form.topic = Some(Topic::JavaScript);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_cycle_topic_walks_the_fixed_set() {
        let mut form = EditorFormState::new();
        form.cycle_topic(true);
        assert_eq!(form.topic, Some(Topic::JavaScript));
        form.cycle_topic(true);
        assert_eq!(form.topic, Some(Topic::React));
        form.cycle_topic(false);
        assert_eq!(form.topic, Some(Topic::JavaScript));
    }
}
