//! Article list state and mutations.

use scrawl_core::article::Article;

/// Mutations applied to the article collection.
///
/// Server responses are folded into the list through these, so every way
/// the collection can change is enumerated in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticlesMutation {
    /// Replace the whole collection with the server's list.
    ReplaceAll(Vec<Article>),
    /// Append a newly created article.
    Append(Article),
    /// Replace the article with the same id, keeping its position.
    ReplaceById(Article),
    /// Remove the article with this id, keeping the order of the rest.
    RemoveById(i64),
}

/// Article list state.
#[derive(Debug, Default)]
pub struct ArticlesState {
    pub articles: Vec<Article>,
    pub selected: usize,
}

impl ArticlesState {
    pub fn apply(&mut self, mutation: ArticlesMutation) {
        match mutation {
            ArticlesMutation::ReplaceAll(articles) => {
                self.articles = articles;
            }
            ArticlesMutation::Append(article) => {
                self.articles.push(article);
            }
            ArticlesMutation::ReplaceById(article) => {
                if let Some(slot) = self
                    .articles
                    .iter_mut()
                    .find(|a| a.article_id == article.article_id)
                {
                    *slot = article;
                }
            }
            ArticlesMutation::RemoveById(article_id) => {
                self.articles.retain(|a| a.article_id != article_id);
            }
        }
        self.clamp_selection();
    }

    /// Returns the currently selected article.
    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected)
    }

    /// Returns true if an article with this id is present.
    pub fn contains(&self, article_id: i64) -> bool {
        self.articles.iter().any(|a| a.article_id == article_id)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.articles.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        if self.articles.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.articles.len() {
            self.selected = self.articles.len() - 1;
        }
    }
}
