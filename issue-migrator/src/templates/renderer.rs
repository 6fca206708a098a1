//! Consolidated comment renderer.

use super::{TemplateError, DEFAULT_COMMENT_TEMPLATE};
use crate::snapshot::Comment;
use handlebars::{no_escape, Handlebars};
use serde_json::json;
use std::path::Path;

const COMMENT_TEMPLATE_NAME: &str = "comment";

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs
}

/// Renders the single comment that carries every original comment.
pub struct CommentRenderer {
    handlebars: Handlebars<'static>,
}

impl CommentRenderer {
    /// Creates a renderer using [`DEFAULT_COMMENT_TEMPLATE`].
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to register.
    pub fn new() -> Result<Self, TemplateError> {
        Self::from_template(DEFAULT_COMMENT_TEMPLATE)
    }

    /// Creates a renderer from template text.
    ///
    /// The template receives `comments` (each with `author` and `body`) and
    /// `comment_count`.
    ///
    /// # Errors
    ///
    /// Returns an error if the template doesn't parse.
    pub fn from_template(template: &str) -> Result<Self, TemplateError> {
        let mut handlebars = create_handlebars_registry();
        handlebars.register_template_string(COMMENT_TEMPLATE_NAME, template)?;
        Ok(Self { handlebars })
    }

    /// Creates a renderer from a template file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or doesn't parse.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let template = std::fs::read_to_string(path).map_err(|e| TemplateError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_template(&template)
    }

    /// Renders the consolidated comment body, preserving comment order.
    ///
    /// Returns `None` when there are no comments to carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, comments: &[Comment]) -> Result<Option<String>, TemplateError> {
        if comments.is_empty() {
            return Ok(None);
        }

        let entries: Vec<_> = comments
            .iter()
            .map(|comment| {
                json!({
                    "author": comment.author.login,
                    "body": comment.body,
                })
            })
            .collect();
        let data = json!({
            "comments": entries,
            "comment_count": comments.len(),
        });

        Ok(Some(self.handlebars.render(COMMENT_TEMPLATE_NAME, &data)?))
    }
}
