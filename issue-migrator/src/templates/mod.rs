//! Template rendering using Handlebars.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, CommentRenderer};

/// Default layout of the consolidated comment.
pub const DEFAULT_COMMENT_TEMPLATE: &str = "### Comments from original issue:\n\n---\n\n\
{{#each comments}}**Comment from @{{author}}:**\n\n{{body}}\n\n---\n\n{{/each}}";
