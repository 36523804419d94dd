//! Markdown to content tree conversion.
//!
//! ## Pipeline
//!
//! 1. **Containers** (`containers`): `::: name` fences are located on the
//!    raw source and replaced by marker lines
//! 2. **Lexing** (`lexer`): the marked source runs through pulldown-cmark
//!    once and its events are normalised into the flat [`Token`] sequence
//! 3. **Walking** (`walker`): the tokens are folded into a [`ContentNode`]
//!    forest, recursing into every nested block region
//!
//! Inline runs are rendered to markup strings by `inline` during the walk.
//! Every stage is a pure function of its input; parsing the same text twice
//! gives structurally identical forests with disjoint ids.

pub mod containers;
pub mod emoji;
pub mod inline;
pub mod lexer;
pub mod tokens;
pub mod walker;

use crate::models::ContentNode;

pub use inline::{render_inline, render_inline_range};
pub use lexer::{ParseOptions, tokenize};
pub use tokens::{InlineToken, Token};
pub use walker::walk;

/// Parse Markdown into a forest with every extension enabled
pub fn parse_markdown(text: &str) -> Vec<ContentNode> {
    parse_markdown_with(text, &ParseOptions::default())
}

/// Parse Markdown into a forest; blank input yields an empty forest
pub fn parse_markdown_with(text: &str, options: &ParseOptions) -> Vec<ContentNode> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let tokens = tokenize(text, options);
    log::debug!("walking {} tokens", tokens.len());
    walk(&tokens)
}
