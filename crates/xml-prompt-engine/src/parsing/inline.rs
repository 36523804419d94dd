//! Inline token rendering.
//!
//! Turns a run of [`InlineToken`]s into a flat, HTML-like markup string
//! (`<strong>`, `<em>`, `<del>`, `<sup>`, `<sub>`, `<code>`, `<a>`,
//! `<img />`). Text is always escaped; nothing is added between tokens.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::tokens::InlineToken;

/// Render every token of the run
pub fn render_inline(tokens: &[InlineToken]) -> String {
    render_inline_range(tokens, 0, None)
}

/// Render `tokens[start..end]`; `end` defaults to the run's length and both
/// bounds are clamped to it
pub fn render_inline_range(tokens: &[InlineToken], start: usize, end: Option<usize>) -> String {
    let end = end.unwrap_or(tokens.len()).min(tokens.len());
    let start = start.min(end);

    let mut out = String::new();
    for token in &tokens[start..end] {
        render_token(token, &mut out);
    }
    out
}

fn render_token(token: &InlineToken, out: &mut String) {
    match token {
        InlineToken::Text(text) => out.push_str(&encode_text(text)),
        InlineToken::SoftBreak | InlineToken::HardBreak => out.push('\n'),
        InlineToken::Code(code) => {
            out.push_str("<code>");
            out.push_str(&encode_text(code));
            out.push_str("</code>");
        }
        InlineToken::EmphasisOpen => out.push_str("<em>"),
        InlineToken::EmphasisClose => out.push_str("</em>"),
        InlineToken::StrongOpen => out.push_str("<strong>"),
        InlineToken::StrongClose => out.push_str("</strong>"),
        InlineToken::StrikethroughOpen => out.push_str("<del>"),
        InlineToken::StrikethroughClose => out.push_str("</del>"),
        InlineToken::SuperscriptOpen => out.push_str("<sup>"),
        InlineToken::SuperscriptClose => out.push_str("</sup>"),
        InlineToken::SubscriptOpen => out.push_str("<sub>"),
        InlineToken::SubscriptClose => out.push_str("</sub>"),
        InlineToken::LinkOpen { href, title } => {
            out.push_str("<a");
            push_attribute(out, "href", href);
            if let Some(title) = title {
                push_attribute(out, "title", title);
            }
            out.push('>');
        }
        InlineToken::LinkClose => out.push_str("</a>"),
        InlineToken::Image { src, alt, title } => {
            out.push_str("<img");
            push_attribute(out, "src", src);
            push_attribute(out, "alt", alt);
            if let Some(title) = title {
                push_attribute(out, "title", title);
            }
            out.push_str(" />");
        }
        InlineToken::Html(raw) => out.push_str(&encode_text(raw)),
        InlineToken::Emoji(symbol) => out.push_str(&encode_text(symbol)),
        InlineToken::Other { content } => out.push_str(&encode_text(content)),
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&encode_double_quoted_attribute(value));
    out.push('"');
}
