//! Block walker: flat token sequence to a [`ContentNode`] forest.
//!
//! One left-to-right pass over the tokens. Paired constructs locate their
//! matching close by depth counting over the token [`Family`], then the
//! enclosed slice is walked again by the same function, so nested lists,
//! quotes and containers become children rather than siblings.
//!
//! The walker never fails: a construct with no matching close extends to
//! the end of the slice, and tokens it has no rule for are skipped.

use crate::models::ContentNode;

use super::inline::render_inline;
use super::tokens::{Edge, Family, Token};

/// Walk a token slice into top-level nodes
pub fn walk(tokens: &[Token]) -> Vec<ContentNode> {
    let mut out = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let (close, inner) = span(tokens, i);

        match token {
            Token::HeadingOpen { level } => {
                let level = (*level).clamp(1, 6);
                out.push(ContentNode::with_content(
                    format!("h{level}"),
                    render_span(inner),
                ));
            }
            Token::ParagraphOpen => {
                out.push(ContentNode::with_content("p", render_span(inner)));
            }
            Token::CodeBlock { info, content } => {
                out.push(code_block(info.as_deref(), content));
            }
            Token::BulletListOpen => {
                out.push(ContentNode::new("ul").with_children(walk(inner)));
            }
            Token::OrderedListOpen { start } => {
                let mut list = ContentNode::new("ol").with_children(walk(inner));
                if *start != 1 {
                    list.attributes.insert("start".into(), start.to_string());
                }
                out.push(list);
            }
            Token::ListItemOpen => {
                out.push(ContentNode::new("li").with_children(walk(inner)));
            }
            Token::BlockquoteOpen => {
                out.push(ContentNode::new("blockquote").with_children(walk(inner)));
            }
            Token::TableOpen => out.push(table(inner)),
            Token::ThematicBreak => out.push(ContentNode::new("hr")),
            Token::FootnoteBlockOpen => {
                out.push(ContentNode::new("footnotes").with_children(walk(inner)));
            }
            Token::FootnoteOpen { label } => {
                out.push(
                    ContentNode::with_content("footnote", render_span(inner))
                        .with_attribute("label", label.as_str()),
                );
            }
            Token::DefinitionListOpen => {
                out.push(ContentNode::new("dl").with_children(walk(inner)));
            }
            Token::DefinitionTermOpen => {
                out.push(ContentNode::with_content("dt", render_span(inner)));
            }
            Token::DefinitionDetailsOpen => {
                out.push(ContentNode::new("dd").with_children(walk(inner)));
            }
            Token::ContainerOpen { name, info } => {
                let mut div = ContentNode::new("div")
                    .with_children(walk(inner))
                    .with_attribute("class", name.as_str());
                if let Some(info) = info {
                    div.attributes.insert("title".into(), info.clone());
                }
                out.push(div);
            }
            Token::Inline(run) => {
                let content = render_inline(run);
                if !content.is_empty() {
                    out.push(ContentNode::with_content("p", content));
                }
            }
            other => log::trace!("skipping {} token", other.kind()),
        }

        i = close + 1;
    }

    out
}

/// Index of the token closing the construct opened at `open`, and the
/// slice between them.
///
/// Self-contained tokens and stray closes span only themselves. An open
/// with no matching close spans to the end of `tokens`, in which case the
/// returned index is the last one.
fn span(tokens: &[Token], open: usize) -> (usize, &[Token]) {
    match tokens[open].pairing() {
        Some((family, Edge::Open)) => match find_close(tokens, open, family) {
            Some(close) => (close, &tokens[open + 1..close]),
            None => {
                log::debug!(
                    "unterminated {} at token {open}, extending to end of input",
                    tokens[open].kind()
                );
                (tokens.len() - 1, &tokens[open + 1..])
            }
        },
        _ => (open, &tokens[open..open]),
    }
}

/// Find the close matching the open at `open`, counting nested opens of
/// the same family
pub fn find_close(tokens: &[Token], open: usize, family: Family<'_>) -> Option<usize> {
    let mut depth = 0usize;
    for (j, token) in tokens.iter().enumerate().skip(open) {
        match token.pairing() {
            Some((f, Edge::Open)) if f == family => depth += 1,
            Some((f, Edge::Close)) if f == family => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(j);
                }
            }
            _ => {}
        }
    }
    None
}

/// Concatenated rendering of every inline run in the slice, at any depth.
///
/// Footnote definitions rely on this to collect all of their paragraphs.
fn render_span(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Inline(run) => Some(render_inline(run)),
            _ => None,
        })
        .collect()
}

/// `pre` wrapping a verbatim `code` leaf
fn code_block(info: Option<&str>, content: &str) -> ContentNode {
    let language = info
        .and_then(|info| info.split_whitespace().next())
        .map(str::to_string);
    let code = ContentNode::with_content("code", content).with_code(language);
    ContentNode::new("pre").with_children(vec![code])
}

/// Build a `table` node from the tokens between `TableOpen` and its close.
///
/// Rows inside a head group go to `thead` with `th` cells, every other row
/// to `tbody` with `td` cells. Empty groups are not attached.
fn table(tokens: &[Token]) -> ContentNode {
    let mut head = Vec::new();
    let mut body = Vec::new();
    let mut in_head = false;
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::TableHeadOpen => in_head = true,
            Token::TableHeadClose => in_head = false,
            Token::RowOpen => {
                let (close, cells) = span(tokens, i);
                let row = ContentNode::new("tr").with_children(row_cells(cells, in_head));
                if in_head {
                    head.push(row);
                } else {
                    body.push(row);
                }
                i = close;
            }
            _ => {}
        }
        i += 1;
    }

    let mut table = ContentNode::new("table");
    if !head.is_empty() {
        table.children.push(ContentNode::new("thead").with_children(head));
    }
    if !body.is_empty() {
        table.children.push(ContentNode::new("tbody").with_children(body));
    }
    table
}

fn row_cells(tokens: &[Token], in_head: bool) -> Vec<ContentNode> {
    let mut cells = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let tag = match &tokens[i] {
            Token::HeaderCellOpen => Some("th"),
            Token::DataCellOpen => Some(if in_head { "th" } else { "td" }),
            _ => None,
        };
        if let Some(tag) = tag {
            let (close, inner) = span(tokens, i);
            cells.push(ContentNode::with_content(tag, render_span(inner)));
            i = close;
        }
        i += 1;
    }

    cells
}
