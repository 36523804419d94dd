//! Custom fenced containers (`::: warning` ... `:::`).
//!
//! pulldown-cmark has no container extension. Fence lines are located on
//! the raw source and each one is swapped for a one-line HTML comment
//! marker, keeping any blockquote and list item prefix in front of it.
//! pulldown-cmark then parses every marker as an HTML block inside the
//! block it belongs to (top level, list item or quote), and the lexer turns
//! the markers back into container tokens.
//!
//! A fence opens with three or more colons followed by a name and optional
//! info text. A bare colon run at least as long as the innermost opener
//! closes it; shorter runs and closers with nothing open stay as text.
//! Fences inside fenced code are ignored, as are fences indented deep
//! enough to be indented code.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static OPENER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(:{3,})[ \t]*([A-Za-z][\w-]*)[ \t]*(.*?)\s*$").unwrap());

static CLOSER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(:{3,})\s*$").unwrap());

static LIST_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*+]|\d{1,9}[.)])(?:[ \t]+|$)").unwrap());

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--xml-prompt-container:(\d+)-->").unwrap());

/// Indentation beyond which a line is indented code
const MAX_INDENT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fence {
    Open { name: String, info: Option<String> },
    Close { name: String },
}

/// Source text with container fences replaced by markers
#[derive(Debug, Clone, Default)]
pub struct MarkedSource {
    pub text: String,
    /// Each fence with the line text its marker replaced
    fences: Vec<(Fence, String)>,
}

impl MarkedSource {
    pub fn fences(&self) -> impl Iterator<Item = &Fence> {
        self.fences.iter().map(|(fence, _)| fence)
    }

    /// The fence an HTML block stands for, when the block is exactly one
    /// marker
    pub fn fence(&self, html: &str) -> Option<&Fence> {
        let html = html.trim();
        let caps = MARKER_RE.captures(html)?;
        let whole = caps.get(0)?;
        if whole.start() != 0 || whole.end() != html.len() {
            return None;
        }
        let index: usize = caps[1].parse().ok()?;
        self.fences.get(index).map(|(fence, _)| fence)
    }

    /// Put the original fence lines back into text where pulldown-cmark
    /// did not see a marker block (code blocks, larger HTML blocks)
    pub fn restore<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.fences.is_empty() {
            return Cow::Borrowed(text);
        }
        MARKER_RE.replace_all(text, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| self.fences.get(index))
                .map_or_else(|| caps[0].to_string(), |(_, line)| line.clone())
        })
    }

    fn push_marker(&mut self, fence: Fence, line: &str) {
        let index = self.fences.len();
        self.fences.push((fence, line.to_string()));
        self.text.push_str(&format!("<!--xml-prompt-container:{index}-->"));
    }
}

#[derive(Debug, Clone, Copy)]
struct CodeFence {
    marker: char,
    len: usize,
}

impl CodeFence {
    fn open(text: &str) -> Option<Self> {
        let marker = text.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = text.chars().take_while(|c| *c == marker).count();
        (len >= 3).then_some(Self { marker, len })
    }

    fn closes(&self, text: &str) -> bool {
        let text = text.trim_start_matches(' ');
        let len = text.chars().take_while(|c| *c == self.marker).count();
        len >= self.len && text[len * self.marker.len_utf8()..].trim().is_empty()
    }
}

fn leading_spaces(text: &str) -> usize {
    text.len() - text.trim_start_matches(' ').len()
}

/// Byte length of the blockquote markers opening `line`
fn quote_prefix(line: &str) -> usize {
    let mut pos = 0;
    loop {
        let rest = &line[pos..];
        let spaces = leading_spaces(rest);
        if spaces > MAX_INDENT || !rest[spaces..].starts_with('>') {
            return pos;
        }
        pos += spaces + 1;
        if line[pos..].starts_with(' ') {
            pos += 1;
        }
    }
}

/// Line scanner state carried between lines
#[derive(Default)]
struct Scanner {
    open: Vec<(String, usize)>,
    code: Option<CodeFence>,
    /// Content column of the innermost list item seen, while the list lasts
    list_content: Option<usize>,
    previous_blank: bool,
}

impl Scanner {
    /// Classify one line (without its ending). Returns the byte offset where
    /// a fence starts together with the fence, or `None` for ordinary text.
    fn scan(&mut self, body: &str) -> Option<(usize, Fence)> {
        let quoted = quote_prefix(body);
        let after_quote = &body[quoted..];
        let blank = after_quote.trim().is_empty();

        if let Some(code) = self.code {
            if code.closes(after_quote) {
                self.code = None;
            }
            self.previous_blank = blank;
            return None;
        }

        let indent = leading_spaces(after_quote);
        let mut start = quoted;
        let mut allowed = self.list_content.unwrap_or(0) + MAX_INDENT;

        if let Some(marker) = LIST_MARKER_RE.find(&after_quote[indent..]) {
            self.list_content = Some(indent + marker.end());
            start = quoted + indent + marker.end();
            allowed = MAX_INDENT;
        } else if !blank && indent == 0 && self.previous_blank {
            self.list_content = None;
            allowed = MAX_INDENT;
        }
        self.previous_blank = blank;

        let text = &body[start..];
        let fence_indent = leading_spaces(text);
        if fence_indent > allowed {
            return None;
        }
        let start = start + fence_indent;
        let text = &body[start..];

        if let Some(code) = CodeFence::open(text) {
            self.code = Some(code);
            return None;
        }

        if let Some(caps) = CLOSER_RE.captures(text) {
            let len = caps[1].len();
            if self.open.last().is_some_and(|(_, opener)| len >= *opener) {
                return self
                    .open
                    .pop()
                    .map(|(name, _)| (start, Fence::Close { name }));
            }
            return None;
        }

        let caps = OPENER_RE.captures(text)?;
        let name = caps[2].to_string();
        let info = Some(caps[3].to_string()).filter(|s| !s.is_empty());
        self.open.push((name.clone(), caps[1].len()));
        Some((start, Fence::Open { name, info }))
    }
}

/// Replace every container fence in `source` with a marker line
pub fn mark_fences(source: &str) -> MarkedSource {
    let mut marked = MarkedSource {
        text: String::with_capacity(source.len()),
        fences: Vec::new(),
    };
    let mut scanner = Scanner {
        previous_blank: true,
        ..Scanner::default()
    };

    for line in source.split_inclusive('\n') {
        let body = line.trim_end_matches(['\n', '\r']);
        match scanner.scan(body) {
            Some((start, fence)) => {
                marked.text.push_str(&body[..start]);
                marked.push_marker(fence, &body[start..]);
                marked.text.push_str(&line[body.len()..]);
            }
            None => marked.text.push_str(line),
        }
    }

    if !scanner.open.is_empty() {
        log::debug!("{} container(s) left unterminated", scanner.open.len());
    }

    marked
}
