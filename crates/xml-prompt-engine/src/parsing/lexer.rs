//! pulldown-cmark event stream to flat [`Token`] sequence.
//!
//! # Event shapes normalised here
//!
//! pulldown-cmark nests events the same way the document nests, which maps
//! directly onto open/close tokens. A few shapes differ from the token
//! convention and are adjusted:
//!
//! - Table head cells arrive without a row:
//!   `Start(TableHead) Start(TableCell) .. End(TableHead)`. The head is
//!   wrapped in `RowOpen`/`RowClose` and body rows get a
//!   `TableBodyOpen`/`TableBodyClose` pair.
//! - Code block bodies arrive as several `Text` events; they are joined
//!   into one [`Token::CodeBlock`] and the final newline is dropped.
//! - Image alt text arrives as nested events between `Start(Image)` and
//!   `End(Image)`; it is flattened into [`InlineToken::Image`].
//! - HTML blocks become paragraphs holding [`InlineToken::Html`], so raw
//!   markup is kept as escaped text. An HTML block that is exactly one
//!   container marker (see [`super::containers`]) becomes a container token
//!   instead, which puts containers inside the list item or quote that
//!   holds them.
//! - Footnote definitions are lifted out of the stream and emitted once,
//!   at the end, inside a footnote block.
//!
//! Consecutive inline events are buffered and flushed as a single
//! [`Token::Inline`] whenever a block token is emitted. Adjacent `Text`
//! events are joined first so emoji and bare URLs split across events are
//! still found.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

use super::containers::{Fence, MarkedSource, mark_fences};
use super::emoji;
use super::tokens::{InlineToken, Token};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:https?://|www\.)[^\s<>]+").unwrap());

/// Markdown extensions enabled while tokenising
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub task_lists: bool,
    pub smart_punctuation: bool,
    /// `::: name` fenced containers
    pub containers: bool,
    /// `:shortcode:` emoji substitution
    pub emoji: bool,
    /// `term` / `: definition` lists
    pub definition_lists: bool,
    /// `^sup^`
    pub superscript: bool,
    /// `~sub~`; strikethrough then needs `~~`
    pub subscript: bool,
    /// Bare `http(s)://` and `www.` URLs become links
    pub linkify: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            smart_punctuation: true,
            containers: true,
            emoji: true,
            definition_lists: true,
            superscript: true,
            subscript: true,
            linkify: true,
        }
    }
}

impl ParseOptions {
    fn cmark_options(&self) -> Options {
        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, self.tables);
        options.set(Options::ENABLE_FOOTNOTES, self.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, self.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, self.task_lists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, self.smart_punctuation);
        options.set(Options::ENABLE_DEFINITION_LIST, self.definition_lists);
        options.set(Options::ENABLE_SUPERSCRIPT, self.superscript);
        options.set(Options::ENABLE_SUBSCRIPT, self.subscript);
        options
    }
}

/// Tokenise `source` into the flat block token sequence
pub fn tokenize(source: &str, options: &ParseOptions) -> Vec<Token> {
    let marked = options.containers.then(|| mark_fences(source));
    let mut lexer = Lexer::new(options, marked.as_ref());
    lexer.feed(marked.as_ref().map_or(source, |m| m.text.as_str()));
    lexer.finish()
}

struct PendingImage {
    src: String,
    title: Option<String>,
    alt: String,
    depth: usize,
}

struct Lexer<'o> {
    options: &'o ParseOptions,
    fences: Option<&'o MarkedSource>,
    tokens: Vec<Token>,
    /// Lifted footnote definitions, appended by `finish`
    footnotes: Vec<Token>,
    inline: Vec<InlineToken>,
    /// Adjacent text events, joined before emoji and URL handling
    text: String,
    /// Open links; bare URLs inside them are left alone
    link_depth: usize,
    in_footnote: bool,
    in_table_head: bool,
    table_body_open: bool,
    code: Option<(Option<String>, String)>,
    image: Option<PendingImage>,
    html: Option<String>,
}

impl<'o> Lexer<'o> {
    fn new(options: &'o ParseOptions, fences: Option<&'o MarkedSource>) -> Self {
        Self {
            options,
            fences,
            tokens: Vec::new(),
            footnotes: Vec::new(),
            inline: Vec::new(),
            text: String::new(),
            link_depth: 0,
            in_footnote: false,
            in_table_head: false,
            table_body_open: false,
            code: None,
            image: None,
            html: None,
        }
    }

    fn feed(&mut self, text: &str) {
        for event in Parser::new_ext(text, self.options.cmark_options()) {
            self.event(event);
        }
        self.flush_inline();
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_inline();
        if !self.footnotes.is_empty() {
            self.tokens.push(Token::FootnoteBlockOpen);
            self.tokens.append(&mut self.footnotes);
            self.tokens.push(Token::FootnoteBlockClose);
        }
        self.tokens
    }

    fn push_block(&mut self, token: Token) {
        self.flush_inline();
        self.target().push(token);
    }

    fn push_inline(&mut self, token: InlineToken) {
        self.inline.push(token);
    }

    fn flush_inline(&mut self) {
        self.flush_text();
        if self.inline.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.inline);
        self.target().push(Token::Inline(run));
    }

    fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        if !self.options.linkify || self.link_depth > 0 {
            self.push_text(&text);
            return;
        }

        let mut last = 0;
        for found in URL_RE.find_iter(&text) {
            let url = trim_url(found.as_str());
            if url.ends_with("://") || url == "www." {
                continue;
            }
            self.push_text(&text[last..found.start()]);
            let href = if url.starts_with("www.") {
                format!("http://{url}")
            } else {
                url.to_string()
            };
            self.push_inline(InlineToken::LinkOpen { href, title: None });
            self.push_inline(InlineToken::Text(url.to_string()));
            self.push_inline(InlineToken::LinkClose);
            last = found.start() + url.len();
        }
        self.push_text(&text[last..]);
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.options.emoji {
            emoji::substitute(text, &mut self.inline);
        } else {
            self.push_inline(InlineToken::Text(text.to_string()));
        }
    }

    /// Original fence lines put back into text that still holds markers
    fn restore(&self, text: &str) -> String {
        match self.fences {
            Some(marked) => marked.restore(text).into_owned(),
            None => text.to_string(),
        }
    }

    fn target(&mut self) -> &mut Vec<Token> {
        if self.in_footnote {
            &mut self.footnotes
        } else {
            &mut self.tokens
        }
    }

    fn event(&mut self, event: Event<'_>) {
        if let Some((_, body)) = self.code.as_mut() {
            match event {
                Event::Text(text) => body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => self.finish_code_block(),
                _ => {}
            }
            return;
        }

        if let Some(image) = self.image.as_mut() {
            match event {
                Event::Text(text) | Event::Code(text) => image.alt.push_str(&text),
                Event::SoftBreak | Event::HardBreak => image.alt.push(' '),
                Event::Start(Tag::Image { .. }) => image.depth += 1,
                Event::End(TagEnd::Image) => {
                    image.depth -= 1;
                    if image.depth == 0 {
                        self.finish_image();
                    }
                }
                _ => {}
            }
            return;
        }

        if let Some(html) = self.html.as_mut() {
            match event {
                Event::Html(text) | Event::Text(text) => html.push_str(&text),
                Event::End(TagEnd::HtmlBlock) => self.finish_html_block(),
                _ => {}
            }
            return;
        }

        if let Event::Text(text) = event {
            self.text.push_str(&text);
            return;
        }
        self.flush_text();

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(_) => {}
            Event::Code(code) => {
                let code = self.restore(&code);
                self.push_inline(InlineToken::Code(code));
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let html = self.restore(&html);
                self.push_inline(InlineToken::Html(html));
            }
            Event::SoftBreak => self.push_inline(InlineToken::SoftBreak),
            Event::HardBreak => self.push_inline(InlineToken::HardBreak),
            Event::Rule => self.push_block(Token::ThematicBreak),
            Event::FootnoteReference(label) => self.push_inline(InlineToken::Other {
                content: format!("[^{label}]"),
            }),
            Event::TaskListMarker(checked) => self.push_inline(InlineToken::Other {
                content: if checked { "[x] " } else { "[ ] " }.to_string(),
            }),
            Event::InlineMath(math) | Event::DisplayMath(math) => {
                self.push_inline(InlineToken::Other {
                    content: math.to_string(),
                })
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => self.push_block(Token::ParagraphOpen),
            Tag::Heading { level, .. } => self.push_block(Token::HeadingOpen { level: level as u8 }),
            Tag::BlockQuote(_) => self.push_block(Token::BlockquoteOpen),
            Tag::CodeBlock(kind) => {
                self.flush_inline();
                let info = match kind {
                    CodeBlockKind::Fenced(info) if !info.trim().is_empty() => Some(info.to_string()),
                    _ => None,
                };
                self.code = Some((info, String::new()));
            }
            Tag::HtmlBlock => {
                self.flush_inline();
                self.html = Some(String::new());
            }
            Tag::List(Some(start)) => self.push_block(Token::OrderedListOpen { start }),
            Tag::List(None) => self.push_block(Token::BulletListOpen),
            Tag::Item => self.push_block(Token::ListItemOpen),
            Tag::FootnoteDefinition(label) => {
                self.flush_inline();
                self.in_footnote = true;
                self.footnotes.push(Token::FootnoteOpen {
                    label: label.to_string(),
                });
            }
            Tag::Table(_) => {
                self.table_body_open = false;
                self.push_block(Token::TableOpen);
            }
            Tag::TableHead => {
                self.in_table_head = true;
                self.push_block(Token::TableHeadOpen);
                self.push_block(Token::RowOpen);
            }
            Tag::TableRow => {
                if !self.table_body_open {
                    self.table_body_open = true;
                    self.push_block(Token::TableBodyOpen);
                }
                self.push_block(Token::RowOpen);
            }
            Tag::TableCell => {
                let open = if self.in_table_head {
                    Token::HeaderCellOpen
                } else {
                    Token::DataCellOpen
                };
                self.push_block(open);
            }
            Tag::DefinitionList => self.push_block(Token::DefinitionListOpen),
            Tag::DefinitionListTitle => self.push_block(Token::DefinitionTermOpen),
            Tag::DefinitionListDefinition => self.push_block(Token::DefinitionDetailsOpen),
            Tag::Emphasis => self.push_inline(InlineToken::EmphasisOpen),
            Tag::Strong => self.push_inline(InlineToken::StrongOpen),
            Tag::Strikethrough => self.push_inline(InlineToken::StrikethroughOpen),
            Tag::Superscript => self.push_inline(InlineToken::SuperscriptOpen),
            Tag::Subscript => self.push_inline(InlineToken::SubscriptOpen),
            Tag::Link {
                dest_url, title, ..
            } => {
                self.link_depth += 1;
                self.push_inline(InlineToken::LinkOpen {
                    href: dest_url.to_string(),
                    title: non_empty(&title),
                });
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = Some(PendingImage {
                    src: dest_url.to_string(),
                    title: non_empty(&title),
                    alt: String::new(),
                    depth: 1,
                });
            }
            other => self.push_block(Token::Unknown(format!("{other:?}"))),
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.push_block(Token::ParagraphClose),
            TagEnd::Heading(_) => self.push_block(Token::HeadingClose),
            TagEnd::BlockQuote(_) => self.push_block(Token::BlockquoteClose),
            TagEnd::List(true) => self.push_block(Token::OrderedListClose),
            TagEnd::List(false) => self.push_block(Token::BulletListClose),
            TagEnd::Item => self.push_block(Token::ListItemClose),
            TagEnd::FootnoteDefinition => {
                self.push_block(Token::FootnoteClose);
                self.in_footnote = false;
            }
            TagEnd::Table => {
                if self.table_body_open {
                    self.push_block(Token::TableBodyClose);
                    self.table_body_open = false;
                }
                self.push_block(Token::TableClose);
            }
            TagEnd::TableHead => {
                self.push_block(Token::RowClose);
                self.push_block(Token::TableHeadClose);
                self.in_table_head = false;
            }
            TagEnd::TableRow => self.push_block(Token::RowClose),
            TagEnd::TableCell => {
                let close = if self.in_table_head {
                    Token::HeaderCellClose
                } else {
                    Token::DataCellClose
                };
                self.push_block(close);
            }
            TagEnd::DefinitionList => self.push_block(Token::DefinitionListClose),
            TagEnd::DefinitionListTitle => self.push_block(Token::DefinitionTermClose),
            TagEnd::DefinitionListDefinition => self.push_block(Token::DefinitionDetailsClose),
            TagEnd::Emphasis => self.push_inline(InlineToken::EmphasisClose),
            TagEnd::Strong => self.push_inline(InlineToken::StrongClose),
            TagEnd::Strikethrough => self.push_inline(InlineToken::StrikethroughClose),
            TagEnd::Superscript => self.push_inline(InlineToken::SuperscriptClose),
            TagEnd::Subscript => self.push_inline(InlineToken::SubscriptClose),
            TagEnd::Link => {
                self.link_depth = self.link_depth.saturating_sub(1);
                self.push_inline(InlineToken::LinkClose);
            }
            // Consumed by the pending state in `event`
            TagEnd::CodeBlock | TagEnd::Image | TagEnd::HtmlBlock => {}
            other => self.push_block(Token::Unknown(format!("{other:?}"))),
        }
    }

    fn finish_code_block(&mut self) {
        if let Some((info, content)) = self.code.take() {
            let mut content = self.restore(&content);
            if content.ends_with('\n') {
                content.pop();
            }
            self.push_block(Token::CodeBlock { info, content });
        }
    }

    fn finish_html_block(&mut self) {
        let Some(html) = self.html.take() else {
            return;
        };

        if let Some(fence) = self.fences.and_then(|marked| marked.fence(&html)) {
            let token = match fence {
                Fence::Open { name, info } => Token::ContainerOpen {
                    name: name.clone(),
                    info: info.clone(),
                },
                Fence::Close { name } => Token::ContainerClose { name: name.clone() },
            };
            self.push_block(token);
            return;
        }

        let html = self.restore(&html);
        self.push_block(Token::ParagraphOpen);
        let html = html.trim_end_matches('\n');
        if !html.is_empty() {
            self.push_inline(InlineToken::Html(html.to_string()));
        }
        self.push_block(Token::ParagraphClose);
    }

    fn finish_image(&mut self) {
        if let Some(image) = self.image.take() {
            self.push_inline(InlineToken::Image {
                src: image.src,
                alt: image.alt,
                title: image.title,
            });
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Drop sentence punctuation after a bare URL. A closing paren stays when
/// it balances one inside the URL.
fn trim_url(url: &str) -> &str {
    let mut url = url;
    while let Some(last) = url.chars().last() {
        let unbalanced = last == ')' && url.matches('(').count() < url.matches(')').count();
        if matches!(last, '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"') || unbalanced {
            url = &url[..url.len() - last.len_utf8()];
        } else {
            break;
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lex(source: &str) -> Vec<Token> {
        tokenize(source, &ParseOptions::default())
    }

    fn text(s: &str) -> InlineToken {
        InlineToken::Text(s.to_string())
    }

    #[test]
    fn test_heading_and_paragraph_follow_pairing_convention() {
        assert_eq!(
            lex("# Title\n\nBody text"),
            vec![
                Token::HeadingOpen { level: 1 },
                Token::Inline(vec![text("Title")]),
                Token::HeadingClose,
                Token::ParagraphOpen,
                Token::Inline(vec![text("Body text")]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn test_fenced_code_drops_final_newline() {
        assert_eq!(
            lex("```python extra\nprint(1)\n```\n"),
            vec![Token::CodeBlock {
                info: Some("python extra".into()),
                content: "print(1)".into(),
            }]
        );
    }

    #[test]
    fn test_indented_code_has_no_info() {
        assert_eq!(
            lex("    let x = 1;\n"),
            vec![Token::CodeBlock {
                info: None,
                content: "let x = 1;".into(),
            }]
        );
    }

    #[test]
    fn test_ordered_list_carries_start() {
        let tokens = lex("3. three\n4. four\n");
        assert_eq!(tokens.first(), Some(&Token::OrderedListOpen { start: 3 }));
        assert_eq!(tokens.last(), Some(&Token::OrderedListClose));
    }

    #[test]
    fn test_table_head_is_wrapped_in_row() {
        let tokens = lex("| a | b |\n|---|---|\n| 1 | 2 |\n");
        let kinds: Vec<&str> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "table_open",
                "thead_open",
                "tr_open",
                "th_open",
                "inline",
                "th_close",
                "th_open",
                "inline",
                "th_close",
                "tr_close",
                "thead_close",
                "tbody_open",
                "tr_open",
                "td_open",
                "inline",
                "td_close",
                "td_open",
                "inline",
                "td_close",
                "tr_close",
                "tbody_close",
                "table_close",
            ]
        );
    }

    #[test]
    fn test_image_alt_is_flattened() {
        assert_eq!(
            lex("![a *pretty* cat](cat.png \"Cat\")"),
            vec![
                Token::ParagraphOpen,
                Token::Inline(vec![InlineToken::Image {
                    src: "cat.png".into(),
                    alt: "a pretty cat".into(),
                    title: Some("Cat".into()),
                }]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn test_footnote_definitions_are_moved_to_the_end() {
        let tokens = lex("Text[^1].\n\n[^1]: The note.\n\nMore text.\n");
        let kinds: Vec<&str> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "paragraph_open",
                "inline",
                "paragraph_close",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "footnote_block_open",
                "footnote_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "footnote_close",
                "footnote_block_close",
            ]
        );
        assert!(tokens.contains(&Token::FootnoteOpen { label: "1".into() }));
    }

    #[test]
    fn test_container_fences_become_tokens() {
        let tokens = lex("::: warning\nCareful\n:::\n");
        assert_eq!(
            tokens,
            vec![
                Token::ContainerOpen {
                    name: "warning".into(),
                    info: None,
                },
                Token::ParagraphOpen,
                Token::Inline(vec![text("Careful")]),
                Token::ParagraphClose,
                Token::ContainerClose {
                    name: "warning".into(),
                },
            ]
        );
    }

    #[test]
    fn test_container_inside_list_item_stays_in_the_list() {
        let tokens = lex("- a\n\n  ::: note\n  x\n  :::\n- b\n");
        let kinds: Vec<&str> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "bullet_list_open",
                "list_item_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "container_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "container_close",
                "list_item_close",
                "list_item_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "list_item_close",
                "bullet_list_close",
            ]
        );
    }

    #[test]
    fn test_container_inside_blockquote() {
        let tokens = lex("> ::: note\n> x\n> :::\n");
        let kinds: Vec<&str> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "blockquote_open",
                "container_open",
                "paragraph_open",
                "inline",
                "paragraph_close",
                "container_close",
                "blockquote_close",
            ]
        );
    }

    #[test]
    fn test_fence_lines_inside_html_block_are_restored() {
        let tokens = lex("<div>\n::: note\n</div>\n\n:::\n");
        assert_eq!(
            tokens[..3].to_vec(),
            vec![
                Token::ParagraphOpen,
                Token::Inline(vec![InlineToken::Html("<div>\n::: note\n</div>".into())]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn test_containers_can_be_disabled() {
        let options = ParseOptions {
            containers: false,
            ..ParseOptions::default()
        };
        let tokens = tokenize("::: warning\nCareful\n:::\n", &options);
        assert!(
            !tokens
                .iter()
                .any(|t| matches!(t, Token::ContainerOpen { .. }))
        );
    }

    #[test]
    fn test_html_block_becomes_paragraph() {
        assert_eq!(
            lex("<div>raw</div>\n"),
            vec![
                Token::ParagraphOpen,
                Token::Inline(vec![InlineToken::Html("<div>raw</div>".into())]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn test_task_marker_is_literal() {
        let tokens = lex("- [x] done\n");
        assert!(tokens.iter().any(|t| matches!(
            t,
            Token::Inline(run) if run.first() == Some(&InlineToken::Other { content: "[x] ".into() })
        )));
    }

    #[test]
    fn test_bare_urls_become_links() {
        assert_eq!(
            lex("See https://example.com/a_(b). Or www.rust-lang.org!"),
            vec![
                Token::ParagraphOpen,
                Token::Inline(vec![
                    text("See "),
                    InlineToken::LinkOpen {
                        href: "https://example.com/a_(b)".into(),
                        title: None,
                    },
                    text("https://example.com/a_(b)"),
                    InlineToken::LinkClose,
                    text(". Or "),
                    InlineToken::LinkOpen {
                        href: "http://www.rust-lang.org".into(),
                        title: None,
                    },
                    text("www.rust-lang.org"),
                    InlineToken::LinkClose,
                    text("!"),
                ]),
                Token::ParagraphClose,
            ]
        );
    }

    #[test]
    fn test_urls_inside_links_are_not_linked_again() {
        let tokens = lex("[https://a.example](https://b.example)");
        assert_eq!(
            tokens[1],
            Token::Inline(vec![
                InlineToken::LinkOpen {
                    href: "https://b.example".into(),
                    title: None,
                },
                text("https://a.example"),
                InlineToken::LinkClose,
            ])
        );
    }

    #[test]
    fn test_linkify_can_be_disabled() {
        let options = ParseOptions {
            linkify: false,
            ..ParseOptions::default()
        };
        assert_eq!(
            tokenize("https://example.com", &options)[1],
            Token::Inline(vec![text("https://example.com")])
        );
    }

    #[test]
    fn test_definition_list_tokens() {
        let tokens = lex("apple\n:   red fruit\n");
        let kinds: Vec<&str> = tokens.iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "dl_open",
                "dt_open",
                "inline",
                "dt_close",
                "dd_open",
                "inline",
                "dd_close",
                "dl_close",
            ]
        );
    }

    #[test]
    fn test_superscript_and_subscript() {
        assert_eq!(
            lex("^up^ ~down~")[1],
            Token::Inline(vec![
                InlineToken::SuperscriptOpen,
                text("up"),
                InlineToken::SuperscriptClose,
                text(" "),
                InlineToken::SubscriptOpen,
                text("down"),
                InlineToken::SubscriptClose,
            ])
        );
    }

    #[test]
    fn test_empty_source_has_no_tokens() {
        assert!(lex("").is_empty());
    }
}
