//! Flat token vocabulary consumed by the block walker.
//!
//! Block constructs follow an open/close pairing convention: every `*Open`
//! token is matched by a `*Close` token of the same [`Family`]. Inline
//! content arrives as a single [`Token::Inline`] run between the pair.

/// Block-level token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    HeadingOpen { level: u8 },
    HeadingClose,
    ParagraphOpen,
    ParagraphClose,
    /// Fenced or indented code; `info` is the raw fence info string
    CodeBlock {
        info: Option<String>,
        content: String,
    },
    BulletListOpen,
    BulletListClose,
    OrderedListOpen { start: u64 },
    OrderedListClose,
    ListItemOpen,
    ListItemClose,
    BlockquoteOpen,
    BlockquoteClose,
    TableOpen,
    TableClose,
    TableHeadOpen,
    TableHeadClose,
    TableBodyOpen,
    TableBodyClose,
    RowOpen,
    RowClose,
    HeaderCellOpen,
    HeaderCellClose,
    DataCellOpen,
    DataCellClose,
    ThematicBreak,
    FootnoteBlockOpen,
    FootnoteBlockClose,
    FootnoteOpen { label: String },
    FootnoteClose,
    DefinitionListOpen,
    DefinitionListClose,
    DefinitionTermOpen,
    DefinitionTermClose,
    DefinitionDetailsOpen,
    DefinitionDetailsClose,
    ContainerOpen { name: String, info: Option<String> },
    ContainerClose { name: String },
    Inline(Vec<InlineToken>),
    /// A construct the walker has no rule for
    Unknown(String),
}

/// Inline-level token inside a [`Token::Inline`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    Text(String),
    SoftBreak,
    HardBreak,
    Code(String),
    EmphasisOpen,
    EmphasisClose,
    StrongOpen,
    StrongClose,
    StrikethroughOpen,
    StrikethroughClose,
    SuperscriptOpen,
    SuperscriptClose,
    SubscriptOpen,
    SubscriptClose,
    LinkOpen {
        href: String,
        title: Option<String>,
    },
    LinkClose,
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
    /// Raw inline HTML, never interpreted
    Html(String),
    /// Substituted emoji character
    Emoji(String),
    /// Anything else; rendered from its literal text
    Other { content: String },
}

/// Identity shared by an open token and its matching close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family<'a> {
    Heading,
    Paragraph,
    BulletList,
    OrderedList,
    ListItem,
    Blockquote,
    Table,
    TableHead,
    TableBody,
    Row,
    HeaderCell,
    DataCell,
    FootnoteBlock,
    Footnote,
    DefinitionList,
    DefinitionTerm,
    DefinitionDetails,
    Container(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Open,
    Close,
}

impl Token {
    /// Family and edge of a paired token, `None` for self-contained tokens
    pub fn pairing(&self) -> Option<(Family<'_>, Edge)> {
        use Edge::{Close, Open};
        let pair = match self {
            Token::HeadingOpen { .. } => (Family::Heading, Open),
            Token::HeadingClose => (Family::Heading, Close),
            Token::ParagraphOpen => (Family::Paragraph, Open),
            Token::ParagraphClose => (Family::Paragraph, Close),
            Token::BulletListOpen => (Family::BulletList, Open),
            Token::BulletListClose => (Family::BulletList, Close),
            Token::OrderedListOpen { .. } => (Family::OrderedList, Open),
            Token::OrderedListClose => (Family::OrderedList, Close),
            Token::ListItemOpen => (Family::ListItem, Open),
            Token::ListItemClose => (Family::ListItem, Close),
            Token::BlockquoteOpen => (Family::Blockquote, Open),
            Token::BlockquoteClose => (Family::Blockquote, Close),
            Token::TableOpen => (Family::Table, Open),
            Token::TableClose => (Family::Table, Close),
            Token::TableHeadOpen => (Family::TableHead, Open),
            Token::TableHeadClose => (Family::TableHead, Close),
            Token::TableBodyOpen => (Family::TableBody, Open),
            Token::TableBodyClose => (Family::TableBody, Close),
            Token::RowOpen => (Family::Row, Open),
            Token::RowClose => (Family::Row, Close),
            Token::HeaderCellOpen => (Family::HeaderCell, Open),
            Token::HeaderCellClose => (Family::HeaderCell, Close),
            Token::DataCellOpen => (Family::DataCell, Open),
            Token::DataCellClose => (Family::DataCell, Close),
            Token::FootnoteBlockOpen => (Family::FootnoteBlock, Open),
            Token::FootnoteBlockClose => (Family::FootnoteBlock, Close),
            Token::FootnoteOpen { .. } => (Family::Footnote, Open),
            Token::FootnoteClose => (Family::Footnote, Close),
            Token::DefinitionListOpen => (Family::DefinitionList, Open),
            Token::DefinitionListClose => (Family::DefinitionList, Close),
            Token::DefinitionTermOpen => (Family::DefinitionTerm, Open),
            Token::DefinitionTermClose => (Family::DefinitionTerm, Close),
            Token::DefinitionDetailsOpen => (Family::DefinitionDetails, Open),
            Token::DefinitionDetailsClose => (Family::DefinitionDetails, Close),
            Token::ContainerOpen { name, .. } => (Family::Container(name), Open),
            Token::ContainerClose { name } => (Family::Container(name), Close),
            Token::CodeBlock { .. }
            | Token::ThematicBreak
            | Token::Inline(_)
            | Token::Unknown(_) => return None,
        };
        Some(pair)
    }

    /// Short kind name used in log output
    pub fn kind(&self) -> &str {
        match self {
            Token::HeadingOpen { .. } => "heading_open",
            Token::HeadingClose => "heading_close",
            Token::ParagraphOpen => "paragraph_open",
            Token::ParagraphClose => "paragraph_close",
            Token::CodeBlock { .. } => "code_block",
            Token::BulletListOpen => "bullet_list_open",
            Token::BulletListClose => "bullet_list_close",
            Token::OrderedListOpen { .. } => "ordered_list_open",
            Token::OrderedListClose => "ordered_list_close",
            Token::ListItemOpen => "list_item_open",
            Token::ListItemClose => "list_item_close",
            Token::BlockquoteOpen => "blockquote_open",
            Token::BlockquoteClose => "blockquote_close",
            Token::TableOpen => "table_open",
            Token::TableClose => "table_close",
            Token::TableHeadOpen => "thead_open",
            Token::TableHeadClose => "thead_close",
            Token::TableBodyOpen => "tbody_open",
            Token::TableBodyClose => "tbody_close",
            Token::RowOpen => "tr_open",
            Token::RowClose => "tr_close",
            Token::HeaderCellOpen => "th_open",
            Token::HeaderCellClose => "th_close",
            Token::DataCellOpen => "td_open",
            Token::DataCellClose => "td_close",
            Token::ThematicBreak => "hr",
            Token::FootnoteBlockOpen => "footnote_block_open",
            Token::FootnoteBlockClose => "footnote_block_close",
            Token::FootnoteOpen { .. } => "footnote_open",
            Token::FootnoteClose => "footnote_close",
            Token::DefinitionListOpen => "dl_open",
            Token::DefinitionListClose => "dl_close",
            Token::DefinitionTermOpen => "dt_open",
            Token::DefinitionTermClose => "dt_close",
            Token::DefinitionDetailsOpen => "dd_open",
            Token::DefinitionDetailsClose => "dd_close",
            Token::ContainerOpen { .. } => "container_open",
            Token::ContainerClose { .. } => "container_close",
            Token::Inline(_) => "inline",
            Token::Unknown(kind) => kind.as_str(),
        }
    }
}
