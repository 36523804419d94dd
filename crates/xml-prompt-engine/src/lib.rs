pub mod io;
pub mod models;
pub mod parsing;
pub mod tree;
pub mod xml;

#[cfg(test)]
pub mod tests;

// Re-export key entry points for easier usage
pub use models::{ContentNode, NodeId};
pub use parsing::{ParseOptions, parse_markdown, parse_markdown_with};
pub use xml::{
    XmlError, parse_xml, render_document, render_to_xml, sanitize_tag, serialize, validate_xml,
};
