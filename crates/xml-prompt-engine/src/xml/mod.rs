//! XML side of the content tree: tag sanitizing, serialization and import.

pub mod error;
pub mod import;
pub mod sanitize;
pub mod serializer;

pub use error::XmlError;
pub use import::{parse_xml, validate_xml};
pub use sanitize::{FALLBACK_TAG, sanitize_tag};
pub use serializer::{attribute_string, render_document, render_to_xml, serialize};
