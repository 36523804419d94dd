//! Existing XML back into a content tree.
//!
//! The input is a fragment (what [`render_to_xml`](super::render_to_xml)
//! produces), so it is wrapped in a synthetic root before parsing. Every
//! element becomes a node; its direct text and CDATA children are joined
//! and trimmed into `content`.

use roxmltree::{Document, Node};

use crate::models::ContentNode;

use super::error::XmlError;

const SYNTHETIC_ROOT: &str = "root";

/// Parse an XML fragment into a fresh forest
pub fn parse_xml(text: &str) -> Result<Vec<ContentNode>, XmlError> {
    let wrapped = wrap(text);
    let doc = Document::parse(&wrapped)?;
    let forest = doc
        .root_element()
        .children()
        .filter(Node::is_element)
        .map(element_to_node)
        .collect();
    Ok(forest)
}

/// Check that a serialized fragment is well-formed once wrapped in a root
pub fn validate_xml(fragment: &str) -> Result<(), XmlError> {
    Document::parse(&wrap(fragment))?;
    Ok(())
}

fn wrap(text: &str) -> String {
    format!("<{SYNTHETIC_ROOT}>{text}</{SYNTHETIC_ROOT}>")
}

fn element_to_node(element: Node<'_, '_>) -> ContentNode {
    let mut node = ContentNode::new(element.tag_name().name());
    let mut content = String::new();

    for child in element.children() {
        if child.is_element() {
            node.children.push(element_to_node(child));
        } else if child.is_text()
            && let Some(text) = child.text()
        {
            content.push_str(text);
        }
    }

    node.content = content.trim().to_string();
    node.attributes = element
        .attributes()
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::render_to_xml;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_fragment() {
        let nodes = parse_xml("<a>one</a><b x=\"1\" />").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].tag_name, "a");
        assert_eq!(nodes[0].content, "one");
        assert_eq!(nodes[1].attributes.get("x").map(String::as_str), Some("1"));
        assert!(nodes[1].content.is_empty());
    }

    #[test]
    fn test_nested_elements_and_mixed_text() {
        let nodes = parse_xml("<task>\n  Do it\n  <step>first</step>\n</task>").unwrap();
        let task = &nodes[0];
        assert_eq!(task.content, "Do it");
        assert_eq!(task.children.len(), 1);
        assert_eq!(task.children[0].content, "first");
    }

    #[test]
    fn test_cdata_text_is_kept_verbatim() {
        let nodes = parse_xml("<code><![CDATA[a<b>&c]]></code>").unwrap();
        assert_eq!(nodes[0].content, "a<b>&c");
    }

    #[test]
    fn test_entities_are_decoded() {
        let nodes = parse_xml("<p>a &lt; b &amp; c</p>").unwrap();
        assert_eq!(nodes[0].content, "a < b & c");
    }

    #[test]
    fn test_invalid_xml_is_an_error() {
        assert!(parse_xml("<a><b></a>").is_err());
    }

    #[test]
    fn test_serialized_output_reimports() {
        let forest = vec![
            ContentNode::with_content("intro", "x & y"),
            ContentNode::new("list").with_children(vec![ContentNode::with_content("item", "1")]),
        ];
        let imported = parse_xml(&render_to_xml(&forest)).unwrap();

        assert_eq!(imported.len(), 2);
        assert_eq!(imported[0].content, "x & y");
        assert_eq!(imported[1].children[0].tag_name, "item");
        assert_ne!(imported[0].id, forest[0].id);
    }

    #[test]
    fn test_validate_xml() {
        assert!(validate_xml("<a>1</a><b />").is_ok());
        assert!(validate_xml("").is_ok());
        assert!(validate_xml("<a>").is_err());
        assert!(validate_xml("<a></b>").is_err());
    }
}
