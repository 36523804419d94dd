//! Content tree to indented XML text.
//!
//! Output is a fragment: no declaration and no single-root requirement.
//! Each node is written in one of two modes:
//!
//! - **CDATA mode** (`force_cdata` or `code_block`): content goes verbatim
//!   into a `<![CDATA[...]]>` line. Content containing `]]>` is written as
//!   is and produces broken XML; callers must not store it.
//! - **Escaped mode**: content is HTML-escaped. Empty leaves self-close,
//!   single-line leaves stay on one line, everything else opens the tag on
//!   its own line with content lines indented beneath it.
//!
//! Content that is only whitespace counts as empty. Indentation is two
//! spaces per level.

use html_escape::{encode_double_quoted_attribute, encode_text};
use std::collections::BTreeMap;

use crate::models::ContentNode;

use super::sanitize::sanitize_tag;

const INDENT: &str = "  ";

/// Serialize `nodes` with every line prefixed by `indent_level` levels
pub fn serialize(nodes: &[ContentNode], indent_level: usize) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes, indent_level);
    out
}

/// Serialize a forest at indent level 0
pub fn render_to_xml(forest: &[ContentNode]) -> String {
    serialize(forest, 0)
}

/// Serialize a forest wrapped in a single `root` element, giving a
/// standalone document body
pub fn render_document(forest: &[ContentNode], root: &str) -> String {
    let tag = sanitize_tag(root);
    if forest.is_empty() {
        return format!("<{tag} />\n");
    }
    format!("<{tag}>\n{}</{tag}>\n", serialize(forest, 1))
}

/// ` name="value"` pairs in key order, values escaped
pub fn attribute_string(attributes: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&encode_double_quoted_attribute(value));
        out.push('"');
    }
    out
}

fn write_nodes(out: &mut String, nodes: &[ContentNode], level: usize) {
    for node in nodes {
        write_node(out, node, level);
    }
}

fn write_node(out: &mut String, node: &ContentNode, level: usize) {
    let pad = INDENT.repeat(level);
    let tag = sanitize_tag(&node.tag_name);
    let attrs = attribute_string(&node.attributes);
    let open = format!("<{tag}{attrs}>");
    let close = format!("</{tag}>");
    let has_content = !node.content.trim().is_empty();

    if node.force_cdata || node.code_block {
        push_line(out, &pad, &[&open]);
        if has_content {
            push_line(out, &pad, &[INDENT, "<![CDATA[", &node.content, "]]>"]);
        }
        write_nodes(out, &node.children, level + 1);
        push_line(out, &pad, &[&close]);
        return;
    }

    let escaped = encode_text(&node.content);

    if !node.has_children() {
        if !has_content {
            push_line(out, &pad, &["<", &tag, &attrs, " />"]);
        } else if !escaped.contains('\n') {
            push_line(out, &pad, &[&open, &escaped, &close]);
        } else {
            push_line(out, &pad, &[&open]);
            write_lines(out, &escaped, &pad);
            push_line(out, &pad, &[&close]);
        }
        return;
    }

    push_line(out, &pad, &[&open]);
    if has_content {
        write_lines(out, &escaped, &pad);
    }
    write_nodes(out, &node.children, level + 1);
    push_line(out, &pad, &[&close]);
}

fn write_lines(out: &mut String, text: &str, pad: &str) {
    for line in text.split('\n') {
        push_line(out, pad, &[INDENT, line]);
    }
}

/// `pad` followed by `parts` and a newline
fn push_line(out: &mut String, pad: &str, parts: &[&str]) {
    out.push_str(pad);
    for part in parts {
        out.push_str(part);
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("t", "hello")]
    #[case("note", "plain words, no markup")]
    #[case("x-1", "42")]
    fn test_single_line_leaf(#[case] tag: &str, #[case] content: &str) {
        let node = ContentNode::with_content(tag, content);
        assert_eq!(serialize(&[node], 0), format!("<{tag}>{content}</{tag}>\n"));
    }

    #[test]
    fn test_empty_leaf_self_closes() {
        let node = ContentNode::new("hr");
        assert_eq!(render_to_xml(&[node]), "<hr />\n");
    }

    #[test]
    fn test_whitespace_content_counts_as_empty() {
        let node = ContentNode::with_content("br", "  \n ");
        assert_eq!(render_to_xml(&[node]), "<br />\n");
    }

    #[test]
    fn test_self_closing_keeps_attributes() {
        let node = ContentNode::new("img").with_attribute("src", "a\"b.png");
        assert_eq!(render_to_xml(&[node]), "<img src=\"a&quot;b.png\" />\n");
    }

    #[test]
    fn test_attributes_are_written_in_key_order() {
        let node = ContentNode::with_content("div", "x")
            .with_attribute("title", "Tom & \"Jerry\"")
            .with_attribute("class", "note");
        assert_eq!(
            attribute_string(&node.attributes),
            " class=\"note\" title=\"Tom &amp; &quot;Jerry&quot;\""
        );
        assert_eq!(
            render_to_xml(&[node]),
            "<div class=\"note\" title=\"Tom &amp; &quot;Jerry&quot;\">x</div>\n"
        );
    }

    #[test]
    fn test_content_is_escaped() {
        let node = ContentNode::with_content("p", "a < b & c");
        assert_eq!(render_to_xml(&[node]), "<p>a &lt; b &amp; c</p>\n");
    }

    #[test]
    fn test_tag_is_sanitized() {
        let node = ContentNode::with_content("my tag", "x");
        assert_eq!(render_to_xml(&[node]), "<my_tag>x</my_tag>\n");
        let unnamed = ContentNode::with_content("", "x");
        assert_eq!(render_to_xml(&[unnamed]), "<node>x</node>\n");
    }

    #[test]
    fn test_cdata_is_verbatim() {
        let node = ContentNode::with_content("code", "a<b>&c").with_code(None);
        let xml = render_to_xml(&[node]);
        assert!(xml.contains("<![CDATA[a<b>&c]]>"));
        assert_eq!(xml, "<code>\n  <![CDATA[a<b>&c]]>\n</code>\n");
    }

    #[test]
    fn test_forced_cdata_without_content_still_opens_and_closes() {
        let mut node = ContentNode::new("raw");
        node.force_cdata = true;
        assert_eq!(render_to_xml(&[node]), "<raw>\n</raw>\n");
    }

    #[test]
    fn test_cdata_terminator_is_not_escaped() {
        let mut node = ContentNode::with_content("raw", "x]]>y");
        node.force_cdata = true;
        assert_eq!(render_to_xml(&[node]), "<raw>\n  <![CDATA[x]]>y]]>\n</raw>\n");
    }

    #[test]
    fn test_multiline_leaf() {
        let node = ContentNode::with_content("p", "one\ntwo");
        assert_snapshot!(render_to_xml(&[node]), @r"
        <p>
          one
          two
        </p>
        ");
    }

    #[test]
    fn test_nested_tree_with_content_and_children() {
        let tree = ContentNode::with_content("task", "Summarize")
            .with_attribute("id", "1")
            .with_children(vec![
                ContentNode::with_content("input", "text"),
                ContentNode::new("rules").with_children(vec![
                    ContentNode::with_content("rule", "be brief"),
                    ContentNode::new("empty"),
                ]),
            ]);

        assert_snapshot!(render_to_xml(&[tree]), @r#"
        <task id="1">
          Summarize
          <input>text</input>
          <rules>
            <rule>be brief</rule>
            <empty />
          </rules>
        </task>
        "#);
    }

    #[test]
    fn test_indent_level_prefixes_every_line() {
        let tree = ContentNode::new("a").with_children(vec![ContentNode::with_content("b", "c")]);
        assert_eq!(serialize(&[tree], 2), "    <a>\n      <b>c</b>\n    </a>\n");
    }

    #[test]
    fn test_output_is_stable() {
        let tree = ContentNode::new("a")
            .with_attribute("z", "1")
            .with_attribute("b", "2")
            .with_children(vec![ContentNode::with_content("b", "c")]);
        assert_eq!(render_to_xml(&[tree.clone()]), render_to_xml(&[tree]));
    }

    #[test]
    fn test_render_document_wraps_in_root() {
        let forest = vec![ContentNode::with_content("a", "1"), ContentNode::new("b")];
        assert_eq!(
            render_document(&forest, "prompt"),
            "<prompt>\n  <a>1</a>\n  <b />\n</prompt>\n"
        );
        assert_eq!(render_document(&[], "prompt"), "<prompt />\n");
    }
}
