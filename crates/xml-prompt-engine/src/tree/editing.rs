//! Structural edits on a content forest.
//!
//! All operations address nodes by [`NodeId`] and search the whole forest
//! depth-first. They mutate in place and report whether anything changed.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{ContentNode, NodeId};
use crate::parsing::parse_markdown;

/// `1.` `1)` `a.` `a)` `-` `*` `+` `#1` followed by whitespace
static LIST_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+[.)]|[A-Za-z][.)]|[-*+]|#\d+)\s+(.*)$").unwrap());

/// Tag of the children created by [`auto_children`]
pub const ITEM_TAG: &str = "item";

/// Field values written by [`update_node`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeUpdate {
    /// Trimmed before use; blank keeps the current tag
    pub tag_name: String,
    pub content: String,
    pub code_block: bool,
    pub code_language: Option<String>,
    pub force_cdata: bool,
}

pub fn find_by_id(forest: &[ContentNode], id: NodeId) -> Option<&ContentNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

pub fn find_by_id_mut(forest: &mut [ContentNode], id: NodeId) -> Option<&mut ContentNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id_mut(&mut node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Detach the node and its subtree, returning it
pub fn remove_by_id(forest: &mut Vec<ContentNode>, id: NodeId) -> Option<ContentNode> {
    if let Some(pos) = forest.iter().position(|node| node.id == id) {
        return Some(forest.remove(pos));
    }
    forest
        .iter_mut()
        .find_map(|node| remove_by_id(&mut node.children, id))
}

/// Append `node` as the last child of `parent`, or as the last root when
/// `parent` is `None`.
///
/// Returns false, dropping `node`, when `parent` is not in the forest.
pub fn insert_as_child(
    forest: &mut Vec<ContentNode>,
    parent: Option<NodeId>,
    node: ContentNode,
) -> bool {
    match parent {
        None => {
            forest.push(node);
            true
        }
        Some(parent_id) => match find_by_id_mut(forest, parent_id) {
            Some(parent) => {
                parent.children.push(node);
                true
            }
            None => {
                log::debug!("insert target {parent_id} not found");
                false
            }
        },
    }
}

/// Swap the node with its previous sibling; false when already first
pub fn move_up(forest: &mut [ContentNode], id: NodeId) -> bool {
    move_among_siblings(forest, id, Direction::Up)
}

/// Swap the node with its next sibling; false when already last
pub fn move_down(forest: &mut [ContentNode], id: NodeId) -> bool {
    move_among_siblings(forest, id, Direction::Down)
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

fn move_among_siblings(siblings: &mut [ContentNode], id: NodeId, direction: Direction) -> bool {
    if let Some(pos) = siblings.iter().position(|node| node.id == id) {
        let target = match direction {
            Direction::Up => pos.checked_sub(1),
            Direction::Down => Some(pos + 1).filter(|t| *t < siblings.len()),
        };
        return match target {
            Some(target) => {
                siblings.swap(pos, target);
                true
            }
            None => false,
        };
    }
    siblings
        .iter_mut()
        .any(|node| move_among_siblings(&mut node.children, id, direction))
}

/// Overwrite the editable fields of a node
pub fn update_node(forest: &mut [ContentNode], id: NodeId, update: NodeUpdate) -> bool {
    let Some(node) = find_by_id_mut(forest, id) else {
        return false;
    };
    let tag = update.tag_name.trim();
    if !tag.is_empty() {
        node.tag_name = tag.to_string();
    }
    node.content = update.content;
    node.code_block = update.code_block;
    node.code_language = update.code_language.filter(|lang| !lang.is_empty());
    node.force_cdata = update.force_cdata;
    true
}

/// Replace a node's subtree with the forest parsed from `markdown`.
///
/// A leading heading is promoted onto the target (tag and content) and the
/// rest become its children; otherwise the target's content is cleared and
/// every parsed node becomes a child. Returns the number of top-level nodes
/// parsed, or `None` when the target does not exist. Nothing changes when
/// the Markdown parses to an empty forest.
pub fn apply_markdown(forest: &mut [ContentNode], id: NodeId, markdown: &str) -> Option<usize> {
    let target = find_by_id_mut(forest, id)?;
    let mut parsed = parse_markdown(markdown);
    let count = parsed.len();
    if parsed.is_empty() {
        return Some(0);
    }

    if is_heading(&parsed[0].tag_name) {
        let heading = parsed.remove(0);
        target.tag_name = heading.tag_name;
        target.content = heading.content;
    } else {
        target.content.clear();
    }
    target.children = parsed;
    Some(count)
}

/// Split a node's content into one [`ITEM_TAG`] child per non-blank line,
/// stripping any list prefix.
///
/// The items go after the existing children and the content is cleared.
/// Returns the number of items created, or `None` when the target does not
/// exist. Blank content creates nothing and leaves the node untouched.
pub fn auto_children(forest: &mut [ContentNode], id: NodeId) -> Option<usize> {
    let target = find_by_id_mut(forest, id)?;
    let items = list_items(&target.content);
    if items.is_empty() {
        return Some(0);
    }

    let count = items.len();
    target.children.extend(
        items
            .into_iter()
            .map(|item| ContentNode::with_content(ITEM_TAG, item)),
    );
    target.content.clear();
    log::debug!("Created {count} {ITEM_TAG} children");
    Some(count)
}

fn list_items(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match LIST_PREFIX_RE.captures(line) {
            Some(caps) => caps[1].to_string(),
            None => line.to_string(),
        })
        .collect()
}

fn is_heading(tag: &str) -> bool {
    matches!(tag.as_bytes(), [b'h', b'1'..=b'6'])
}
