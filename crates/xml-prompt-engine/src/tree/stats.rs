use crate::models::{ContentNode, NodeId};

/// Number of nodes in the forest, at every depth
pub fn count_nodes(forest: &[ContentNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

/// Every id in the forest, depth-first pre-order
pub fn collect_ids(forest: &[ContentNode]) -> Vec<NodeId> {
    let mut ids = Vec::new();
    collect_ids_into(forest, &mut ids);
    ids
}

fn collect_ids_into(forest: &[ContentNode], ids: &mut Vec<NodeId>) {
    for node in forest {
        ids.push(node.id);
        collect_ids_into(&node.children, ids);
    }
}

/// Rough LLM token estimate for prompt text: one token per four characters
pub fn estimate_tokens(text: &str) -> usize {
    let chars = text.chars().count();
    (chars as f64 / 4.0).round() as usize
}
