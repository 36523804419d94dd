//! Tree editing helpers consumed by front ends.

pub mod editing;
pub mod stats;

pub use editing::{
    ITEM_TAG, NodeUpdate, apply_markdown, auto_children, find_by_id, find_by_id_mut,
    insert_as_child, move_down, move_up, remove_by_id, update_node,
};
pub use stats::{collect_ids, count_nodes, estimate_tokens};
