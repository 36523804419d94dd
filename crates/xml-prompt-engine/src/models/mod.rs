pub mod node;

pub use node::{ContentNode, DEFAULT_TAG, NodeId};
