//! Node id generation

use uuid::Uuid;

use super::node::NodeId;

/// Prefix used by [`SequentialIdGenerator`]
pub const NODE_ID_PREFIX: &str = "node_";

/// Source of fresh node ids for a graph
pub trait NodeIdGenerator: Send + Sync + std::fmt::Debug {
    /// Allocate the next id. Never returns the same id twice.
    fn next_id(&mut self) -> NodeId;

    /// Make sure ids already present in a loaded graph are never reissued
    fn observe(&mut self, _id: &NodeId) {}
}

/// Monotonic counter producing `node_0`, `node_1`, ...
///
/// Owned by a single graph so two sessions never share a counter. Once the
/// counter is exhausted (a loaded graph can push it to `u64::MAX`) ids fall
/// back to `node_<uuid>`.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: Option<u64>,
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self { next: Some(0) }
    }
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn parse_counter(id: &NodeId) -> Option<u64> {
        id.as_str().strip_prefix(NODE_ID_PREFIX)?.parse().ok()
    }
}

impl NodeIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> NodeId {
        match self.next {
            Some(counter) => {
                self.next = counter.checked_add(1);
                NodeId::new(format!("{}{}", NODE_ID_PREFIX, counter))
            }
            None => NodeId::new(format!("{}{}", NODE_ID_PREFIX, Uuid::new_v4().simple())),
        }
    }

    fn observe(&mut self, id: &NodeId) {
        let (Some(next), Some(counter)) = (self.next, Self::parse_counter(id)) else {
            return;
        };

        self.next = counter.checked_add(1).map(|after| next.max(after));
    }
}
