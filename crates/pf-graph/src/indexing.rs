//! Incidence index: node id → positions of its incoming and outgoing streams.
//!
//! Built once per snapshot so that per-node calculations do not rescan the full
//! stream list.

use std::collections::HashMap;

use pf_core::NodeId;
use pf_model::{Equipment, ProcessStream};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NodeSlots {
    incoming: Vec<usize>,
    outgoing: Vec<usize>,
}

/// Stream positions incident to each known node.
///
/// Positions are indices into the snapshot's stream list, kept in ascending order.
/// Streams whose endpoint is not a known node are recorded in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Incidence {
    slots: HashMap<NodeId, NodeSlots>,
}

impl Incidence {
    pub fn build(nodes: &[Equipment], streams: &[ProcessStream]) -> Self {
        let mut slots: HashMap<NodeId, NodeSlots> = nodes
            .iter()
            .map(|n| (n.id.clone(), NodeSlots::default()))
            .collect();

        for (pos, stream) in streams.iter().enumerate() {
            if let Some(slot) = slots.get_mut(&stream.source_id) {
                slot.outgoing.push(pos);
            }
            if let Some(slot) = slots.get_mut(&stream.target_id) {
                slot.incoming.push(pos);
            }
        }

        Self { slots }
    }

    /// Positions of streams whose target is `node`.
    pub fn incoming(&self, node: &NodeId) -> &[usize] {
        self.slots.get(node).map_or(&[], |s| s.incoming.as_slice())
    }

    /// Positions of streams whose source is `node`.
    pub fn outgoing(&self, node: &NodeId) -> &[usize] {
        self.slots.get(node).map_or(&[], |s| s.outgoing.as_slice())
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.slots.contains_key(node)
    }

    /// Number of distinct node ids indexed.
    pub fn node_count(&self) -> usize {
        self.slots.len()
    }
}
