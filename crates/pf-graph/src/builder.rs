//! Incremental graph builder.

use std::collections::HashSet;

use pf_core::{NodeId, StreamId};
use pf_model::{Equipment, ProcessStream};

use crate::error::{GraphError, GraphResult};
use crate::graph::ProcessGraph;

/// Builder for constructing a graph incrementally.
///
/// Every insertion is checked on the spot, so a rejected call leaves the builder
/// exactly as it was. Call `build()` to freeze the result into a [`ProcessGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Equipment>,
    streams: Vec<ProcessStream>,
    node_ids: HashSet<NodeId>,
    stream_ids: HashSet<StreamId>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the contents of an existing snapshot.
    pub fn from_graph(graph: &ProcessGraph) -> Self {
        Self {
            node_ids: graph.nodes.iter().map(|n| n.id.clone()).collect(),
            stream_ids: graph.streams.iter().map(|s| s.id.clone()).collect(),
            nodes: graph.nodes.clone(),
            streams: graph.streams.clone(),
        }
    }

    /// Add a unit.
    ///
    /// Rejects a blank or already used id, and required parameters that are
    /// present but not finite numbers.
    pub fn add_node(&mut self, node: Equipment) -> GraphResult<()> {
        if node.id.is_blank() || self.node_ids.contains(&node.id) {
            return Err(GraphError::DuplicateNode { node: node.id });
        }
        check_parameters(&node)?;

        self.node_ids.insert(node.id.clone());
        self.nodes.push(node);
        Ok(())
    }

    /// Replace the unit carrying `node.id`, keeping its position in the list.
    pub fn replace_node(&mut self, node: Equipment) -> GraphResult<()> {
        check_parameters(&node)?;
        let slot = self
            .nodes
            .iter_mut()
            .find(|n| n.id == node.id)
            .ok_or_else(|| GraphError::NodeNotFound {
                node: node.id.clone(),
            })?;
        *slot = node;
        Ok(())
    }

    /// Add a stream. Both endpoints must already be present.
    pub fn add_stream(&mut self, stream: ProcessStream) -> GraphResult<()> {
        if self.stream_ids.contains(&stream.id) {
            return Err(GraphError::DuplicateStream { stream: stream.id });
        }
        for endpoint in [&stream.source_id, &stream.target_id] {
            if !self.node_ids.contains(endpoint) {
                return Err(GraphError::DanglingStream {
                    stream: stream.id.clone(),
                    endpoint: endpoint.clone(),
                });
            }
        }

        self.stream_ids.insert(stream.id.clone());
        self.streams.push(stream);
        Ok(())
    }

    pub fn node(&self, id: &NodeId) -> Option<&Equipment> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_ids.contains(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Freeze into an immutable snapshot with its incidence index.
    pub fn build(self) -> ProcessGraph {
        ProcessGraph::from_parts(self.nodes, self.streams)
    }
}

fn check_parameters(node: &Equipment) -> GraphResult<()> {
    node.parameters
        .check_required()
        .map_err(|source| GraphError::InvalidParameters {
            node: node.id.clone(),
            source,
        })
}
