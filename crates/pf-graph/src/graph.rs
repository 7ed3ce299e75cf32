//! Immutable graph snapshot.

use pf_core::{NodeId, StreamId};
use pf_model::{Equipment, ProcessStream};

use crate::indexing::Incidence;

/// A directed multigraph of equipment units joined by process streams.
///
/// The snapshot is read-only. Editing goes through [`crate::GraphBuilder`], which
/// produces a fresh snapshot; the previous one is never touched.
///
/// Parallel streams between the same pair of units are allowed. Streams whose
/// endpoints do not resolve are kept (so per-stream calculations still see them)
/// but are incident to no unit.
#[derive(Debug, Clone, Default)]
pub struct ProcessGraph {
    pub(crate) nodes: Vec<Equipment>,
    pub(crate) streams: Vec<ProcessStream>,
    pub(crate) incidence: Incidence,
}

impl ProcessGraph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap units and streams as given, without rejecting anything.
    ///
    /// Use [`ProcessGraph::validate`] to find out what is wrong with the result.
    pub fn from_parts(nodes: Vec<Equipment>, streams: Vec<ProcessStream>) -> Self {
        let incidence = Incidence::build(&nodes, &streams);
        Self {
            nodes,
            streams,
            incidence,
        }
    }

    /// All units, in insertion order.
    pub fn nodes(&self) -> &[Equipment] {
        &self.nodes
    }

    /// All streams, in insertion order.
    pub fn streams(&self) -> &[ProcessStream] {
        &self.streams
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.streams.is_empty()
    }

    /// First unit with `id`.
    pub fn node(&self, id: &NodeId) -> Option<&Equipment> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn stream(&self, id: &StreamId) -> Option<&ProcessStream> {
        self.streams.iter().find(|s| &s.id == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.incidence.contains(id)
    }

    /// Streams whose target is `node`.
    pub fn incoming<'a>(
        &'a self,
        node: &NodeId,
    ) -> impl Iterator<Item = &'a ProcessStream> + use<'a> {
        let streams = &self.streams;
        self.incidence
            .incoming(node)
            .iter()
            .map(move |&pos| &streams[pos])
    }

    /// Streams whose source is `node`.
    pub fn outgoing<'a>(
        &'a self,
        node: &NodeId,
    ) -> impl Iterator<Item = &'a ProcessStream> + use<'a> {
        let streams = &self.streams;
        self.incidence
            .outgoing(node)
            .iter()
            .map(move |&pos| &streams[pos])
    }

    pub fn incidence(&self) -> &Incidence {
        &self.incidence
    }

    pub fn into_parts(self) -> (Vec<Equipment>, Vec<ProcessStream>) {
        (self.nodes, self.streams)
    }
}
