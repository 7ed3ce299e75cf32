//! Editing session: the flowsheet being built and its latest analysis.
//!
//! Every successful mutation builds a new graph snapshot, swaps it in and
//! recomputes the full analysis. A rejected mutation leaves the session as it
//! was.

use std::sync::Arc;

use pf_core::{ChemicalId, NodeId, StreamId};
use pf_graph::{GraphBuilder, GraphError, ProcessGraph};
use pf_model::{
    ChemicalComposition, Equipment, EquipmentPatch, EquipmentType, Parameters, Position,
    ProcessStream, ThermodynamicModel, find_model,
};
use tracing::debug;
use uuid::Uuid;

use crate::advisor::{Recommendation, recommendations};
use crate::analysis::{AnalysisResult, analyze};
use crate::chemicals::ChemicalLibrary;
use crate::error::{AppError, AppResult};

/// A graph snapshot together with the analysis computed from it.
///
/// `analysis` is `None` when no analysis has been requested yet or the last
/// one was unavailable.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub graph: Arc<ProcessGraph>,
    pub analysis: Option<Arc<AnalysisResult>>,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessSession {
    graph: Arc<ProcessGraph>,
    analysis: Option<Arc<AnalysisResult>>,
    selected_model: Option<ThermodynamicModel>,
    selected_node: Option<NodeId>,
    chemicals: ChemicalLibrary,
    next_node: u64,
}

impl ProcessSession {
    /// Empty flowsheet over the seed chemical catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over an existing graph, analyzed right away.
    pub fn from_graph(graph: ProcessGraph) -> Self {
        let mut session = Self::new();
        session.commit(graph);
        session
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            graph: Arc::clone(&self.graph),
            analysis: self.analysis.clone(),
        }
    }

    pub fn graph(&self) -> &ProcessGraph {
        &self.graph
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_deref()
    }

    pub fn selected_model(&self) -> Option<&ThermodynamicModel> {
        self.selected_model.as_ref()
    }

    /// Choose the thermodynamic model by catalog id.
    pub fn set_selected_model(&mut self, id: &str) -> AppResult<()> {
        let model = find_model(id).ok_or_else(|| AppError::UnknownModel(id.to_string()))?;
        self.selected_model = Some(model);
        Ok(())
    }

    pub fn chemicals(&self) -> &ChemicalLibrary {
        &self.chemicals
    }

    pub fn chemicals_mut(&mut self) -> &mut ChemicalLibrary {
        &mut self.chemicals
    }

    /// Mark `id` as the unit under inspection; `None` clears the mark.
    pub fn select_node(&mut self, id: Option<NodeId>) -> AppResult<()> {
        if let Some(id) = &id {
            if !self.graph.contains_node(id) {
                return Err(GraphError::NodeNotFound { node: id.clone() }.into());
            }
        }
        self.selected_node = id;
        Ok(())
    }

    /// The unit under inspection, as it is in the current snapshot.
    pub fn selected_node(&self) -> Option<&Equipment> {
        self.selected_node
            .as_ref()
            .and_then(|id| self.graph.node(id))
    }

    /// Add a fully specified unit.
    pub fn add_node(&mut self, node: Equipment) -> AppResult<Snapshot> {
        let mut builder = GraphBuilder::from_graph(&self.graph);
        builder.add_node(node)?;
        Ok(self.commit(builder.build()))
    }

    /// Drop a library unit of `kind` at `position`, with the type's parameter
    /// template and a fresh `node_<n>` id.
    pub fn place_equipment(
        &mut self,
        kind: EquipmentType,
        position: Position,
    ) -> AppResult<Snapshot> {
        let (id, n) = self.fresh_node_id();
        let node = Equipment::new(id, kind)
            .with_name(format!("{} {}", kind.label(), n))
            .at(position);
        self.add_node(node)
    }

    /// Add a feed tank holding the pure catalog chemical `chemical`.
    pub fn add_chemical_node(
        &mut self,
        chemical: &ChemicalId,
        position: Position,
    ) -> AppResult<Snapshot> {
        let entry = self
            .chemicals
            .get(chemical)
            .ok_or_else(|| AppError::UnknownChemical(chemical.to_string()))?;

        let node = Equipment::bare(
            format!("chemical_{}_{}", entry.id, Uuid::new_v4().simple()),
            EquipmentType::FeedTank,
        )
        .with_name(entry.name.clone())
        .at(position)
        .with_parameters(Parameters::process(25.0, 1.0, 100.0))
        .with_composition(vec![ChemicalComposition::pure(entry.id.clone())]);
        self.add_node(node)
    }

    /// Apply `patch` to the unit `id`. Streams already derived from it keep
    /// their values.
    pub fn update_node(&mut self, id: &NodeId, patch: &EquipmentPatch) -> AppResult<Snapshot> {
        let current = self
            .graph
            .node(id)
            .ok_or_else(|| GraphError::NodeNotFound { node: id.clone() })?;
        let updated = patch.apply_to(current);

        let mut builder = GraphBuilder::from_graph(&self.graph);
        builder.replace_node(updated)?;
        Ok(self.commit(builder.build()))
    }

    /// Connect `source → target` with a stream derived from the source unit's
    /// composition and conditions.
    pub fn add_connection(&mut self, source: &NodeId, target: &NodeId) -> AppResult<Snapshot> {
        let stream_id = StreamId::new(format!("stream-{}", Uuid::new_v4()));
        let source_node = self
            .graph
            .node(source)
            .ok_or_else(|| GraphError::DanglingStream {
                stream: stream_id.clone(),
                endpoint: source.clone(),
            })?;
        let stream = ProcessStream::from_source(stream_id, source_node, target.clone())?;
        self.add_stream(stream)
    }

    /// Add a fully specified stream; both endpoints must exist.
    pub fn add_stream(&mut self, stream: ProcessStream) -> AppResult<Snapshot> {
        let mut builder = GraphBuilder::from_graph(&self.graph);
        builder.add_stream(stream)?;
        Ok(self.commit(builder.build()))
    }

    /// Recompute the analysis of the current graph.
    pub fn run_analysis(&mut self) -> Snapshot {
        self.analysis = analyze(&self.graph).map(Arc::new);
        self.snapshot()
    }

    /// Recommendations for the current flowsheet, model and chemical selection.
    pub fn recommendations(&self) -> Vec<Recommendation> {
        recommendations(
            self.graph.nodes(),
            self.selected_model.as_ref(),
            self.chemicals.selected_count(),
        )
    }

    fn commit(&mut self, graph: ProcessGraph) -> Snapshot {
        debug!(
            "recomputing analysis for {} units and {} streams",
            graph.nodes().len(),
            graph.streams().len()
        );
        self.graph = Arc::new(graph);
        self.run_analysis()
    }

    fn fresh_node_id(&mut self) -> (NodeId, u64) {
        loop {
            let n = self.next_node;
            self.next_node += 1;
            let id = NodeId::new(format!("node_{n}"));
            if !self.graph.contains_node(&id) {
                return (id, n);
            }
        }
    }
}
