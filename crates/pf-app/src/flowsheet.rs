//! Flowsheet input files (YAML or JSON).
//!
//! ```yaml
//! name: Ethanol recovery
//! model: nrtl
//! chemicals: [ethanol, methanol]
//! equipment:
//!   - id: feed
//!     type: feed
//!     parameters: { temperature: 25, pressure: 1, flowRate: 100 }
//!   - id: flash
//!     type: flash
//! streams:
//!   - source: feed
//!     target: flash
//! ```
//!
//! A stream is either fully specified (`id`, `sourceId`, `targetId`, ...) or a
//! link naming only `source` and `target`, in which case it is derived from
//! the source unit the way an interactive connection is.

use std::path::Path;

use pf_core::{ChemicalId, NodeId, StreamId};
use pf_graph::{GraphBuilder, GraphError, ProcessGraph};
use pf_model::{Equipment, ProcessStream};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::session::ProcessSession;

/// A stream given only by its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamLink {
    #[serde(default)]
    pub id: Option<StreamId>,
    pub source: NodeId,
    pub target: NodeId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamSpec {
    Full(ProcessStream),
    Link(StreamLink),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flowsheet {
    #[serde(default)]
    pub name: String,
    /// Thermodynamic model id.
    #[serde(default)]
    pub model: Option<String>,
    /// Selected chemical ids.
    #[serde(default)]
    pub chemicals: Vec<ChemicalId>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub streams: Vec<StreamSpec>,
}

/// Load a flowsheet, choosing the parser from the file extension.
pub fn load_flowsheet(path: &Path) -> AppResult<Flowsheet> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FlowsheetRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => Flowsheet::from_yaml_str(&content),
        Some("json") => Flowsheet::from_json_str(&content),
        _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
    }
}

impl Flowsheet {
    pub fn from_yaml_str(s: &str) -> AppResult<Self> {
        serde_yaml::from_str(s)
            .map_err(|e| AppError::FlowsheetParse(format!("Failed to parse flowsheet YAML: {}", e)))
    }

    pub fn from_json_str(s: &str) -> AppResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| AppError::FlowsheetParse(format!("Failed to parse flowsheet JSON: {}", e)))
    }

    /// Snapshot of the file as written: nothing is rejected, so that
    /// [`ProcessGraph::validate`] can report every fault.
    ///
    /// A link whose source is unknown becomes an empty stream.
    pub fn lenient_graph(&self) -> AppResult<ProcessGraph> {
        let nodes = self.equipment.clone();
        let streams = self
            .streams
            .iter()
            .enumerate()
            .map(|(pos, spec)| -> AppResult<ProcessStream> {
                let link = match spec {
                    StreamSpec::Full(stream) => return Ok(stream.clone()),
                    StreamSpec::Link(link) => link,
                };
                let id = link_id(link, pos);
                match nodes.iter().find(|n| n.id == link.source) {
                    Some(source) => Ok(ProcessStream::from_source(
                        id,
                        source,
                        link.target.clone(),
                    )?),
                    None => Ok(ProcessStream::new(
                        id,
                        link.source.clone(),
                        link.target.clone(),
                    )),
                }
            })
            .collect::<AppResult<Vec<_>>>()?;
        Ok(ProcessGraph::from_parts(nodes, streams))
    }

    /// Graph built through the strict builder: the first duplicate id, bad
    /// required parameter or dangling stream is an error.
    pub fn to_graph(&self) -> AppResult<ProcessGraph> {
        let mut builder = GraphBuilder::new();
        for node in &self.equipment {
            builder.add_node(node.clone())?;
        }
        for (pos, spec) in self.streams.iter().enumerate() {
            let stream = match spec {
                StreamSpec::Full(stream) => stream.clone(),
                StreamSpec::Link(link) => {
                    let id = link_id(link, pos);
                    let source =
                        builder
                            .node(&link.source)
                            .ok_or_else(|| GraphError::DanglingStream {
                                stream: id.clone(),
                                endpoint: link.source.clone(),
                            })?;
                    ProcessStream::from_source(id, source, link.target.clone())?
                }
            };
            builder.add_stream(stream)?;
        }
        Ok(builder.build())
    }

    /// Editing session over this flowsheet, with its model and chemical
    /// selection applied.
    pub fn into_session(self) -> AppResult<ProcessSession> {
        let mut session = ProcessSession::from_graph(self.to_graph()?);
        if let Some(model) = &self.model {
            session.set_selected_model(model)?;
        }
        for chemical in &self.chemicals {
            session.chemicals_mut().select(chemical)?;
        }
        Ok(session)
    }
}

/// Declared id, or `stream-<n>` from the 1-based position in the file.
fn link_id(link: &StreamLink, pos: usize) -> StreamId {
    link.id
        .clone()
        .unwrap_or_else(|| StreamId::new(format!("stream-{}", pos + 1)))
}
