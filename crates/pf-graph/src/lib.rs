//! pf-graph: the equipment/stream graph the calculators read.
//!
//! Provides:
//! - `ProcessGraph`: an immutable snapshot of units and streams with an incidence index
//! - `GraphBuilder`: strict incremental construction used by editing sessions
//! - Structural validation (duplicate ids, dangling streams)
//!
//! # Example
//!
//! ```
//! use pf_graph::GraphBuilder;
//! use pf_model::{Equipment, EquipmentType, ProcessStream};
//!
//! let mut builder = GraphBuilder::new();
//! builder.add_node(Equipment::new("feed", EquipmentType::Feed)).unwrap();
//! builder.add_node(Equipment::new("r1", EquipmentType::Cstr)).unwrap();
//! builder
//!     .add_stream(ProcessStream::new("s1", "feed", "r1").with_total_flow(100.0))
//!     .unwrap();
//! let graph = builder.build();
//!
//! assert_eq!(graph.nodes().len(), 2);
//! assert_eq!(graph.incoming(&"r1".into()).count(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::ProcessGraph;
pub use indexing::Incidence;
pub use validate::ValidationReport;
