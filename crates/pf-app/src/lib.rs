//! Application layer for processflow.
//!
//! Runs the calculators over a graph snapshot, holds the editing session that
//! recomputes on every change, and loads flowsheet files. Both the CLI and any
//! other front-end go through this crate.

pub mod advisor;
pub mod analysis;
pub mod chemicals;
pub mod error;
pub mod flowsheet;
pub mod session;

// Re-export key types for convenience
pub use advisor::{Recommendation, recommendations};
pub use analysis::{AnalysisResult, analyze, try_analyze};
pub use chemicals::ChemicalLibrary;
pub use error::{AppError, AppResult};
pub use flowsheet::{Flowsheet, StreamLink, StreamSpec, load_flowsheet};
pub use session::{ProcessSession, Snapshot};
