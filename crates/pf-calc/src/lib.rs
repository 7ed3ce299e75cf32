//! pf-calc: steady-state calculators over a process graph.
//!
//! Provides:
//! - Mass and energy balances for every unit
//! - Vapor-liquid equilibrium for distillation, flash and evaporator units
//! - Darcy-Weisbach pressure drop for every stream
//! - Duty and effectiveness for heat exchangers
//! - Per-class efficiency heuristics
//!
//! Each calculator is a pure function of the graph. A unit whose inputs are
//! unusable gets the calculator's fallback record instead of failing the run.
//!
//! # Example
//!
//! ```
//! use pf_calc::calculate_mass_balance;
//! use pf_graph::ProcessGraph;
//! use pf_model::{Equipment, EquipmentType, ProcessStream};
//!
//! let graph = ProcessGraph::from_parts(
//!     vec![
//!         Equipment::new("feed", EquipmentType::Feed),
//!         Equipment::new("r1", EquipmentType::Reactor),
//!     ],
//!     vec![ProcessStream::new("s1", "feed", "r1").with_total_flow(100.0)],
//! );
//!
//! let balance = calculate_mass_balance(&graph);
//! assert_eq!(balance[1].accumulation, 100.0);
//! ```

pub mod common;
pub mod efficiency;
pub mod energy_balance;
pub mod error;
pub mod heat_transfer;
pub mod mass_balance;
pub mod pressure_drop;
pub mod traits;
pub mod vle;

// Re-exports
pub use common::NOMINAL_EFFICIENCY;
pub use efficiency::{estimate_efficiency, try_estimate_efficiency};
pub use energy_balance::{
    EnergyBalance, EnergyBalanceRecord, calculate_energy_balance, stream_enthalpy,
};
pub use error::{CalcError, CalcResult};
pub use heat_transfer::{HeatTransfer, HeatTransferRecord, calculate_heat_transfer};
pub use mass_balance::{ComponentBalance, MassBalance, MassBalanceRecord, calculate_mass_balance};
pub use pressure_drop::{
    PipeAssumptions, PressureDrop, PressureDropRecord, calculate_pressure_drop, friction_factor,
};
pub use traits::{
    NodeCalculation, Outcome, StreamCalculation, evaluate_nodes, evaluate_streams, run_nodes,
    run_streams,
};
pub use vle::{Antoine, Vle, VleAssumptions, VleComponentResult, VleRecord, calculate_vle};
