//! # Procesos
//! src/process/mod.rs
//!
//! - `types`: descriptores inmutables (`ProcessSpec`, `Burst`)
//! - `state`: estado de ejecución que muta el motor (`Process`)

pub mod state;
pub mod types;

pub use state::{PendingSince, Process, StepOutcome};
pub use types::{Burst, BurstKind, ProcessSpec, Tick};
