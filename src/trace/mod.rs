//! # Traza de Eventos
//! src/trace/mod.rs
//!
//! Log cronológico de las transiciones de estado de cada corrida.

pub mod event;

pub use event::{Event, EventKind, EventLog};
