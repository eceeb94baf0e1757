//! # Políticas de Planificación
//! src/scheduler/policy.rs
//!
//! Ambas políticas comparten el mismo ciclo del motor; sólo difieren en
//! el largo del slice de CPU que se concede al despachar.

use crate::error::SimError;
use serde::Serialize;
use std::fmt;

/// Quantum por defecto de Round-Robin
pub const DEFAULT_QUANTUM: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Policy {
    /// Cada ráfaga de CPU corre hasta terminar
    Fifo,

    /// Preemptiva con quantum fijo
    RoundRobin { quantum: u64 },
}

impl Policy {
    /// Construye Round-Robin validando el quantum
    ///
    /// # Ejemplo
    /// ```
    /// use sched_sim::scheduler::Policy;
    ///
    /// assert!(Policy::round_robin(5).is_ok());
    /// assert!(Policy::round_robin(0).is_err());
    /// ```
    pub fn round_robin(quantum: u64) -> Result<Self, SimError> {
        if quantum == 0 {
            return Err(SimError::InvalidQuantum(quantum));
        }
        Ok(Policy::RoundRobin { quantum })
    }

    /// Largo del slice para una ráfaga con `remaining` unidades por delante
    pub fn slice_len(&self, remaining: u64) -> u64 {
        match self {
            Policy::Fifo => remaining,
            Policy::RoundRobin { quantum } => remaining.min(*quantum),
        }
    }

    pub fn quantum(&self) -> Option<u64> {
        match self {
            Policy::Fifo => None,
            Policy::RoundRobin { quantum } => Some(*quantum),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::RoundRobin { .. } => "Round-Robin",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Fifo => f.write_str("FIFO"),
            Policy::RoundRobin { quantum } => write!(f, "Round-Robin (quantum {})", quantum),
        }
    }
}
