//! # Descriptores de Procesos
//! src/process/types.rs
//!
//! Tipos inmutables que describen un proceso antes de la simulación:
//! su identificador, su tiempo de llegada y la secuencia de ráfagas.

use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unidad del reloj virtual
pub type Tick = u64;

/// Tipo de ráfaga
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurstKind {
    /// Uso de CPU
    Cpu,

    /// Espera de entrada/salida
    Io,
}

impl BurstKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurstKind::Cpu => "cpu",
            BurstKind::Io => "io",
        }
    }
}

impl fmt::Display for BurstKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Una ráfaga de CPU o IO con duración fija
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burst {
    pub kind: BurstKind,
    pub duration: u64,
}

impl Burst {
    pub fn cpu(duration: u64) -> Self {
        Self { kind: BurstKind::Cpu, duration }
    }

    pub fn io(duration: u64) -> Self {
        Self { kind: BurstKind::Io, duration }
    }
}

/// Descriptor estático de un proceso
///
/// # Ejemplo
/// ```
/// use sched_sim::process::{Burst, ProcessSpec};
///
/// let spec = ProcessSpec::new("P1", 0, vec![Burst::cpu(5), Burst::io(3)]);
/// assert!(spec.validate().is_ok());
/// assert_eq!(spec.total_duration(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Identificador único dentro de la corrida
    pub id: String,

    /// Tick en el que el proceso puede entrar a la Ready Queue
    #[serde(default)]
    pub arrival: Tick,

    /// Ráfagas en orden de ejecución (puede estar vacía)
    #[serde(default)]
    pub bursts: Vec<Burst>,
}

impl ProcessSpec {
    pub fn new(id: impl Into<String>, arrival: Tick, bursts: Vec<Burst>) -> Self {
        Self {
            id: id.into(),
            arrival,
            bursts,
        }
    }

    /// Rechaza ids vacíos y ráfagas de duración cero
    pub fn validate(&self) -> Result<(), SimError> {
        if self.id.is_empty() {
            return Err(SimError::EmptyId);
        }

        if let Some(position) = self.bursts.iter().position(|b| b.duration == 0) {
            return Err(SimError::InvalidBurst {
                id: self.id.clone(),
                position,
            });
        }

        // La última ráfaga debe poder terminar dentro del rango del reloj
        let end = self
            .bursts
            .iter()
            .try_fold(self.arrival, |acc, b| acc.checked_add(b.duration));
        if end.is_none() {
            return Err(SimError::TimeOverflow(self.id.clone()));
        }

        Ok(())
    }

    /// Suma de las duraciones de todas las ráfagas (saturada en `u64::MAX`)
    pub fn total_duration(&self) -> u64 {
        self.bursts
            .iter()
            .fold(0u64, |acc, b| acc.saturating_add(b.duration))
    }

    /// Suma de las duraciones de las ráfagas de un tipo
    pub fn duration_of(&self, kind: BurstKind) -> u64 {
        self.bursts
            .iter()
            .filter(|b| b.kind == kind)
            .fold(0u64, |acc, b| acc.saturating_add(b.duration))
    }
}
