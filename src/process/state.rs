//! # Estado de Ejecución de un Proceso
//! src/process/state.rs
//!
//! Registro mutable que el motor de planificación posee en exclusiva.
//! No conoce las colas: sólo expone consultas y el avance de un paso.

use crate::error::SimError;
use crate::process::types::{BurstKind, ProcessSpec, Tick};

/// Resultado de avanzar la ráfaga activa
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// La ráfaga terminó y el índice pasó a la siguiente
    Completed,

    /// Queda tiempo en la ráfaga activa
    Pending,
}

/// Marca de residencia en la Ready Queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingSince {
    /// Fuera de la Ready Queue
    Idle,

    /// En la Ready Queue desde el tick indicado
    Since(Tick),
}

/// Proceso en ejecución dentro de una corrida
#[derive(Debug, Clone)]
pub struct Process {
    spec: ProcessSpec,
    index: usize,
    remaining: u64,
    waiting: u64,
    pending: PendingSince,
    first_dispatch: Option<Tick>,
    completion: Option<Tick>,
    cpu_time: u64,
}

impl Process {
    pub fn new(spec: ProcessSpec) -> Self {
        let remaining = spec.bursts.first().map(|b| b.duration).unwrap_or(0);
        Self {
            spec,
            index: 0,
            remaining,
            waiting: 0,
            pending: PendingSince::Idle,
            first_dispatch: None,
            completion: None,
            cpu_time: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn arrival(&self) -> Tick {
        self.spec.arrival
    }

    pub fn spec(&self) -> &ProcessSpec {
        &self.spec
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn waiting(&self) -> u64 {
        self.waiting
    }

    pub fn pending(&self) -> PendingSince {
        self.pending
    }

    pub fn first_dispatch(&self) -> Option<Tick> {
        self.first_dispatch
    }

    pub fn completion(&self) -> Option<Tick> {
        self.completion
    }

    pub fn cpu_time(&self) -> u64 {
        self.cpu_time
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.spec.bursts.len()
    }

    /// Tipo de la ráfaga activa, `None` si ya terminó
    pub fn current_kind(&self) -> Option<BurstKind> {
        self.spec.bursts.get(self.index).map(|b| b.kind)
    }

    /// Duración completa de la ráfaga activa (no lo que resta), 0 si terminó
    pub fn current_duration(&self) -> u64 {
        self.spec.bursts.get(self.index).map(|b| b.duration).unwrap_or(0)
    }

    /// Consume `time_used` de la ráfaga activa
    ///
    /// El motor nunca pide más que `remaining()`. Sobre un proceso
    /// terminado no hace nada.
    pub fn advance(&mut self, time_used: u64) -> StepOutcome {
        if self.is_finished() {
            return StepOutcome::Completed;
        }

        debug_assert!(time_used <= self.remaining);
        let left = self.remaining.saturating_sub(time_used);

        if left == 0 {
            self.index += 1;
            self.remaining = self.current_duration();
            StepOutcome::Completed
        } else {
            self.remaining = left;
            StepOutcome::Pending
        }
    }

    /// Registra la entrada a la Ready Queue
    pub fn mark_ready(&mut self, now: Tick) -> Result<(), SimError> {
        match self.pending {
            PendingSince::Idle => {
                self.pending = PendingSince::Since(now);
                Ok(())
            }
            PendingSince::Since(_) => Err(SimError::AlreadyReady(self.spec.id.clone())),
        }
    }

    /// Registra la salida de la Ready Queue y acumula la espera
    pub fn leave_ready(&mut self, now: Tick) {
        if let PendingSince::Since(since) = self.pending {
            self.waiting += now.saturating_sub(since);
        }
        self.pending = PendingSince::Idle;

        if self.first_dispatch.is_none() {
            self.first_dispatch = Some(now);
        }
    }

    pub(crate) fn add_cpu_time(&mut self, slice: u64) {
        self.cpu_time += slice;
    }

    pub(crate) fn finish(&mut self, now: Tick) {
        if self.completion.is_none() {
            self.completion = Some(now);
        }
    }

    /// completion - arrival, `None` si nunca terminó
    pub fn turnaround(&self) -> Option<u64> {
        self.completion.map(|c| c.saturating_sub(self.spec.arrival))
    }
}
