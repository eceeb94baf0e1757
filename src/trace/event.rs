//! # Eventos de la Simulación
//! src/trace/event.rs
//!
//! Cada transición de estado de un proceso produce un `Event`. El log
//! es de sólo escritura durante la corrida y de sólo lectura después.

use crate::process::{BurstKind, Tick};
use serde::Serialize;
use std::fmt;

/// Tipo de transición registrada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventKind {
    /// Llegó y entró a la Ready Queue
    Admitted,

    /// Llegó sin ráfagas y terminó en el acto
    FinishedOnArrival,

    /// Comenzó un slice de CPU
    CpuStarted { duration: u64 },

    /// Terminó la ráfaga activa
    BurstFinished { kind: BurstKind },

    /// Se agotó el quantum antes de terminar la ráfaga
    QuantumExpired { remaining: u64 },

    /// Pasó de la CPU a la cola de IO
    MovedToIo,

    /// Fue despachado con una ráfaga de IO pendiente
    MovedDirectlyToIo,

    /// Terminó IO y volvió a la Ready Queue
    IoFinished,

    /// Terminó todas sus ráfagas en la CPU
    Finished,

    /// Terminó todas sus ráfagas con un IO
    FinishedAfterIo,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Admitted => write!(f, "created and added to Ready Queue"),
            EventKind::FinishedOnArrival => {
                write!(f, "created with no steps and finished immediately")
            }
            EventKind::CpuStarted { duration } => {
                write!(f, "started CPU step for {} time units", duration)
            }
            EventKind::BurstFinished { kind } => write!(f, "finished {} step", kind),
            EventKind::QuantumExpired { remaining } => {
                write!(f, "quantum expired, remaining time {}", remaining)
            }
            EventKind::MovedToIo => write!(f, "moved to IO queue"),
            EventKind::MovedDirectlyToIo => write!(f, "moved directly to IO queue"),
            EventKind::IoFinished => write!(f, "finished IO and moved to Ready Queue"),
            EventKind::Finished => write!(f, "finished all steps"),
            EventKind::FinishedAfterIo => write!(f, "finished all steps after IO"),
        }
    }
}

/// Registro con marca de tiempo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub tick: Tick,
    pub pid: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Process {} {}", self.tick, self.pid, self.kind)
    }
}

/// Secuencia ordenada de eventos de una corrida
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agrega un evento y lo emite por el logger
    pub fn record(&mut self, tick: Tick, pid: &str, kind: EventKind) {
        let event = Event {
            tick,
            pid: pid.to_string(),
            kind,
        };
        log::debug!("{}", event);
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Eventos de un proceso, en orden de emisión
    pub fn for_process<'a>(&'a self, pid: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |e| e.pid == pid)
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
