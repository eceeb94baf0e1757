//! # Errores del Simulador
//! src/error.rs
//!
//! Define el tipo de error común a toda la biblioteca. Las entradas
//! inválidas se rechazan antes de arrancar la simulación; durante la
//! corrida sólo pueden aparecer violaciones de invariantes (defectos de
//! lógica, no condiciones recuperables).

use thiserror::Error;

/// Errores que pueden ocurrir al construir o ejecutar una simulación
#[derive(Debug, Error)]
pub enum SimError {
    /// Un proceso sin identificador
    #[error("Process id must not be empty")]
    EmptyId,

    /// Una ráfaga con duración cero
    #[error("Process '{id}' has a burst with non-positive duration at position {position}")]
    InvalidBurst { id: String, position: usize },

    /// Dos procesos con el mismo identificador
    #[error("Duplicate process id '{0}'")]
    DuplicateId(String),

    /// Llegada más ráfagas de un proceso no entran en un `u64`
    #[error("Process '{0}' timeline overflows the tick counter")]
    TimeOverflow(String),

    /// La carga completa excede el rango del reloj
    #[error("Workload is too large for the tick counter")]
    WorkloadTooLarge,

    /// Quantum de Round-Robin inválido
    #[error("Quantum must be > 0 (got {0})")]
    InvalidQuantum(u64),

    /// Un proceso entró dos veces a la Ready Queue sin ser despachado
    #[error("Process '{0}' entered the Ready Queue twice without being dispatched")]
    AlreadyReady(String),

    /// El reloj avanzó sin que ninguna cola progresara
    #[error("Simulation made no progress by tick {0}")]
    Stalled(u64),

    /// Error de lectura de archivos
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error de (de)serialización JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuración rechazada por `Config::validate`
    #[error("Configuration error: {0}")]
    Config(String),
}
