//! # Métricas
//! src/metrics/mod.rs
//!
//! Agregación de resultados de una corrida:
//! - Utilización de CPU
//! - Tiempo de espera y turnaround por proceso
//! - Promedios

pub mod summary;

pub use summary::{cpu_utilization, ProcessStats, Summary};
