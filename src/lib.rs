//! # Simulador de Planificación de CPU
//! src/lib.rs
//!
//! Simulador de eventos discretos que reproduce la ejecución de un
//! conjunto de procesos (ráfagas alternadas de CPU e IO) bajo FIFO y
//! Round-Robin, y calcula utilización de CPU, tiempos de espera y
//! turnaround.
//!
//! ## Arquitectura
//!
//! - `process`: descriptores y estado de ejecución de cada proceso
//! - `scheduler`: motor por ticks, políticas y colas Ready/IO
//! - `trace`: log cronológico de eventos
//! - `metrics`: resumen de métricas de una corrida
//! - `workload`: cargas de ejemplo, desde JSON o aleatorias
//! - `report`: salida en texto o JSON
//! - `config`: argumentos CLI y variables de entorno
//! - `error`: tipo de error común
//!
//! ## Ejemplo de uso
//!
//! ```
//! use sched_sim::scheduler::{simulate, Policy};
//! use sched_sim::workload;
//!
//! let specs = workload::demo();
//! let fifo = simulate(&specs, Policy::Fifo).unwrap();
//! let rr = simulate(&specs, Policy::round_robin(5).unwrap()).unwrap();
//!
//! assert_eq!(fifo.summary.total_time, 60);
//! assert_eq!(rr.summary.total_time, 60);
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod trace;
pub mod workload;

pub use error::SimError;
