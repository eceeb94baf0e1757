//! # Planificación
//! src/scheduler/mod.rs
//!
//! Este módulo implementa el motor de eventos discretos y las políticas:
//! - `engine`: ciclo por ticks, dueño del reloj, la CPU y las colas
//! - `policy`: FIFO y Round-Robin
//! - `queues`: Ready Queue e IO Queue

pub mod engine;
pub mod policy;
pub mod queues;

pub use engine::{simulate, Engine, Outcome, Slice};
pub use policy::{Policy, DEFAULT_QUANTUM};
pub use queues::{IoEntry, IoQueue, ReadyQueue};
