//! # Resumen de Métricas
//! src/metrics/summary.rs
//!
//! Deriva utilización de CPU, tiempos de espera y turnaround a partir del
//! estado final de los procesos y del tiempo total simulado.

use crate::process::{Process, Tick};
use serde::Serialize;

/// Estadísticas de un proceso al final de la corrida
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessStats {
    pub id: String,
    pub arrival: Tick,
    pub first_dispatch: Option<Tick>,
    pub completion: Option<Tick>,

    /// Tiempo total en la Ready Queue
    pub waiting_time: u64,

    /// completion - arrival, `None` si no terminó
    pub turnaround_time: Option<u64>,

    /// first_dispatch - arrival
    pub response_time: Option<u64>,

    /// CPU efectivamente ejecutada
    pub cpu_time: u64,
}

impl ProcessStats {
    pub fn from_process(p: &Process) -> Self {
        Self {
            id: p.id().to_string(),
            arrival: p.arrival(),
            first_dispatch: p.first_dispatch(),
            completion: p.completion(),
            waiting_time: p.waiting(),
            turnaround_time: p.turnaround(),
            response_time: p.first_dispatch().map(|d| d.saturating_sub(p.arrival())),
            cpu_time: p.cpu_time(),
        }
    }
}

/// Resumen global de una corrida
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_time: Tick,
    pub cpu_busy_time: u64,

    /// Porcentaje 0-100
    pub cpu_utilization: f64,

    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub processes: Vec<ProcessStats>,
}

impl Summary {
    pub fn compute(processes: &[Process], total_time: Tick, cpu_busy_time: u64) -> Self {
        let stats: Vec<ProcessStats> = processes.iter().map(ProcessStats::from_process).collect();

        let finished: Vec<&ProcessStats> = stats
            .iter()
            .filter(|s| s.turnaround_time.is_some())
            .collect();
        let count = finished.len();

        let total_waiting: u64 = finished.iter().map(|s| s.waiting_time).sum();
        let total_turnaround: u64 = finished.iter().filter_map(|s| s.turnaround_time).sum();

        let avg_waiting = if count > 0 { total_waiting as f64 / count as f64 } else { 0.0 };
        let avg_turnaround = if count > 0 { total_turnaround as f64 / count as f64 } else { 0.0 };

        Self {
            total_time,
            cpu_busy_time,
            cpu_utilization: cpu_utilization(cpu_busy_time, total_time),
            avg_waiting_time: avg_waiting,
            avg_turnaround_time: avg_turnaround,
            processes: stats,
        }
    }

    pub fn process(&self, id: &str) -> Option<&ProcessStats> {
        self.processes.iter().find(|s| s.id == id)
    }
}

/// busy / total * 100, 0 si no pasó tiempo
pub fn cpu_utilization(busy: u64, total: Tick) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (busy as f64 / total as f64) * 100.0
}
