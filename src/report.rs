//! # Reportes
//! src/report.rs
//!
//! Presentación de los resultados: log de eventos y resumen en texto, o
//! todo junto en JSON.

use crate::error::SimError;
use crate::metrics::Summary;
use crate::scheduler::Outcome;
use std::fmt::Write;

/// Texto de una corrida: eventos (opcional) y resumen
pub fn render_text(outcome: &Outcome, show_events: bool) -> String {
    let label = outcome.policy.label();
    let mut out = String::new();

    if show_events {
        let _ = writeln!(out, "{} Simulation Events:", label);
        for event in &outcome.events {
            let _ = writeln!(out, "{}", event);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "--- {} Summary ---", label);
    if let Some(quantum) = outcome.policy.quantum() {
        let _ = writeln!(out, "Quantum: {}", quantum);
    }
    out.push_str(&render_summary(&outcome.summary));
    out
}

/// Líneas del resumen de métricas
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total simulation time: {}", summary.total_time);
    let _ = writeln!(out, "Total CPU busy time: {}", summary.cpu_busy_time);
    let _ = writeln!(out, "CPU Utilization: {:.2}%", summary.cpu_utilization);

    for p in &summary.processes {
        let turnaround = p
            .turnaround_time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "None".to_string());
        let _ = writeln!(
            out,
            "Process {}: Waiting time in ready queue = {}, Turnaround time = {}",
            p.id, p.waiting_time, turnaround
        );
    }

    let _ = writeln!(
        out,
        "Average waiting time: {:.2}, Average turnaround time: {:.2}",
        summary.avg_waiting_time, summary.avg_turnaround_time
    );
    out
}

/// Tabla comparativa entre corridas
pub fn render_comparison(outcomes: &[Outcome]) -> String {
    let mut out = String::new();
    out.push_str("┌──────────────────────────┬──────────┬──────────┬──────────┬──────────┐\n");
    out.push_str("│ Policy                   │ Total    │ CPU %    │ Avg wait │ Avg TAT  │\n");
    out.push_str("├──────────────────────────┼──────────┼──────────┼──────────┼──────────┤\n");
    for outcome in outcomes {
        let s = &outcome.summary;
        let _ = writeln!(
            out,
            "│ {:<24} │ {:>8} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
            outcome.policy.to_string(),
            s.total_time,
            s.cpu_utilization,
            s.avg_waiting_time,
            s.avg_turnaround_time
        );
    }
    out.push_str("└──────────────────────────┴──────────┴──────────┴──────────┴──────────┘\n");
    out
}

/// Todas las corridas como un arreglo JSON
pub fn render_json(outcomes: &[Outcome]) -> Result<String, SimError> {
    Ok(serde_json::to_string_pretty(outcomes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{Burst, ProcessSpec};
    use crate::scheduler::{simulate, Policy};
    use crate::workload;

    #[test]
    fn test_text_report() {
        let outcome = simulate(&workload::demo(), Policy::Fifo).unwrap();
        let text = render_text(&outcome, true);

        assert!(text.starts_with("FIFO Simulation Events:\n"));
        assert!(text.contains("[0] Process id_First started CPU step for 20 time units"));
        assert!(text.contains("--- FIFO Summary ---"));
        assert!(text.contains("Total simulation time: 60"));
        assert!(text.contains("CPU Utilization: 83.33%"));
        assert!(text.contains(
            "Process id_Second: Waiting time in ready queue = 20, Turnaround time = 50"
        ));
    }

    #[test]
    fn test_text_report_without_events() {
        let outcome = simulate(&workload::demo(), Policy::RoundRobin { quantum: 30 }).unwrap();
        let text = render_text(&outcome, false);
        assert!(!text.contains("Simulation Events"));
        assert!(text.starts_with("--- Round-Robin Summary ---\nQuantum: 30\n"));
    }

    #[test]
    fn test_unfinished_turnaround_rendered_as_none() {
        let outcome = simulate(&[ProcessSpec::new("A", 0, vec![Burst::cpu(1)])], Policy::Fifo)
            .unwrap();
        let mut summary = outcome.summary.clone();
        summary.processes[0].turnaround_time = None;
        assert!(render_summary(&summary).contains("Turnaround time = None"));
    }

    #[test]
    fn test_comparison_table() {
        let outcomes = vec![
            simulate(&workload::demo(), Policy::Fifo).unwrap(),
            simulate(&workload::demo(), Policy::RoundRobin { quantum: 5 }).unwrap(),
        ];
        let table = render_comparison(&outcomes);
        assert!(table.contains("FIFO"));
        assert!(table.contains("Round-Robin (quantum 5)"));
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_json_report() {
        let outcomes = vec![simulate(&workload::demo(), Policy::Fifo).unwrap()];
        let json = render_json(&outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["policy"]["name"], "fifo");
        assert_eq!(value[0]["summary"]["total_time"], 60);
        assert_eq!(value[0]["events"][0]["event"], "admitted");
        assert!(value[0].get("processes").is_none());
    }
}
