//! # Simulador de Planificación - Entry Point
//! src/main.rs
//!
//! Lee la configuración, arma la carga de trabajo y corre cada política
//! sobre su propia copia de los procesos.

use sched_sim::config::{Config, OutputFormat};
use sched_sim::error::SimError;
use sched_sim::process::ProcessSpec;
use sched_sim::report;
use sched_sim::scheduler::{simulate, Outcome};
use sched_sim::workload;

fn main() {
    let config = Config::new();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    if let Err(e) = run(&config) {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), SimError> {
    config.validate().map_err(SimError::Config)?;

    let specs = load_workload(config)?;
    let policies = config.policies()?;

    let outcomes = policies
        .into_iter()
        .map(|policy| simulate(&specs, policy))
        .collect::<Result<Vec<Outcome>, SimError>>()?;

    match config.format {
        OutputFormat::Json => println!("{}", report::render_json(&outcomes)?),
        OutputFormat::Text => {
            println!("=================================");
            println!("  CPU Scheduling Simulator");
            println!("  Principios de Sistemas Operativos");
            println!("=================================\n");
            config.print_summary();

            for outcome in &outcomes {
                println!("{}", report::render_text(outcome, !config.no_events));
            }

            if outcomes.len() > 1 {
                print!("{}", report::render_comparison(&outcomes));
            }
        }
    }

    Ok(())
}

fn load_workload(config: &Config) -> Result<Vec<ProcessSpec>, SimError> {
    if let Some(path) = &config.input {
        return workload::load(path);
    }

    if let Some(generator) = config.generator() {
        return workload::generate(&generator);
    }

    log::info!("No workload given, using built-in demo");
    Ok(workload::demo())
}
