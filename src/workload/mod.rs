//! # Cargas de Trabajo
//! src/workload/mod.rs
//!
//! Fuentes de descriptores de procesos:
//! - `demo()`: el par de procesos de ejemplo
//! - `load()`: archivo JSON con un arreglo de `ProcessSpec`
//! - `generate()`: carga aleatoria reproducible a partir de una semilla

use crate::error::SimError;
use crate::process::{Burst, BurstKind, ProcessSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Carga de ejemplo: dos procesos CPU/IO/CPU
pub fn demo() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new(
            "id_First",
            0,
            vec![Burst::cpu(20), Burst::io(20), Burst::cpu(10)],
        ),
        ProcessSpec::new(
            "id_Second",
            10,
            vec![Burst::cpu(10), Burst::io(10), Burst::cpu(10)],
        ),
    ]
}

/// Lee y valida un archivo JSON de procesos
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ProcessSpec>, SimError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let specs: Vec<ProcessSpec> = serde_json::from_reader(reader)?;

    for spec in &specs {
        spec.validate()?;
    }

    log::info!(
        "Loaded {} processes from {}",
        specs.len(),
        path.as_ref().display()
    );
    Ok(specs)
}

/// Parámetros del generador aleatorio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub seed: u64,
    pub max_bursts: usize,
    pub max_duration: u64,
    pub max_arrival: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 5,
            seed: 42,
            max_bursts: 5,
            max_duration: 30,
            max_arrival: 50,
        }
    }
}

/// Genera `count` procesos con ráfagas alternadas CPU/IO
///
/// Cada proceso empieza y termina con CPU, por lo que la cantidad de
/// ráfagas es siempre impar. La misma semilla produce la misma carga.
pub fn generate(config: &GeneratorConfig) -> Result<Vec<ProcessSpec>, SimError> {
    if config.max_bursts == 0 {
        return Err(SimError::Config("max_bursts must be >= 1".to_string()));
    }
    if config.max_duration == 0 {
        return Err(SimError::Config("max_duration must be >= 1".to_string()));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut specs = Vec::with_capacity(config.count);

    for n in 1..=config.count {
        let arrival = rng.gen_range(0..=config.max_arrival);
        let pairs = rng.gen_range(0..=(config.max_bursts - 1) / 2);
        let burst_count = pairs * 2 + 1;

        let bursts = (0..burst_count)
            .map(|i| {
                let kind = if i % 2 == 0 { BurstKind::Cpu } else { BurstKind::Io };
                Burst {
                    kind,
                    duration: rng.gen_range(1..=config.max_duration),
                }
            })
            .collect();

        specs.push(ProcessSpec::new(format!("P{}", n), arrival, bursts));
    }

    log::debug!("Generated {} processes (seed {})", specs.len(), config.seed);
    Ok(specs)
}
