//! # Configuración del Simulador
//! src/config.rs
//!
//! Configuración por argumentos CLI y variables de entorno.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./sched_sim --policy rr --quantum 5
//! ./sched_sim --input workload.json --format json
//! ./sched_sim --random 20 --seed 7 --max-duration 15
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! SCHED_QUANTUM=10 SCHED_LOG=debug ./sched_sim
//! ```

use crate::error::SimError;
use crate::scheduler::{Policy, DEFAULT_QUANTUM};
use crate::workload::GeneratorConfig;
use clap::{Parser, ValueEnum};

/// Políticas a ejecutar
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyChoice {
    Fifo,
    Rr,
    Both,
}

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuración del simulador de planificación
#[derive(Debug, Clone, Parser)]
#[command(name = "sched_sim")]
#[command(about = "Simulador de planificación de CPU (FIFO y Round-Robin)")]
#[command(version = "0.1.0")]
pub struct Config {
    // === Carga de trabajo ===

    /// Archivo JSON con los procesos (arreglo de {id, arrival, bursts})
    #[arg(long, env = "SCHED_INPUT")]
    pub input: Option<String>,

    /// Generar N procesos aleatorios en vez de leer un archivo
    #[arg(long, env = "SCHED_RANDOM")]
    pub random: Option<usize>,

    /// Semilla del generador aleatorio
    #[arg(long, default_value = "42", env = "SCHED_SEED")]
    pub seed: u64,

    /// Máximo de ráfagas por proceso generado
    #[arg(long = "max-bursts", default_value = "5", env = "SCHED_MAX_BURSTS")]
    pub max_bursts: usize,

    /// Duración máxima de una ráfaga generada
    #[arg(long = "max-duration", default_value = "30", env = "SCHED_MAX_DURATION")]
    pub max_duration: u64,

    /// Tick de llegada máximo de un proceso generado
    #[arg(long = "max-arrival", default_value = "50", env = "SCHED_MAX_ARRIVAL")]
    pub max_arrival: u64,

    // === Planificación ===

    /// Política a simular
    #[arg(short, long, value_enum, default_value = "both", env = "SCHED_POLICY")]
    pub policy: PolicyChoice,

    /// Quantum de Round-Robin
    #[arg(short, long, default_value = "30", env = "SCHED_QUANTUM")]
    pub quantum: u64,

    // === Salida ===

    /// Formato de salida
    #[arg(short, long, value_enum, default_value = "text", env = "SCHED_FORMAT")]
    pub format: OutputFormat,

    /// Omitir el log de eventos en la salida de texto
    #[arg(long = "no-events", env = "SCHED_NO_EVENTS")]
    pub no_events: bool,

    /// Filtro de env_logger (error, warn, info, debug, trace)
    #[arg(long = "log-level", default_value = "warn", env = "SCHED_LOG")]
    pub log_level: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI
    pub fn new() -> Self {
        Config::parse()
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.quantum == 0 {
            return Err("Quantum must be > 0".to_string());
        }

        if self.input.is_some() && self.random.is_some() {
            return Err("Input file and random generation are mutually exclusive".to_string());
        }

        // Sólo importan si se genera la carga
        if self.random.is_some() {
            if self.max_bursts == 0 {
                return Err("Max bursts must be >= 1".to_string());
            }
            if self.max_duration == 0 {
                return Err("Max duration must be >= 1".to_string());
            }
        }

        Ok(())
    }

    /// Políticas a ejecutar, en orden
    pub fn policies(&self) -> Result<Vec<Policy>, SimError> {
        let policies = match self.policy {
            PolicyChoice::Fifo => vec![Policy::Fifo],
            PolicyChoice::Rr => vec![Policy::round_robin(self.quantum)?],
            PolicyChoice::Both => vec![Policy::Fifo, Policy::round_robin(self.quantum)?],
        };
        Ok(policies)
    }

    /// Parámetros del generador, si se pidió carga aleatoria
    pub fn generator(&self) -> Option<GeneratorConfig> {
        self.random.map(|count| GeneratorConfig {
            count,
            seed: self.seed,
            max_bursts: self.max_bursts,
            max_duration: self.max_duration,
            max_arrival: self.max_arrival,
        })
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("⚙️  Configuración:");
        match (&self.input, self.random) {
            (Some(path), _) => println!("   Workload:     {}", path),
            (None, Some(count)) => println!(
                "   Workload:     {} random processes (seed {})",
                count, self.seed
            ),
            (None, None) => println!("   Workload:     built-in demo"),
        }
        println!("   Policy:       {:?}", self.policy);
        println!("   Quantum:      {}", self.quantum);
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            input: None,
            random: None,
            seed: 42,
            max_bursts: 5,
            max_duration: 30,
            max_arrival: 50,
            policy: PolicyChoice::Both,
            quantum: DEFAULT_QUANTUM,
            format: OutputFormat::Text,
            no_events: false,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.quantum, 30);
        assert_eq!(config.policy, PolicyChoice::Both);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.input.is_none());
        assert!(config.random.is_none());
    }

    #[test]
    fn test_validate_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    // ==================== Parsing ====================

    #[test]
    fn test_parse_defaults_match_default() {
        let parsed = Config::try_parse_from(["sched_sim"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.quantum, default.quantum);
        assert_eq!(parsed.seed, default.seed);
        assert_eq!(parsed.policy, default.policy);
        assert_eq!(parsed.format, default.format);
        assert_eq!(parsed.log_level, default.log_level);
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "sched_sim", "--policy", "rr", "-q", "5", "--format", "json", "--no-events",
        ])
        .unwrap();
        assert_eq!(config.policy, PolicyChoice::Rr);
        assert_eq!(config.quantum, 5);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.no_events);
    }

    #[test]
    fn test_parse_invalid_policy() {
        assert!(Config::try_parse_from(["sched_sim", "--policy", "sjf"]).is_err());
    }

    // ==================== Validación ====================

    #[test]
    fn test_validate_zero_quantum() {
        let mut config = Config::default();
        config.quantum = 0;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Quantum"));
    }

    #[test]
    fn test_validate_input_and_random() {
        let mut config = Config::default();
        config.input = Some("workload.json".to_string());
        config.random = Some(3);
        assert!(config.validate().unwrap_err().contains("mutually exclusive"));
    }

    #[test]
    fn test_validate_generator_bounds() {
        let mut config = Config::default();
        config.random = Some(3);
        config.max_bursts = 0;
        assert!(config.validate().unwrap_err().contains("Max bursts"));

        config.max_bursts = 3;
        config.max_duration = 0;
        assert!(config.validate().unwrap_err().contains("Max duration"));
    }

    #[test]
    fn test_generator_bounds_ignored_without_random() {
        let mut config = Config::default();
        config.max_bursts = 0;
        assert!(config.validate().is_ok());
    }

    // ==================== Políticas ====================

    #[test]
    fn test_policies_both() {
        let mut config = Config::default();
        config.quantum = 5;
        assert_eq!(
            config.policies().unwrap(),
            vec![Policy::Fifo, Policy::RoundRobin { quantum: 5 }]
        );
    }

    #[test]
    fn test_policies_single() {
        let mut config = Config::default();
        config.policy = PolicyChoice::Fifo;
        assert_eq!(config.policies().unwrap(), vec![Policy::Fifo]);

        config.policy = PolicyChoice::Rr;
        config.quantum = 0;
        assert!(config.policies().is_err());
    }

    #[test]
    fn test_generator_config() {
        let mut config = Config::default();
        assert!(config.generator().is_none());

        config.random = Some(10);
        config.seed = 9;
        let generator = config.generator().unwrap();
        assert_eq!(generator.count, 10);
        assert_eq!(generator.seed, 9);
        assert_eq!(generator.max_duration, 30);
    }

    #[test]
    fn test_config_print_summary() {
        let config = Config::default();
        // Should not panic
        config.print_summary();
    }
}
