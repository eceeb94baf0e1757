//! # Motor de Simulación
//! src/scheduler/engine.rs
//!
//! Ciclo de eventos discretos sobre un reloj virtual entero. En cada tick,
//! en este orden fijo:
//!
//! 1. Admisión de llegadas a la Ready Queue
//! 2. Fin de slice de CPU (ráfaga terminada o quantum agotado)
//! 3. Vaciado de IOs terminados
//! 4. Despacho si la CPU está libre
//! 5. Chequeo de terminación
//!
//! FIFO y Round-Robin usan este mismo ciclo; la `Policy` sólo decide el
//! largo de cada slice. Así el orden de desempate no puede divergir entre
//! políticas.

use crate::error::SimError;
use crate::metrics::Summary;
use crate::process::{BurstKind, Process, ProcessSpec, StepOutcome, Tick};
use crate::scheduler::policy::Policy;
use crate::scheduler::queues::{IoQueue, ReadyQueue};
use crate::trace::{EventKind, EventLog};
use serde::Serialize;
use std::collections::HashSet;

/// Slice de CPU en curso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub proc_idx: usize,
    pub len: u64,
    pub ends_at: Tick,
}

/// Resultado de una corrida completa
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    pub policy: Policy,
    pub events: EventLog,
    pub summary: Summary,

    /// Estado final de cada proceso, en orden de llegada
    #[serde(skip)]
    pub processes: Vec<Process>,
}

/// Motor de planificación
///
/// Posee en exclusiva los procesos, las dos colas y la CPU. Las colas
/// guardan índices a `processes`.
pub struct Engine {
    policy: Policy,
    processes: Vec<Process>,
    next_arrival: usize,
    ready: ReadyQueue,
    io: IoQueue,
    cpu: Option<Slice>,
    clock: Tick,
    cpu_busy_time: u64,
    events: EventLog,
    tick_limit: Tick,
    done: bool,
}

impl Engine {
    /// Valida los descriptores y prepara una corrida con estado propio
    ///
    /// Los procesos se ordenan por llegada; los empates conservan el
    /// orden de entrada.
    pub fn new(specs: &[ProcessSpec], policy: Policy) -> Result<Self, SimError> {
        if let Policy::RoundRobin { quantum } = policy {
            if quantum == 0 {
                return Err(SimError::InvalidQuantum(quantum));
            }
        }

        let mut seen = HashSet::new();
        for spec in specs {
            spec.validate()?;
            if !seen.insert(spec.id.as_str()) {
                return Err(SimError::DuplicateId(spec.id.clone()));
            }
        }

        let mut processes: Vec<Process> = specs.iter().cloned().map(Process::new).collect();
        processes.sort_by_key(|p| p.arrival());

        Ok(Self {
            policy,
            tick_limit: tick_limit(specs).ok_or(SimError::WorkloadTooLarge)?,
            processes,
            next_arrival: 0,
            ready: ReadyQueue::new(),
            io: IoQueue::new(),
            cpu: None,
            clock: 0,
            cpu_busy_time: 0,
            events: EventLog::new(),
            done: false,
        })
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    pub fn cpu_slot(&self) -> Option<Slice> {
        self.cpu
    }

    pub fn cpu_busy_time(&self) -> u64 {
        self.cpu_busy_time
    }

    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    pub fn io_len(&self) -> usize {
        self.io.len()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Ejecuta un tick completo
    ///
    /// Retorna `true` cuando la corrida terminó; en ese caso el reloj
    /// queda en el tiempo total simulado y llamadas posteriores no hacen
    /// nada.
    pub fn step(&mut self) -> Result<bool, SimError> {
        if self.done {
            return Ok(true);
        }

        self.admit_arrivals()?;
        self.resolve_cpu()?;
        self.drain_io()?;
        self.dispatch();

        log::trace!(
            "tick {}: ready={} io={} cpu={:?}",
            self.clock,
            self.ready.len(),
            self.io.len(),
            self.cpu.map(|s| s.proc_idx)
        );

        if self.all_work_done() {
            self.done = true;
            return Ok(true);
        }

        if self.clock >= self.tick_limit {
            return Err(SimError::Stalled(self.clock));
        }

        self.clock += 1;
        Ok(false)
    }

    /// Corre hasta agotar todo el trabajo
    pub fn run(mut self) -> Result<Outcome, SimError> {
        log::info!(
            "Starting {} simulation with {} processes",
            self.policy,
            self.processes.len()
        );

        while !self.step()? {}

        log::info!(
            "{} simulation finished at tick {} (CPU busy {})",
            self.policy,
            self.clock,
            self.cpu_busy_time
        );

        Ok(self.into_outcome())
    }

    fn into_outcome(self) -> Outcome {
        let summary = Summary::compute(&self.processes, self.clock, self.cpu_busy_time);
        Outcome {
            policy: self.policy,
            events: self.events,
            summary,
            processes: self.processes,
        }
    }

    fn all_work_done(&self) -> bool {
        self.cpu.is_none()
            && self.ready.is_empty()
            && self.io.is_empty()
            && self.next_arrival >= self.processes.len()
    }

    // ==================== Fases del tick ====================

    fn admit_arrivals(&mut self) -> Result<(), SimError> {
        while let Some(p) = self.processes.get_mut(self.next_arrival) {
            if p.arrival() > self.clock {
                break;
            }

            let idx = self.next_arrival;
            self.next_arrival += 1;

            if p.is_finished() {
                p.finish(self.clock);
                self.events.record(self.clock, p.id(), EventKind::FinishedOnArrival);
                continue;
            }

            p.mark_ready(self.clock)?;
            self.events.record(self.clock, p.id(), EventKind::Admitted);
            self.ready.push(idx);
        }
        Ok(())
    }

    fn resolve_cpu(&mut self) -> Result<(), SimError> {
        let slice = match self.cpu {
            Some(slice) if slice.ends_at == self.clock => slice,
            _ => return Ok(()),
        };
        self.cpu = None;

        let p = &mut self.processes[slice.proc_idx];
        match p.advance(slice.len) {
            StepOutcome::Completed => {
                self.events.record(
                    self.clock,
                    p.id(),
                    EventKind::BurstFinished { kind: BurstKind::Cpu },
                );
                self.route_after_cpu(slice.proc_idx)
            }
            StepOutcome::Pending => {
                let remaining = p.remaining();
                self.events.record(
                    self.clock,
                    p.id(),
                    EventKind::QuantumExpired { remaining },
                );
                // Vuelve al final de la cola sin nueva marca de espera
                self.ready.push(slice.proc_idx);
                Ok(())
            }
        }
    }

    /// Destino de un proceso cuya ráfaga de CPU acaba de terminar
    fn route_after_cpu(&mut self, idx: usize) -> Result<(), SimError> {
        let now = self.clock;
        let p = &mut self.processes[idx];

        if p.is_finished() {
            p.finish(now);
            self.events.record(now, p.id(), EventKind::Finished);
            return Ok(());
        }

        match p.current_kind() {
            Some(BurstKind::Io) => {
                self.io.push(idx, now + p.current_duration());
                self.events.record(now, p.id(), EventKind::MovedToIo);
            }
            _ => {
                // CPU seguida de CPU: vuelve a la cola en vez de seguir corriendo
                p.mark_ready(now)?;
                self.ready.push(idx);
            }
        }
        Ok(())
    }

    fn drain_io(&mut self) -> Result<(), SimError> {
        let now = self.clock;

        for entry in self.io.drain_completed(now) {
            let p = &mut self.processes[entry.proc_idx];
            let remaining = p.remaining();
            p.advance(remaining);

            if p.is_finished() {
                p.finish(now);
                self.events.record(now, p.id(), EventKind::FinishedAfterIo);
            } else {
                p.mark_ready(now)?;
                self.ready.push(entry.proc_idx);
                self.events.record(now, p.id(), EventKind::IoFinished);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self) {
        if self.cpu.is_some() {
            return;
        }
        let Some(idx) = self.ready.pop() else {
            return;
        };

        let now = self.clock;
        let p = &mut self.processes[idx];
        p.leave_ready(now);

        match p.current_kind() {
            Some(BurstKind::Cpu) => {
                let len = self.policy.slice_len(p.remaining());
                p.add_cpu_time(len);
                self.cpu_busy_time += len;
                self.cpu = Some(Slice {
                    proc_idx: idx,
                    len,
                    ends_at: now + len,
                });
                self.events
                    .record(now, p.id(), EventKind::CpuStarted { duration: len });
            }
            Some(BurstKind::Io) => {
                self.io.push(idx, now + p.current_duration());
                self.events.record(now, p.id(), EventKind::MovedDirectlyToIo);
            }
            None => {
                // Nunca se encola un proceso terminado
                log::warn!("Process {} dispatched with no steps left", p.id());
                p.finish(now);
                self.events.record(now, p.id(), EventKind::Finished);
            }
        }
    }
}

/// Cota de ticks a partir de la cual la corrida se considera trabada
///
/// Cada tick con trabajo pendiente consume una unidad de alguna ráfaga,
/// despacha, o espera una llegada. Todo tick alcanzable queda por debajo
/// de la cota, así que si ésta entra en un `u64` el reloj no desborda.
/// `None` si no entra.
fn tick_limit(specs: &[ProcessSpec]) -> Option<Tick> {
    let max_arrival = specs.iter().map(|s| s.arrival).max().unwrap_or(0);

    let mut work: u64 = 0;
    for spec in specs {
        for burst in &spec.bursts {
            work = work.checked_add(burst.duration)?.checked_add(1)?;
        }
    }

    max_arrival.checked_add(work.checked_mul(2)?)?.checked_add(1)
}

/// Corre una simulación completa sobre una copia propia de `specs`
///
/// # Ejemplo
/// ```
/// use sched_sim::process::{Burst, ProcessSpec};
/// use sched_sim::scheduler::{simulate, Policy};
///
/// let specs = vec![ProcessSpec::new("A", 0, vec![Burst::cpu(3)])];
/// let outcome = simulate(&specs, Policy::Fifo).unwrap();
/// assert_eq!(outcome.summary.total_time, 3);
/// ```
pub fn simulate(specs: &[ProcessSpec], policy: Policy) -> Result<Outcome, SimError> {
    Engine::new(specs, policy)?.run()
}
