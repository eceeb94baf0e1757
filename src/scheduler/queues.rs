//! # Colas Ready e IO
//! src/scheduler/queues.rs
//!
//! Las colas guardan índices al vector de procesos del motor, nunca los
//! procesos mismos. Ambas son FIFO estrictas.

use crate::process::Tick;
use std::collections::VecDeque;

/// Cola de procesos esperando CPU
#[derive(Debug, Default)]
pub struct ReadyQueue {
    queue: VecDeque<usize>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, proc_idx: usize) {
        self.queue.push_back(proc_idx);
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Proceso esperando que termine su ráfaga de IO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IoEntry {
    pub proc_idx: usize,
    pub done_at: Tick,
}

/// Cola de procesos en IO
///
/// Las ráfagas de IO corren en paralelo entre sí: varias pueden terminar
/// en el mismo tick.
#[derive(Debug, Default)]
pub struct IoQueue {
    entries: Vec<IoEntry>,
}

impl IoQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, proc_idx: usize, done_at: Tick) {
        self.entries.push(IoEntry { proc_idx, done_at });
    }

    /// Separa las entradas que terminan en o antes de `now`
    ///
    /// Conserva el orden de inserción en ambas mitades.
    pub fn drain_completed(&mut self, now: Tick) -> Vec<IoEntry> {
        let (done, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.done_at <= now);
        self.entries = pending;
        done
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_fifo() {
        let mut q = ReadyQueue::new();
        q.push(2);
        q.push(0);
        q.push(1);
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn test_io_drain_partial() {
        let mut q = IoQueue::new();
        q.push(0, 40);
        q.push(1, 35);
        q.push(2, 50);

        assert!(q.drain_completed(30).is_empty());
        assert_eq!(q.len(), 3);

        let done = q.drain_completed(40);
        let idx: Vec<_> = done.iter().map(|e| e.proc_idx).collect();
        assert_eq!(idx, vec![0, 1]);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn test_io_drain_adjacent_entries() {
        // Dos entradas contiguas que terminan juntas: ninguna se salta
        let mut q = IoQueue::new();
        q.push(0, 10);
        q.push(1, 10);
        q.push(2, 10);
        assert_eq!(q.drain_completed(10).len(), 3);
        assert!(q.is_empty());
    }
}
