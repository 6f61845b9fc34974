use std::collections::{BinaryHeap, VecDeque};

use crate::schedule::Residue;
use crate::system::Process;

/// A queue of processes ready to run.
pub trait Queue {
    /// Insert a process.
    fn push(&mut self, process: Process);

    /// Remove and return the process that should run next.
    fn pop(&mut self) -> Option<Process>;

    /// Return the process that should run next without removing it.
    fn peek(&self) -> Option<&Process>;

    /// Return the number of processes.
    fn len(&self) -> usize;

    /// Return the processes in no particular order.
    fn processes(&self) -> Vec<&Process>;

    /// Check if the queue is empty.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Describe the waiting processes at `time`.
    fn residue(&self, time: f64) -> Vec<Residue> {
        self.processes().into_iter().map(|process| Residue::new(process, time)).collect()
    }
}

/// A first-in-first-out queue.
#[derive(Debug, Default)]
pub struct Fifo {
    processes: VecDeque<Process>,
}

/// A queue ordered by the remaining service time.
///
/// Processes with equal remaining times leave the queue in the order they
/// entered it.
#[derive(Debug, Default)]
pub struct Shortest {
    heap: BinaryHeap<Entry>,
    count: u64,
}

#[derive(Debug)]
struct Entry {
    remaining: f64,
    sequence: u64,
    process: Process,
}

order!(Entry(remaining, sequence) descending);

impl Fifo {
    #[inline]
    pub fn new() -> Fifo {
        Fifo::default()
    }
}

impl Queue for Fifo {
    #[inline]
    fn push(&mut self, process: Process) {
        self.processes.push_back(process);
    }

    #[inline]
    fn pop(&mut self) -> Option<Process> {
        self.processes.pop_front()
    }

    #[inline]
    fn peek(&self) -> Option<&Process> {
        self.processes.front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.processes.len()
    }

    fn processes(&self) -> Vec<&Process> {
        self.processes.iter().collect()
    }
}

impl Shortest {
    #[inline]
    pub fn new() -> Shortest {
        Shortest::default()
    }
}

impl Queue for Shortest {
    fn push(&mut self, process: Process) {
        let sequence = self.count;
        self.count += 1;
        self.heap.push(Entry { remaining: process.remaining, sequence: sequence, process: process });
    }

    #[inline]
    fn pop(&mut self) -> Option<Process> {
        self.heap.pop().map(|entry| entry.process)
    }

    #[inline]
    fn peek(&self) -> Option<&Process> {
        self.heap.peek().map(|entry| &entry.process)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn processes(&self) -> Vec<&Process> {
        self.heap.iter().map(|entry| &entry.process).collect()
    }
}
