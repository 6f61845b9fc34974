use crate::system::{Process, Statistics};
use crate::Result;

/// Counters and running sums accumulated over a run.
#[derive(Clone, Copy, Debug, Default)]
pub struct History {
    /// The number of arrived processes.
    pub arrived: usize,
    /// The number of processor assignments.
    pub dispatched: usize,
    /// The number of preemptions.
    pub preempted: usize,
    /// The number of expired time slices.
    pub expired: usize,
    /// The number of completed processes.
    pub completed: usize,
    /// The number of discarded outdated events.
    pub stale: usize,
    /// The total burst time of completed processes.
    pub burst: f64,
    /// The total turnaround time of completed processes.
    pub turnaround: f64,
    /// The total waiting time of completed processes.
    pub waiting: f64,
}

impl History {
    /// Take into account a completed process.
    pub fn account(&mut self, process: &Process) {
        self.completed += 1;
        self.burst += process.burst;
        self.turnaround += process.turnaround;
        self.waiting += process.waiting;
    }

    /// Compute the statistics of a run that lasted `time` with arrivals
    /// happening at `rate`.
    pub fn statistics(&self, time: f64, rate: f64) -> Result<Statistics> {
        if self.completed == 0 {
            raise!("no process has completed yet");
        }
        if !(time > 0.0) {
            raise!("no time has elapsed yet");
        }
        let count = self.completed as f64;
        let waiting = self.waiting / count;
        Ok(Statistics {
            completed: self.completed,
            time: time,
            turnaround: self.turnaround / count,
            throughput: count / time,
            utilization: self.burst / time,
            queue_length: rate * waiting,
            waiting: waiting,
        })
    }
}
