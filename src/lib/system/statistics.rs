use std::fmt;

/// Steady-state performance statistics of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    /// The number of completed processes.
    pub completed: usize,
    /// The total simulated time.
    pub time: f64,
    /// The average turnaround time.
    pub turnaround: f64,
    /// The number of completions per unit of time.
    pub throughput: f64,
    /// The fraction of time the processor was busy.
    pub utilization: f64,
    /// The average number of processes in the ready queue (Little's law).
    pub queue_length: f64,
    /// The average waiting time.
    pub waiting: f64,
}

impl fmt::Display for Statistics {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "Total simulation time: {}", self.time)?;
        writeln!(formatter, "Average turnaround time: {}", self.turnaround)?;
        writeln!(formatter, "Average throughput: {}", self.throughput)?;
        writeln!(formatter, "CPU utilization: {}", self.utilization)?;
        writeln!(formatter, "Average number of processes in the ready queue: {}", self.queue_length)?;
        write!(formatter, "Average waiting time: {}", self.waiting)
    }
}
