use std::fmt;

/// A process.
#[derive(Clone, Debug, PartialEq)]
pub struct Process {
    /// The identifier.
    pub id: usize,
    /// The time of arrival.
    pub arrival: f64,
    /// The total service time required.
    pub burst: f64,
    /// The service time still required as of the restart time.
    pub remaining: f64,
    /// The time of the first dispatch.
    pub start: f64,
    /// The time of the most recent dispatch.
    pub restart: f64,
    /// The time of completion.
    pub completion: f64,
    /// The time spent in the ready queue.
    pub waiting: f64,
    /// The time from arrival to completion.
    pub turnaround: f64,
    /// The flag indicating that the process has been dispatched before.
    pub returning: bool,
    /// The number of dispatches.
    pub dispatches: usize,
}

impl Process {
    /// Create a process that has just arrived.
    pub fn new(id: usize, arrival: f64, burst: f64) -> Process {
        Process {
            id: id,
            arrival: arrival,
            burst: burst,
            remaining: burst,
            start: 0.0,
            restart: 0.0,
            completion: 0.0,
            waiting: 0.0,
            turnaround: 0.0,
            returning: false,
            dispatches: 0,
        }
    }

    /// Account for being given the processor at `time`.
    pub fn dispatch(&mut self, time: f64) {
        if !self.returning {
            self.start = time;
            self.returning = true;
        }
        self.restart = time;
        self.dispatches += 1;
    }

    /// Return the service time still required at `time` assuming the process
    /// has been running since its most recent dispatch.
    #[inline]
    pub fn left(&self, time: f64) -> f64 {
        self.remaining - (time - self.restart)
    }

    /// Account for completion at `time`.
    pub fn finish(&mut self, time: f64) {
        self.remaining = 0.0;
        self.completion = time;
        self.turnaround = self.completion - self.arrival;
        self.waiting = (self.start - self.arrival) + ((self.completion - self.start) - self.burst);
    }
}

impl fmt::Display for Process {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "process #{} ({:.4} left of {:.4})", self.id, self.remaining, self.burst)
    }
}

#[cfg(test)]
mod tests {
    use super::Process;

    #[test]
    fn dispatch() {
        let mut process = Process::new(0, 1.0, 3.0);
        process.dispatch(2.0);
        process.remaining = 2.0;
        process.dispatch(5.0);
        assert!(process.returning);
        assert_eq!((process.start, process.restart), (2.0, 5.0));
        assert_eq!(process.dispatches, 2);
        assert_eq!(process.left(6.5), 0.5);
    }

    #[test]
    fn finish() {
        let mut process = Process::new(0, 1.0, 3.0);
        process.dispatch(2.0);
        process.finish(7.0);
        assert_eq!(process.remaining, 0.0);
        assert_eq!(process.turnaround, 6.0);
        assert_eq!(process.waiting, 3.0);
        assert_eq!(process.waiting, process.turnaround - process.burst);
    }
}
