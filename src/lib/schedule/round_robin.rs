use crate::schedule::{Fifo, Queue, Residue, Schedule};
use crate::system::{Context, Process};
use crate::Result;

/// A round-robin scheduling policy.
pub struct RoundRobin {
    quantum: f64,
    queue: Fifo,
}

impl RoundRobin {
    /// Create a scheduling policy.
    pub fn new(quantum: f64) -> Result<RoundRobin> {
        if !(quantum > 0.0 && quantum.is_finite()) {
            raise!("the quantum should be positive, got {}", quantum);
        }
        Ok(RoundRobin { quantum: quantum, queue: Fifo::new() })
    }

    fn dispatch(&mut self, context: &mut Context) -> Result<()> {
        let process = match self.queue.pop() {
            Some(process) => process,
            _ => return Ok(()),
        };
        context.dispatch(process)?;
        self.plan(context)
    }

    fn plan(&self, context: &mut Context) -> Result<()> {
        let time = context.time();
        let remaining = some!(context.processor().current()).remaining;
        if remaining - self.quantum <= 0.0 {
            context.complete_at(time + remaining);
        } else {
            context.expire_at(time + self.quantum);
        }
        Ok(())
    }
}

impl Schedule for RoundRobin {
    fn arrive(&mut self, context: &mut Context, process: Process) -> Result<()> {
        self.queue.push(process);
        if !context.processor().is_busy() {
            self.dispatch(context)?;
        }
        Ok(())
    }

    #[inline]
    fn complete(&mut self, context: &mut Context) -> Result<()> {
        self.dispatch(context)
    }

    fn expire(&mut self, context: &mut Context) -> Result<()> {
        let mut process = context.suspend()?;
        process.remaining -= self.quantum;
        self.queue.push(process);
        self.dispatch(context)
    }

    #[inline]
    fn residue(&self, time: f64) -> Vec<Residue> {
        self.queue.residue(time)
    }
}

#[cfg(test)]
mod tests {
    use super::RoundRobin;
    use crate::system::{Process, System};
    use crate::trace::Trace;

    fn run(arrivals: &[f64], bursts: &[f64], quantum: f64) -> (Vec<Process>, usize) {
        let mut system = System::new(Trace::arrivals(arrivals), Trace::new(bursts),
                                     RoundRobin::new(quantum).unwrap(), bursts.len()).unwrap();
        let mut processes = vec![];
        while let Some((_, process)) = system.next().unwrap() {
            processes.extend(process);
        }
        (processes, system.history().expired)
    }

    #[test]
    fn new() {
        assert!(RoundRobin::new(0.0).is_err());
        assert!(RoundRobin::new(-1.0).is_err());
        assert!(RoundRobin::new(::std::f64::INFINITY).is_err());
        assert_eq!(RoundRobin::new(0.25).unwrap().quantum, 0.25);
    }

    #[test]
    fn dispatches() {
        for &(burst, count) in &[(0.5, 1), (1.0, 1), (2.0, 2), (2.5, 3), (7.25, 8)] {
            let (processes, expired) = run(&[], &[burst], 1.0);
            assert_eq!(processes.len(), 1);
            assert_eq!(processes[0].dispatches, count);
            assert_eq!(expired, count - 1);
            assert_eq!(processes[0].completion, burst);
            assert_eq!(processes[0].waiting, 0.0);
        }
    }

    #[test]
    fn fifo() {
        let (processes, expired) = run(&[0.125, 0.25], &[2.5, 1.5, 0.5], 1.0);
        assert_eq!(expired, 3);
        assert_eq!(processes.iter().map(|process| process.id).collect::<Vec<_>>(), vec![2, 1, 0]);
        assert_eq!(processes.iter().map(|process| process.dispatches).collect::<Vec<_>>(),
                   vec![1, 2, 3]);
        assert_eq!(processes.iter().map(|process| process.completion).collect::<Vec<_>>(),
                   vec![2.5, 4.0, 4.5]);
        for process in &processes {
            assert_eq!(process.remaining, 0.0);
            assert_eq!(process.turnaround, process.completion - process.arrival);
            assert::close(&[process.waiting], &[process.turnaround - process.burst], 1e-12);
        }
    }
}
