use crate::schedule::{Queue, Residue, Schedule, Shortest};
use crate::system::{Context, Process};
use crate::Result;

/// A preemptive shortest-job-first scheduling policy.
///
/// A completion is planned only when it is known to happen before the next
/// arrival; otherwise, the decision is revisited when that arrival occurs.
#[derive(Default)]
pub struct ShortestRemaining {
    queue: Shortest,
}

impl ShortestRemaining {
    /// Create a scheduling policy.
    #[inline]
    pub fn new() -> ShortestRemaining {
        ShortestRemaining::default()
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
        if time + remaining <= context.arrival() {
            context.complete_at(time + remaining);
        }
        Ok(())
    }
}

impl Schedule for ShortestRemaining {
    fn arrive(&mut self, context: &mut Context, process: Process) -> Result<()> {
        self.queue.push(process);
        if !context.processor().is_busy() {
            return self.dispatch(context);
        }

        let time = context.time();
        let (left, restart, remaining) = {
            let current = some!(context.processor().current());
            (current.left(time), current.restart, current.remaining)
        };
        if left <= 0.0 {
            context.complete_at(time.max(restart + remaining));
            return Ok(());
        }

        let shortest = some!(self.queue.peek()).remaining;
        if shortest >= left {
            {
                let current = some!(context.processor_mut().current_mut());
                current.remaining = left;
                current.restart = time;
            }
            return self.plan(context);
        }

        let mut process = context.preempt()?;
        process.remaining = left;
        let next = some!(self.queue.pop());
        self.queue.push(process);
        context.dispatch(next)?;
        self.plan(context)
    }

    #[inline]
    fn complete(&mut self, context: &mut Context) -> Result<()> {
        self.dispatch(context)
    }

    fn expire(&mut self, _: &mut Context) -> Result<()> {
        raise!("time slices are not expected under shortest-job-first scheduling");
    }

    #[inline]
    fn residue(&self, time: f64) -> Vec<Residue> {
        self.queue.residue(time)
    }
}

#[cfg(test)]
mod tests {
    use super::ShortestRemaining;
    use crate::system::{EventKind, Process, System};
    use crate::trace::Trace;

    type Subject = System<Trace, Trace, ShortestRemaining>;

    fn new(arrivals: &[f64], bursts: &[f64]) -> Subject {
        System::new(Trace::arrivals(arrivals), Trace::new(bursts), ShortestRemaining::new(),
                    bursts.len()).unwrap()
    }

    fn finish(system: &mut Subject) -> Vec<Process> {
        let mut processes = vec![];
        while let Some((_, process)) = system.next().unwrap() {
            processes.extend(process);
        }
        processes
    }

    #[test]
    fn preemption() {
        let mut system = new(&[1.0, 2.0], &[6.0, 5.0, 3.0]);
        loop {
            let (event, _) = system.next().unwrap().unwrap();
            if event.time == 2.0 {
                break;
            }
        }

        let current = system.processor().current().unwrap();
        assert_eq!((current.id, current.remaining, current.restart), (2, 3.0, 2.0));
        let mut residue = system.residue();
        residue.sort_by_key(|residue| residue.id);
        assert_eq!(residue.iter().map(|residue| (residue.id, residue.remaining))
                          .collect::<Vec<_>>(), vec![(0, 4.0), (1, 5.0)]);
        assert_eq!(system.history().preempted, 1);

        let processes = finish(&mut system);
        assert_eq!(processes.iter().map(|process| (process.id, process.completion))
                            .collect::<Vec<_>>(), vec![(2, 5.0), (0, 9.0), (1, 14.0)]);
        assert_eq!(processes.iter().map(|process| process.waiting).collect::<Vec<_>>(),
                   vec![0.0, 3.0, 8.0]);
        assert_eq!(processes[1].dispatches, 2);
        assert_eq!(system.history().stale, 0);
        assert!(system.residue().is_empty());
    }

    #[test]
    fn no_preemption_on_tie() {
        let mut system = new(&[1.0], &[3.0, 2.0]);
        let processes = finish(&mut system);
        assert_eq!(system.history().preempted, 0);
        assert_eq!(processes.iter().map(|process| (process.id, process.completion))
                            .collect::<Vec<_>>(), vec![(0, 3.0), (1, 5.0)]);
    }

    #[test]
    fn outdated_completion() {
        let mut system = new(&[1.0], &[1.0, 2.0]);
        let mut kinds = vec![];
        let mut processes = vec![];
        while let Some((event, process)) = system.next().unwrap() {
            kinds.push((event.time, event.kind));
            processes.extend(process);
        }
        assert_eq!(kinds, vec![
            (0.0, EventKind::Arrival),
            (1.0, EventKind::Arrival),
            (1.0, EventKind::Completion(1)),
            (1.0, EventKind::Completion(1)),
            (3.0, EventKind::Completion(2)),
        ]);
        assert_eq!(system.history().stale, 1);
        assert_eq!(system.history().completed, 2);
        assert_eq!(processes.iter().map(|process| (process.id, process.turnaround))
                            .collect::<Vec<_>>(), vec![(0, 1.0), (1, 2.0)]);
    }

    #[test]
    fn time_slice() {
        use crate::schedule::Schedule;
        use crate::system::Context;

        let mut schedule = ShortestRemaining::new();
        assert!(schedule.expire(&mut Context::default()).is_err());
    }
}
