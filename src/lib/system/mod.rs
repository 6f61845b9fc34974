//! Complete system.

use crate::schedule::{Residue, Schedule};
use crate::traffic::Traffic;
use crate::workload::Workload;
use crate::{Outcome, Result};

mod clock;
mod event;
mod history;
mod process;
mod processor;
mod queue;
mod statistics;

pub use self::clock::Clock;
pub use self::event::{Event, EventKind};
pub use self::history::History;
pub use self::process::Process;
pub use self::processor::{Processor, Stamp};
pub use self::queue::Queue;
pub use self::statistics::Statistics;

/// A complete system.
pub struct System<T, W, S> where T: Traffic, W: Workload, S: Schedule {
    traffic: T,
    workload: W,
    schedule: S,
    context: Context,
    limit: usize,
}

/// The state shared by a system and its scheduling policy.
#[derive(Debug, Default)]
pub struct Context {
    clock: Clock,
    queue: Queue,
    processor: Processor,
    history: History,
    arrival: f64,
}

impl<T, W, S> System<T, W, S> where T: Traffic, W: Workload, S: Schedule {
    /// Create a system that runs until `limit` processes have completed.
    pub fn new(traffic: T, workload: W, schedule: S, limit: usize) -> Result<System<T, W, S>> {
        if limit == 0 {
            raise!("the number of processes to complete should be positive");
        }
        let mut context = Context::default();
        context.queue.push(Event::arrival(0.0));
        Ok(System {
            traffic: traffic,
            workload: workload,
            schedule: schedule,
            context: context,
            limit: limit,
        })
    }

    /// Advance to the next event.
    ///
    /// The returned process is the one that has completed, if any. The system
    /// is exhausted once the required number of processes have completed.
    pub fn next(&mut self) -> Outcome<(Event, Option<Process>)> {
        if self.context.history.completed >= self.limit {
            return Ok(None);
        }
        let event = some!(self.context.queue.pop(), "the event queue is empty");
        if event.time.is_infinite() {
            raise!("the event queue has run dry at {}", self.context.time());
        }
        self.context.clock.advance(event.time)?;
        trace!(target: "System", "{}", event);
        let process = match event.kind {
            EventKind::Arrival => {
                self.arrive()?;
                None
            },
            EventKind::Completion(stamp) => self.complete(stamp)?,
            EventKind::TimeSlice(stamp) => {
                self.expire(stamp)?;
                None
            },
        };
        Ok(Some((event, process)))
    }

    /// Advance until the required number of processes have completed.
    pub fn run(&mut self) -> Result<()> {
        info!(target: "System", "Simulating {} completions...", self.limit);
        while self.next()?.is_some() {}
        let history = &self.context.history;
        info!(target: "System", "Done at {:.4} with {} arrivals, {} dispatches, {} preemptions, \
                                 {} time slices, and {} outdated events.",
              self.context.time(), history.arrived, history.dispatched, history.preempted,
              history.expired, history.stale);
        Ok(())
    }

    /// Compute the statistics accumulated so far.
    #[inline]
    pub fn statistics(&self) -> Result<Statistics> {
        self.context.history.statistics(self.context.time(), self.traffic.rate())
    }

    /// Return the processes still waiting in the ready queue.
    #[inline]
    pub fn residue(&self) -> Vec<Residue> {
        self.schedule.residue(self.context.time())
    }

    /// Return the history.
    #[inline(always)]
    pub fn history(&self) -> &History {
        &self.context.history
    }

    /// Return the processor.
    #[inline(always)]
    pub fn processor(&self) -> &Processor {
        &self.context.processor
    }

    /// Return the scheduling policy.
    #[inline(always)]
    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    /// Return the current time.
    #[inline(always)]
    pub fn time(&self) -> f64 {
        self.context.time()
    }

    fn arrive(&mut self) -> Result<()> {
        let time = self.context.time();
        let arrival = time + self.traffic.next()?;
        self.context.arrival = arrival;
        self.context.queue.push(Event::arrival(arrival));

        let burst = self.workload.next()?;
        if !(burst > 0.0 && burst.is_finite()) {
            raise!("the burst time should be positive, got {}", burst);
        }
        let process = Process::new(self.context.history.arrived, time, burst);
        self.context.history.arrived += 1;
        debug!(target: "System", "{:12.4} - {} arrived", time, process);

        self.schedule.arrive(&mut self.context, process)
    }

    fn complete(&mut self, stamp: Stamp) -> Result<Option<Process>> {
        if !self.context.processor.holds(stamp) {
            self.context.discard("completion", stamp);
            return Ok(None);
        }
        let time = self.context.time();
        let mut process = some!(self.context.processor.release());
        let left = process.left(time);
        if left.abs() > 1e-9 * (1.0 + time) {
            raise!("{} cannot complete at {} with {} left", process, time, left);
        }
        process.finish(time);
        self.context.history.account(&process);
        debug!(target: "System", "{:12.4} - {} completed", time, process.id);

        self.schedule.complete(&mut self.context)?;
        Ok(Some(process))
    }

    fn expire(&mut self, stamp: Stamp) -> Result<()> {
        if !self.context.processor.holds(stamp) {
            self.context.discard("time slice", stamp);
            return Ok(());
        }
        self.context.history.expired += 1;
        self.schedule.expire(&mut self.context)
    }
}

impl Context {
    /// Return the current time.
    #[inline(always)]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    /// Return the time of the pending arrival.
    #[inline(always)]
    pub fn arrival(&self) -> f64 {
        self.arrival
    }

    /// Give the processor to a process.
    pub fn dispatch(&mut self, mut process: Process) -> Result<()> {
        let time = self.time();
        process.dispatch(time);
        trace!(target: "System", "{:12.4} - {} dispatched", time, process);
        self.processor.assign(process)?;
        self.history.dispatched += 1;
        Ok(())
    }

    /// Take the process away from the processor in favor of another one.
    pub fn preempt(&mut self) -> Result<Process> {
        let process = some!(self.processor.release(), "cannot preempt an idle processor");
        trace!(target: "System", "{:12.4} - {} preempted", self.time(), process);
        self.history.preempted += 1;
        Ok(process)
    }

    /// Take the process away from the processor once its quantum is over.
    pub fn suspend(&mut self) -> Result<Process> {
        Ok(some!(self.processor.release(), "cannot suspend an idle processor"))
    }

    /// Plan the completion of the current process at `time`.
    pub fn complete_at(&mut self, time: f64) {
        let stamp = self.processor.stamp();
        self.queue.push(Event::completion(time, stamp));
    }

    /// Plan the end of the quantum of the current process at `time`.
    pub fn expire_at(&mut self, time: f64) {
        let stamp = self.processor.stamp();
        self.queue.push(Event::time_slice(time, stamp));
    }

    /// Return the processor.
    #[inline(always)]
    pub fn processor(&self) -> &Processor {
        &self.processor
    }

    /// Return the processor.
    #[inline(always)]
    pub fn processor_mut(&mut self) -> &mut Processor {
        &mut self.processor
    }

    fn discard(&mut self, name: &str, stamp: Stamp) {
        debug!(target: "System", "{:12.4} - discarding an outdated {} (#{})",
               self.time(), name, stamp);
        self.history.stale += 1;
    }
}
