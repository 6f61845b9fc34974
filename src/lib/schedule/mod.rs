//! Scheduling policies.

use std::fmt;

use crate::system::{Context, Process};
use crate::Result;

mod queue;
mod round_robin;
mod shortest_remaining;

pub use self::queue::{Fifo, Queue, Shortest};
pub use self::round_robin::RoundRobin;
pub use self::shortest_remaining::ShortestRemaining;

/// A scheduling policy.
pub trait Schedule {
    /// Take a newly arrived process.
    fn arrive(&mut self, context: &mut Context, process: Process) -> Result<()>;

    /// Continue after the current process has completed and left the
    /// processor.
    fn complete(&mut self, context: &mut Context) -> Result<()>;

    /// Continue after the quantum of the current process has expired.
    fn expire(&mut self, context: &mut Context) -> Result<()>;

    /// Return the processes waiting in the ready queue at `time`.
    fn residue(&self, time: f64) -> Vec<Residue>;
}

/// The type of a scheduling policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// Preemptive shortest job first.
    ShortestRemaining,
    /// Round robin.
    RoundRobin,
}

/// A scheduling policy chosen at run time.
pub enum Policy {
    ShortestRemaining(ShortestRemaining),
    RoundRobin(RoundRobin),
}

/// The state of a process left in the ready queue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Residue {
    /// The identifier.
    pub id: usize,
    /// The time of arrival.
    pub arrival: f64,
    /// The total service time required.
    pub burst: f64,
    /// The service time still required.
    pub remaining: f64,
    /// The service time received.
    pub served: f64,
    /// The time elapsed since arrival.
    pub waited: f64,
}

impl Kind {
    /// Recognize a scheduler selector (1 for PSJF and 2 for RR).
    pub fn from_code(code: i64) -> Result<Kind> {
        Ok(match code {
            1 => Kind::ShortestRemaining,
            2 => Kind::RoundRobin,
            _ => raise!("the scheduler type should be in the range [1, 2], got {}", code),
        })
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::ShortestRemaining => write!(formatter, "PSJF"),
            Kind::RoundRobin => write!(formatter, "RR"),
        }
    }
}

impl Policy {
    /// Create a scheduling policy; the quantum is ignored by PSJF.
    pub fn new(kind: Kind, quantum: f64) -> Result<Policy> {
        Ok(match kind {
            Kind::ShortestRemaining => Policy::ShortestRemaining(ShortestRemaining::new()),
            Kind::RoundRobin => Policy::RoundRobin(RoundRobin::new(quantum)?),
        })
    }

    /// Return the type.
    pub fn kind(&self) -> Kind {
        match *self {
            Policy::ShortestRemaining(_) => Kind::ShortestRemaining,
            Policy::RoundRobin(_) => Kind::RoundRobin,
        }
    }
}

macro_rules! delegate(
    ($self:ident.$method:ident($($argument:expr),*)) => (match *$self {
        Policy::ShortestRemaining(ref mut inner) => inner.$method($($argument),*),
        Policy::RoundRobin(ref mut inner) => inner.$method($($argument),*),
    });
);

impl Schedule for Policy {
    #[inline]
    fn arrive(&mut self, context: &mut Context, process: Process) -> Result<()> {
        delegate!(self.arrive(context, process))
    }

    #[inline]
    fn complete(&mut self, context: &mut Context) -> Result<()> {
        delegate!(self.complete(context))
    }

    #[inline]
    fn expire(&mut self, context: &mut Context) -> Result<()> {
        delegate!(self.expire(context))
    }

    fn residue(&self, time: f64) -> Vec<Residue> {
        match *self {
            Policy::ShortestRemaining(ref inner) => inner.residue(time),
            Policy::RoundRobin(ref inner) => inner.residue(time),
        }
    }
}

impl Residue {
    /// Describe a waiting process at `time`.
    pub fn new(process: &Process, time: f64) -> Residue {
        Residue {
            id: process.id,
            arrival: process.arrival,
            burst: process.burst,
            remaining: process.remaining,
            served: process.burst - process.remaining,
            waited: time - process.arrival,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Kind, Policy};

    #[test]
    fn kind() {
        assert_eq!(Kind::from_code(1).unwrap(), Kind::ShortestRemaining);
        assert_eq!(Kind::from_code(2).unwrap(), Kind::RoundRobin);
        assert!(Kind::from_code(0).is_err());
        assert!(Kind::from_code(3).is_err());
        assert_eq!(Kind::RoundRobin.to_string(), "RR");
    }

    #[test]
    fn policy() {
        assert_eq!(Policy::new(Kind::ShortestRemaining, ::std::f64::NAN).unwrap().kind(),
                   Kind::ShortestRemaining);
        assert_eq!(Policy::new(Kind::RoundRobin, 0.5).unwrap().kind(), Kind::RoundRobin);
        assert!(Policy::new(Kind::RoundRobin, 0.0).is_err());
    }
}
