use std::fmt;

use crate::system::Stamp;

/// An event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// The time.
    pub time: f64,
    /// The type.
    pub kind: EventKind,
}

/// The type of an event.
///
/// Completions and time slices refer to the processor assignment they were
/// planned for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A process has arrived.
    Arrival,
    /// A process has received all the service it requires.
    Completion(Stamp),
    /// A process has used up its quantum.
    TimeSlice(Stamp),
}

impl Event {
    /// Create an arrival event.
    #[inline]
    pub fn arrival(time: f64) -> Event {
        Event { time: time, kind: EventKind::Arrival }
    }

    /// Create a completion event.
    #[inline]
    pub fn completion(time: f64, stamp: Stamp) -> Event {
        Event { time: time, kind: EventKind::Completion(stamp) }
    }

    /// Create a time-slice event.
    #[inline]
    pub fn time_slice(time: f64, stamp: Stamp) -> Event {
        Event { time: time, kind: EventKind::TimeSlice(stamp) }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:12.4} - {}", self.time, &self.kind)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EventKind::Arrival => write!(formatter, "arrival"),
            EventKind::Completion(stamp) => write!(formatter, "completion (#{})", stamp),
            EventKind::TimeSlice(stamp) => write!(formatter, "time slice (#{})", stamp),
        }
    }
}
