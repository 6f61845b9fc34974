//! Scripted arrivals and service demands.

use std::collections::VecDeque;

use crate::traffic::Traffic;
use crate::workload::Workload;
use crate::Result;

/// A replay of predetermined values.
///
/// As traffic, an exhausted trace keeps producing infinitely distant
/// arrivals. As a workload, running out of burst times is an error.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    values: VecDeque<f64>,
    rate: f64,
}

impl Trace {
    /// Create a trace.
    pub fn new(values: &[f64]) -> Trace {
        let total = values.iter().fold(0.0, |sum, value| sum + value);
        let rate = if total > 0.0 { values.len() as f64 / total } else { 0.0 };
        Trace { values: values.iter().cloned().collect(), rate: rate }
    }

    /// Create a trace from absolute times, starting from the origin.
    pub fn arrivals(times: &[f64]) -> Trace {
        let mut last = 0.0;
        let steps = times.iter().map(|&time| {
            let step = time - last;
            last = time;
            step
        }).collect::<Vec<_>>();
        Trace::new(&steps)
    }
}

impl Traffic for Trace {
    #[inline]
    fn next(&mut self) -> Result<f64> {
        Ok(self.values.pop_front().unwrap_or(::std::f64::INFINITY))
    }

    #[inline]
    fn rate(&self) -> f64 {
        self.rate
    }
}

impl Workload for Trace {
    #[inline]
    fn next(&mut self) -> Result<f64> {
        Ok(some!(self.values.pop_front(), "the workload trace is exhausted"))
    }
}
