//! Service demands.

use crate::Result;

mod exponential;

pub use self::exponential::Exponential;

/// A source of burst times.
pub trait Workload {
    /// Return the total service time required by the next process.
    fn next(&mut self) -> Result<f64>;
}
