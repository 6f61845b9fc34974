//! Process arrivals.

use crate::Result;

mod poisson;

pub use self::poisson::Poisson;

/// A source of interarrival times.
pub trait Traffic {
    /// Return the time until the next arrival.
    fn next(&mut self) -> Result<f64>;

    /// Return the mean number of arrivals per unit of time.
    fn rate(&self) -> f64;
}
