//! Tool for evaluating CPU scheduling policies by discrete-event simulation.

#[cfg(test)]
extern crate assert;

#[macro_use]
extern crate log;

extern crate configuration;
extern crate probability;
extern crate random;

#[macro_use]
mod macros;

mod math;
mod result;

pub mod schedule;
pub mod setup;
pub mod system;
pub mod trace;
pub mod traffic;
pub mod workload;

pub use result::{Error, Result};
pub use setup::Setup;

/// An outcome.
pub type Outcome<T> = Result<Option<T>>;

/// A configuration.
pub type Config = configuration::Tree;

/// A source of randomness.
pub type Source = random::Default;
