//! Run parameters.

use crate::schedule::{Kind, Policy};
use crate::system::System;
use crate::traffic::Poisson;
use crate::workload::Exponential;
use crate::{Config, Result};

/// The default number of processes to complete.
pub const LIMIT: usize = 10000;

/// A system assembled from run parameters.
pub type Simulation = System<Poisson, Exponential, Policy>;

/// Run parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Setup {
    /// The scheduler selector (1 for PSJF and 2 for RR).
    pub scheduler: i64,
    /// The mean number of arrivals per unit of time.
    pub lambda: f64,
    /// The mean service time.
    pub service: f64,
    /// The time slice of RR.
    pub quantum: f64,
    /// The number of processes to complete.
    pub limit: usize,
    /// The seed of the random number generators.
    pub seed: u64,
    /// The flag requesting the PSJF residue curve.
    pub curve: bool,
}

impl Default for Setup {
    fn default() -> Setup {
        Setup {
            scheduler: 0,
            lambda: ::std::f64::NAN,
            service: ::std::f64::NAN,
            quantum: ::std::f64::NAN,
            limit: LIMIT,
            seed: 0,
            curve: false,
        }
    }
}

impl Setup {
    /// Read and validate the parameters given in a configuration.
    pub fn new(config: &Config) -> Result<Setup> {
        let mut setup = Setup::default();
        setup.merge(config)?;
        setup.validate()?;
        Ok(setup)
    }

    /// Override the parameters present in a configuration.
    pub fn merge(&mut self, config: &Config) -> Result<()> {
        if let Some(&value) = config.get::<i64>("scheduler") {
            self.scheduler = value;
        }
        if let Some(value) = number(config, "lambda") {
            self.lambda = value;
        }
        if let Some(value) = number(config, "service") {
            self.service = value;
        }
        if let Some(value) = number(config, "quantum") {
            self.quantum = value;
        }
        if let Some(&value) = config.get::<i64>("limit") {
            if value < 0 {
                raise!("the number of processes to complete should be positive, got {}", value);
            }
            self.limit = value as usize;
        }
        if let Some(&value) = config.get::<i64>("seed") {
            self.seed = value as u64;
        }
        if let Some(&value) = config.get::<bool>("curve") {
            self.curve = value;
        }
        Ok(())
    }

    /// Check that the parameters describe a valid run.
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind()?;
        if !(self.lambda > 0.0 && self.lambda.is_finite()) {
            raise!("the arrival rate should be positive, got {}", self.lambda);
        }
        if !(self.service > 0.0 && self.service.is_finite()) {
            raise!("the average service time should be positive, got {}", self.service);
        }
        if kind == Kind::RoundRobin && !(self.quantum > 0.0 && self.quantum.is_finite()) {
            raise!("the quantum should be positive, got {}", self.quantum);
        }
        if self.limit == 0 {
            raise!("the number of processes to complete should be positive");
        }
        Ok(())
    }

    /// Return the type of the scheduling policy.
    #[inline]
    pub fn kind(&self) -> Result<Kind> {
        Kind::from_code(self.scheduler)
    }

    /// Assemble a system.
    pub fn construct(&self) -> Result<Simulation> {
        self.validate()?;
        let traffic = Poisson::new(self.lambda, random::default(self.seed))?;
        let workload = Exponential::new(self.service, random::default(!self.seed))?;
        let schedule = Policy::new(self.kind()?, self.quantum)?;
        info!(target: "Setup", "Using {} with lambda = {}, service = {}, quantum = {}, seed = {}.",
              schedule.kind(), self.lambda, self.service, self.quantum, self.seed);
        System::new(traffic, workload, schedule, self.limit)
    }
}

fn number(config: &Config, name: &str) -> Option<f64> {
    match config.get::<f64>(name) {
        Some(&value) => Some(value),
        _ => config.get::<i64>(name).map(|&value| value as f64),
    }
}

#[cfg(test)]
mod tests {
    use configuration::format::TOML;

    use super::Setup;
    use crate::schedule::Kind;

    #[test]
    fn new() {
        let config = TOML::parse(r#"
            scheduler = 2
            lambda = 3
            service = 0.06
            quantum = 0.01
            seed = 42
        "#).unwrap();
        let setup = Setup::new(&config).unwrap();
        assert_eq!(setup.kind().unwrap(), Kind::RoundRobin);
        assert_eq!((setup.lambda, setup.service, setup.quantum), (3.0, 0.06, 0.01));
        assert_eq!((setup.limit, setup.seed, setup.curve), (10000, 42, false));
    }

    #[test]
    fn validate() {
        let valid = Setup { scheduler: 1, lambda: 1.0, service: 0.5, ..Setup::default() };
        assert!(valid.validate().is_ok());
        assert!(Setup { scheduler: 3, ..valid }.validate().is_err());
        assert!(Setup { scheduler: 0, ..valid }.validate().is_err());
        assert!(Setup { scheduler: 2, ..valid }.validate().is_err());
        assert!(Setup { scheduler: 2, quantum: 1.0, ..valid }.validate().is_ok());
        assert!(Setup { lambda: 0.0, ..valid }.validate().is_err());
        assert!(Setup { service: -1.0, ..valid }.validate().is_err());
        assert!(Setup { limit: 0, ..valid }.validate().is_err());
        assert!(Setup::default().validate().is_err());
    }

    #[test]
    fn construct() {
        let setup = Setup { scheduler: 5, lambda: 1.0, service: 0.5, ..Setup::default() };
        assert!(setup.construct().is_err());
        let setup = Setup { scheduler: 1, seed: 1, ..setup };
        assert_eq!(setup.construct().unwrap().schedule().kind(), Kind::ShortestRemaining);
        let setup = Setup { scheduler: 2, quantum: 0.1, ..setup };
        assert_eq!(setup.construct().unwrap().schedule().kind(), Kind::RoundRobin);
    }
}
