use probability::distribution::Exponential;

use crate::traffic::Traffic;
use crate::{math, Result, Source};

/// A Poisson arrival process.
pub struct Poisson {
    rate: f64,
    distribution: Exponential,
    source: Source,
}

impl Poisson {
    /// Create a process with `rate` arrivals per unit of time on average.
    pub fn new(rate: f64, source: Source) -> Result<Poisson> {
        if !(rate > 0.0 && rate.is_finite()) {
            raise!("the arrival rate should be positive, got {}", rate);
        }
        info!(target: "Traffic", "Generating arrivals at the rate of {}...", rate);
        Ok(Poisson { rate: rate, distribution: Exponential::new(rate), source: source })
    }
}

impl Traffic for Poisson {
    #[inline]
    fn next(&mut self) -> Result<f64> {
        Ok(math::exponential(&self.distribution, &mut self.source))
    }

    #[inline]
    fn rate(&self) -> f64 {
        self.rate
    }
}
