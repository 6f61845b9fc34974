use probability::distribution;

use crate::workload::Workload;
use crate::{math, Result, Source};

/// A workload model with exponentially distributed burst times.
pub struct Exponential {
    distribution: distribution::Exponential,
    source: Source,
}

impl Exponential {
    /// Create a model whose burst times average to `service`.
    pub fn new(service: f64, source: Source) -> Result<Exponential> {
        if !(service > 0.0 && service.is_finite()) {
            raise!("the average service time should be positive, got {}", service);
        }
        info!(target: "Workload", "Generating bursts of {} on average...", service);
        Ok(Exponential {
            distribution: distribution::Exponential::new(1.0 / service),
            source: source,
        })
    }
}

impl Workload for Exponential {
    #[inline]
    fn next(&mut self) -> Result<f64> {
        Ok(math::exponential(&self.distribution, &mut self.source))
    }
}
