use crate::Result;

/// A simulation clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    time: f64,
}

impl Clock {
    /// Move the clock to the time of the event being dispatched.
    pub fn advance(&mut self, time: f64) -> Result<()> {
        if time < self.time || time.is_nan() {
            raise!("the clock cannot go from {} back to {}", self.time, time);
        }
        self.time = time;
        Ok(())
    }

    getter!(time: f64);
}
