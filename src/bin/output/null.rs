use simulator::system::Statistics;
use simulator::{Result, Setup};

use crate::output::Output;

pub struct Null;

impl Output for Null {
    fn next(&mut self, _: &Setup, _: &Statistics) -> Result<()> {
        Ok(())
    }
}
