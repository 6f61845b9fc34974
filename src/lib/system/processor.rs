use crate::system::Process;
use crate::Result;

/// An identifier of a processor assignment.
pub type Stamp = u64;

/// A single processor.
///
/// Every assignment of a process receives a fresh stamp, which lets events
/// planned for an earlier assignment be recognized as outdated.
#[derive(Debug, Default)]
pub struct Processor {
    process: Option<Process>,
    stamp: Stamp,
}

impl Processor {
    /// Give the processor to a process.
    pub fn assign(&mut self, process: Process) -> Result<Stamp> {
        if let Some(ref current) = self.process {
            raise!("cannot assign {} to the processor occupied by {}", process, current);
        }
        self.process = Some(process);
        self.stamp += 1;
        Ok(self.stamp)
    }

    /// Take the process away from the processor.
    #[inline]
    pub fn release(&mut self) -> Option<Process> {
        self.process.take()
    }

    /// Check if the processor is busy.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.process.is_some()
    }

    /// Check if the processor is still serving the given assignment.
    #[inline]
    pub fn holds(&self, stamp: Stamp) -> bool {
        self.is_busy() && self.stamp == stamp
    }

    /// Return the current process.
    #[inline]
    pub fn current(&self) -> Option<&Process> {
        self.process.as_ref()
    }

    /// Return the current process.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut Process> {
        self.process.as_mut()
    }

    getter!(stamp: Stamp);
}

#[cfg(test)]
mod tests {
    use super::Processor;
    use crate::system::Process;

    #[test]
    fn assign() {
        let mut processor = Processor::default();
        assert!(!processor.is_busy());
        assert!(processor.current().is_none());

        let stamp = processor.assign(Process::new(0, 0.0, 1.0)).unwrap();
        assert!(processor.is_busy());
        assert!(processor.holds(stamp));
        assert!(processor.assign(Process::new(1, 0.0, 1.0)).is_err());
        assert_eq!(processor.current().unwrap().id, 0);

        assert_eq!(processor.release().unwrap().id, 0);
        assert!(!processor.is_busy());
        assert!(!processor.holds(stamp));

        let other = processor.assign(Process::new(1, 0.0, 1.0)).unwrap();
        assert!(other != stamp);
        assert!(!processor.holds(stamp));
        assert!(processor.holds(other));
    }
}
