use probability::distribution::{Exponential, Inverse};
use random::Source;

/// Draw a strictly positive variate from an exponential distribution.
///
/// A uniform draw of exactly zero maps to a zero-length variate, which is
/// never a valid interarrival or burst time, so such draws are discarded.
pub fn exponential<S: Source>(distribution: &Exponential, source: &mut S) -> f64 {
    loop {
        let value = distribution.inverse(source.read::<f64>());
        if value > 0.0 {
            return value;
        }
    }
}

#[cfg(test)]
mod tests {
    use probability::distribution::{Exponential, Inverse};
    use random::Source;

    struct Replay {
        values: Vec<u64>,
        reads: usize,
    }

    impl Source for Replay {
        fn read_u64(&mut self) -> u64 {
            let value = self.values[self.reads];
            self.reads += 1;
            value
        }
    }

    #[test]
    fn exponential() {
        let mut source = random::default(42);
        let distribution = Exponential::new(2.0);
        let count = 100000;
        let mut sum = 0.0;
        for _ in 0..count {
            let value = super::exponential(&distribution, &mut source);
            assert!(value > 0.0 && value.is_finite());
            sum += value;
        }
        assert::close(&[sum / count as f64], &[0.5], 1e-2);
    }

    #[test]
    fn exponential_replay() {
        let distribution = Exponential::new(1.0);
        let (mut one, mut other) = (random::default(7), random::default(7));
        for _ in 0..100 {
            assert_eq!(super::exponential(&distribution, &mut one),
                       super::exponential(&distribution, &mut other));
        }
    }

    #[test]
    fn exponential_zero() {
        let distribution = Exponential::new(2.0);
        let value = 0x8000_0000_0000_0000;
        let mut source = Replay { values: vec![0, value], reads: 0 };
        let expected = distribution.inverse(Replay { values: vec![value], reads: 0 }.read::<f64>());
        assert!(expected > 0.0);
        assert_eq!(super::exponential(&distribution, &mut source), expected);
        assert_eq!(source.reads, 2);
    }
}
