//! Simulated sensor values.
//!
//! Each kind has a base value and a bounded uniform noise term. Noise is
//! drawn as an integer in `[-span, span)` and scaled down, so readings
//! move in fixed steps (0.01 for temperature and humidity, 0.001 for
//! vibration).
//!
//! The generator is the only mutable state in the request core. It is
//! seeded once and shared behind a mutex.

use std::sync::{Mutex, PoisonError};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sensorport_types::SensorKind;
use tracing::debug;

/// Base value and noise range for one sensor kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseProfile {
    /// Centre of the reading range.
    pub base: f64,
    /// Noise is drawn from `[-span, span)` before scaling.
    pub span: i32,
    /// Divisor applied to the drawn noise.
    pub scale: f64,
}

impl NoiseProfile {
    /// The profile used for `kind`.
    pub const fn for_kind(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Temperature => Self {
                base: 25.0,
                span: 200,
                scale: 100.0,
            },
            SensorKind::Humidity => Self {
                base: 55.0,
                span: 1000,
                scale: 100.0,
            },
            SensorKind::Vibration => Self {
                base: 0.6,
                span: 400,
                scale: 1000.0,
            },
        }
    }

    /// Smallest value this profile can produce.
    pub fn min(&self) -> f64 {
        self.base - f64::from(self.span) / self.scale
    }

    /// Largest value this profile can produce (the noise range is half-open).
    pub fn max(&self) -> f64 {
        self.base + f64::from(self.span) / self.scale
    }

    /// Draw one value from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let noise = rng.random_range(self.span.saturating_neg()..self.span);
        self.base + f64::from(noise) / self.scale
    }
}

/// Produces pseudo-random readings for each sensor kind.
#[derive(Debug)]
pub struct ValueSimulator {
    rng: Mutex<SmallRng>,
}

impl ValueSimulator {
    /// Seed the generator from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(SmallRng::from_os_rng()),
        }
    }

    /// Seed the generator with a fixed value for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Use `seed` when given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    /// Produce one reading of `kind`.
    pub fn simulate(&self, kind: SensorKind) -> f64 {
        // SmallRng state stays valid across a poisoning panic.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let value = NoiseProfile::for_kind(kind).sample(&mut *rng);
        debug!(sensor = %kind, value, "simulated reading");
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_stay_in_range() {
        let sim = ValueSimulator::seeded(42);
        for kind in SensorKind::ALL {
            let profile = NoiseProfile::for_kind(kind);
            for _ in 0..2_000 {
                let v = sim.simulate(kind);
                assert!(v.is_finite());
                assert!(v >= profile.min() && v < profile.max(), "{kind}: {v}");
            }
        }
    }

    #[test]
    fn profile_bounds() {
        let t = NoiseProfile::for_kind(SensorKind::Temperature);
        assert!((t.min() - 23.0).abs() < 1e-9);
        assert!((t.max() - 27.0).abs() < 1e-9);

        let h = NoiseProfile::for_kind(SensorKind::Humidity);
        assert!((h.min() - 45.0).abs() < 1e-9);
        assert!((h.max() - 65.0).abs() < 1e-9);

        let v = NoiseProfile::for_kind(SensorKind::Vibration);
        assert!((v.min() - 0.2).abs() < 1e-9);
        assert!((v.max() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = ValueSimulator::seeded(7);
        let b = ValueSimulator::seeded(7);
        for kind in SensorKind::ALL {
            assert!((a.simulate(kind) - b.simulate(kind)).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn sample_with_caller_rng() {
        let mut rng = SmallRng::seed_from_u64(1);
        let profile = NoiseProfile::for_kind(SensorKind::Vibration);
        let v = profile.sample(&mut rng);
        assert!(v >= profile.min() && v < profile.max());
    }

    #[test]
    fn entropy_seeded_simulator_works() {
        let sim = ValueSimulator::new(None);
        let v = sim.simulate(SensorKind::Humidity);
        assert!((45.0..65.0).contains(&v));
    }
}
