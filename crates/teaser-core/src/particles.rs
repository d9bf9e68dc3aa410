//! Decorative Particles
//!
//! Random start positions and timings for the floating dots behind the page.
//! Purely cosmetic: nothing here feeds back into page state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Start position (viewport percent) and animation timing of one particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x_pct: f64,
    pub y_pct: f64,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            x_pct: rng.gen_range(0.0..100.0),
            y_pct: rng.gen_range(0.0..100.0),
            duration_secs: rng.gen_range(2.0..5.0),
            delay_secs: rng.gen_range(0.0..2.0),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub const DEFAULT_COUNT: usize = 50;

    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        Self {
            particles: (0..count).map(|_| Particle::random(rng)).collect(),
        }
    }

    /// Scatter with a seeded generator, e.g. from the page's mount time
    #[must_use]
    pub fn from_seed(count: usize, seed: u64) -> Self {
        Self::scatter(count, &mut SmallRng::seed_from_u64(seed))
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn into_vec(self) -> Vec<Particle> {
        self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_ranges() {
        let field = ParticleField::from_seed(ParticleField::DEFAULT_COUNT, 7);
        assert_eq!(field.len(), 50);
        for p in field.iter() {
            assert!((0.0..100.0).contains(&p.x_pct));
            assert!((0.0..100.0).contains(&p.y_pct));
            assert!((2.0..5.0).contains(&p.duration_secs));
            assert!((0.0..2.0).contains(&p.delay_secs));
        }
    }

    #[test]
    fn test_empty_field() {
        assert!(ParticleField::from_seed(0, 1).is_empty());
    }
}
