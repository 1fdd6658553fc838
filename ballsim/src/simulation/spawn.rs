//! Randomised body construction behind a seedable source.
//!
//! All draws go through one `StdRng`, so the same seed and parameters always
//! reproduce the same bodies in the same order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::params::{Bounds, Parameters};
use super::states::{Body, NVec2, Rgb};

pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    /// Deterministic source for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn for_parameters(params: &Parameters) -> Self {
        match params.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Draw the body count from `params.count`
    pub fn body_count(&mut self, params: &Parameters) -> usize {
        self.rng.gen_range(params.count.clone())
    }

    /// One random body inside `bounds`
    ///
    /// Radius is drawn first so the position range `[r, W-r] x [r, H-r]`
    /// keeps the whole disc on screen.
    pub fn body(&mut self, bounds: &Bounds, params: &Parameters) -> Body {
        let radius = self.rng.gen_range(params.radius.clone());
        let x = NVec2::new(
            self.rng.gen_range(radius..=bounds.width - radius),
            self.rng.gen_range(radius..=bounds.height - radius),
        );
        let v = NVec2::new(
            self.rng.gen_range(-params.speed..=params.speed),
            self.rng.gen_range(-params.speed..=params.speed),
        );
        let color = self.color();
        Body::new(x, v, radius, color)
    }

    /// Random count, then that many random bodies
    pub fn bodies(&mut self, bounds: &Bounds, params: &Parameters) -> Vec<Body> {
        let n = self.body_count(params);
        (0..n).map(|_| self.body(bounds, params)).collect()
    }

    pub fn color(&mut self) -> Rgb {
        [self.rng.gen(), self.rng.gen(), self.rng.gen()]
    }
}
