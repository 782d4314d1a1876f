use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::data::{Sample, SampleSet};
use crate::generator::SampleGenerator;

/// Points scattered around `y = true_slope * x + true_intercept` with
/// uniform noise in `[-noise_range, noise_range)` and x drawn from `[0, 1)`.
pub struct LinearNoiseGenerator {
    pub true_slope: f64,
    pub true_intercept: f64,
    pub noise_range: f64,
    rng: SmallRng,
}

impl LinearNoiseGenerator {
    pub fn new(true_slope: f64, true_intercept: f64, noise_range: f64, rng: SmallRng) -> Self {
        Self {
            true_slope,
            true_intercept,
            noise_range,
            rng,
        }
    }

    pub fn with_seed(
        true_slope: f64,
        true_intercept: f64,
        noise_range: f64,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self::new(true_slope, true_intercept, noise_range, rng)
    }
}

impl SampleGenerator for LinearNoiseGenerator {
    fn generate(&mut self, count: usize) -> SampleSet {
        let samples = (0..count)
            .map(|_| {
                let x: f64 = self.rng.gen_range(0.0..1.0);
                let u: f64 = self.rng.gen_range(0.0..1.0);
                let noise = -self.noise_range + 2.0 * self.noise_range * u;
                Sample::new(x, self.true_slope * x + self.true_intercept + noise)
            })
            .collect();
        SampleSet::new(samples)
    }
}
