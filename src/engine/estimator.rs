//! Closed-form ordinary least squares for a single predictor.

use serde::{Deserialize, Serialize};

use crate::data::SampleSet;
use crate::engine::error::{RegressionError, Result};

pub const MIN_SAMPLES: usize = 2;

/// Estimated model `y = slope * x + intercept`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
}

impl FitResult {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit a least-squares line through `samples`.
///
/// slope = Σ(dx·dy) / Σ(dx·dx) with deviations taken from the means,
/// intercept = mean_y − slope·mean_x. Both sums are accumulated in one pass.
pub fn fit(samples: &SampleSet) -> Result<FitResult> {
    if samples.len() < MIN_SAMPLES {
        return Err(RegressionError::InsufficientData {
            required: MIN_SAMPLES,
            actual: samples.len(),
        });
    }

    let mean_x = samples.mean_x();
    let mean_y = samples.mean_y();

    let mut ss_xy = 0.0;
    let mut ss_xx = 0.0;
    for s in samples {
        let dx = s.x - mean_x;
        let dy = s.y - mean_y;
        ss_xy += dx * dy;
        ss_xx += dx * dx;
    }

    if !ss_xx.is_finite() || !ss_xy.is_finite() {
        return Err(RegressionError::DegenerateInput(
            "non-finite values in samples".to_string(),
        ));
    }
    if ss_xx == 0.0 {
        return Err(RegressionError::DegenerateInput(
            "all x values are identical (zero x-variance)".to_string(),
        ));
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    Ok(FitResult { slope, intercept })
}
