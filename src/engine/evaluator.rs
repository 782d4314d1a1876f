use serde::{Deserialize, Serialize};

use crate::data::SampleSet;
use crate::engine::error::{RegressionError, Result};
use crate::engine::estimator::{FitResult, MIN_SAMPLES};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoodnessOfFit {
    pub total_sum_squares: f64,
    pub residual_sum_squares: f64,
    pub r_squared: f64,
}

/// In-sample coefficient of determination of `fit` over `samples`.
///
/// R² = 1 − SS_res / SS_tot. Negative when the line does worse than the
/// constant mean, never above 1.
pub fn evaluate(samples: &SampleSet, fit: &FitResult) -> Result<GoodnessOfFit> {
    if samples.len() < MIN_SAMPLES {
        return Err(RegressionError::InsufficientData {
            required: MIN_SAMPLES,
            actual: samples.len(),
        });
    }

    let mean_y = samples.mean_y();

    let mut total_sum_squares = 0.0;
    let mut residual_sum_squares = 0.0;
    for s in samples {
        let predicted = fit.predict(s.x);
        total_sum_squares += (s.y - mean_y).powi(2);
        residual_sum_squares += (s.y - predicted).powi(2);
    }

    if !total_sum_squares.is_finite() || !residual_sum_squares.is_finite() {
        return Err(RegressionError::DegenerateInput(
            "non-finite values in samples or fit".to_string(),
        ));
    }
    if total_sum_squares == 0.0 {
        return Err(RegressionError::DegenerateInput(
            "all y values are identical (zero total variance)".to_string(),
        ));
    }

    Ok(GoodnessOfFit {
        total_sum_squares,
        residual_sum_squares,
        r_squared: 1.0 - residual_sum_squares / total_sum_squares,
    })
}
