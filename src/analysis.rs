use tracing::{info, warn};

use crate::data::SampleSet;
use crate::engine::{self, FitResult, GoodnessOfFit, RegressionError};
use crate::report::{self, Report};

/// Everything one pipeline run produced.
#[derive(Clone, Debug)]
pub struct Analysis {
    pub fit: FitResult,
    pub goodness: GoodnessOfFit,
    pub report: Report,
}

/// SampleSet -> FitResult -> GoodnessOfFit -> Report. Any failing stage
/// aborts the run; no partial result is returned.
pub fn run(samples: &SampleSet) -> Result<Analysis, RegressionError> {
    info!(sample_size = samples.len(), "starting linear regression analysis");

    let fit = engine::fit(samples).inspect_err(|e| warn!("fit failed: {e}"))?;
    info!(
        "slope (beta1): {:.6}, intercept (beta0): {:.6}",
        fit.slope, fit.intercept
    );

    let goodness =
        engine::evaluate(samples, &fit).inspect_err(|e| warn!("evaluation failed: {e}"))?;
    info!(
        "R-squared: {:.6} (SST {:.6}, SSR {:.6})",
        goodness.r_squared, goodness.total_sum_squares, goodness.residual_sum_squares
    );

    let report = report::build(samples, &fit, &goodness);
    info!(
        "mean x: {:.6}, mean y: {:.6}; {}",
        report.data_summary.mean_x,
        report.data_summary.mean_y,
        report.model_performance.quality.label()
    );

    Ok(Analysis {
        fit,
        goodness,
        report,
    })
}
