use crate::data::SampleSet;
use crate::engine::{FitResult, GoodnessOfFit};
use crate::report::{DataSummary, FitQuality, ModelPerformance, RegressionCoefficients, Report};

/// Assemble the report for a finished fit. Means are recomputed from
/// `samples` so the summary does not depend on estimator internals.
pub fn build(samples: &SampleSet, fit: &FitResult, goodness: &GoodnessOfFit) -> Report {
    let quality = FitQuality::from_r_squared(goodness.r_squared);

    Report {
        data_summary: DataSummary {
            sample_size: samples.len(),
            mean_x: samples.mean_x(),
            mean_y: samples.mean_y(),
        },
        regression_coefficients: RegressionCoefficients {
            slope_beta1: fit.slope,
            intercept_beta0: fit.intercept,
            equation: equation(fit),
        },
        model_performance: ModelPerformance {
            r_squared: goodness.r_squared,
            r_squared_percentage: goodness.r_squared * 100.0,
            quality,
            interpretation: quality.interpretation(),
            total_sum_squares: goodness.total_sum_squares,
            residual_sum_squares: goodness.residual_sum_squares,
        },
        analysis_insights: insights(fit, goodness),
    }
}

pub fn equation(fit: &FitResult) -> String {
    format!("y = {:.6}x + {:.6}", fit.slope, fit.intercept)
}

fn insights(fit: &FitResult, goodness: &GoodnessOfFit) -> Vec<String> {
    // Zero slope reads as negative.
    let direction = if fit.slope > 0.0 { "positive" } else { "negative" };
    vec![
        format!(
            "The model explains {:.2}% of the variance in the dependent variable.",
            goodness.r_squared * 100.0
        ),
        format!("The relationship between X and Y is {direction}."),
        format!(
            "For every unit increase in X, Y increases by approximately {:.4} units.",
            fit.slope
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goodness(r_squared: f64) -> GoodnessOfFit {
        GoodnessOfFit {
            total_sum_squares: 10.0,
            residual_sum_squares: 10.0 * (1.0 - r_squared),
            r_squared,
        }
    }

    #[test]
    fn test_build_fills_every_section() {
        let set = SampleSet::from_pairs(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let fit = FitResult {
            slope: 1.0,
            intercept: 0.0,
        };
        let report = build(&set, &fit, &goodness(1.0));

        assert_eq!(report.data_summary.sample_size, 3);
        assert!((report.data_summary.mean_x - 1.0).abs() < 1e-12);
        assert!((report.data_summary.mean_y - 1.0).abs() < 1e-12);
        assert_eq!(
            report.regression_coefficients.equation,
            "y = 1.000000x + 0.000000"
        );
        assert_eq!(report.model_performance.quality, FitQuality::Excellent);
        assert_eq!(report.model_performance.r_squared_percentage, 100.0);
        assert_eq!(
            report.analysis_insights,
            vec![
                "The model explains 100.00% of the variance in the dependent variable.",
                "The relationship between X and Y is positive.",
                "For every unit increase in X, Y increases by approximately 1.0000 units.",
            ]
        );
    }

    #[test]
    fn test_zero_slope_is_reported_negative() {
        let set = SampleSet::from_pairs(&[(0.0, 1.0), (1.0, 2.0)]);
        let fit = FitResult {
            slope: 0.0,
            intercept: 1.5,
        };
        let report = build(&set, &fit, &goodness(0.0));
        assert_eq!(
            report.analysis_insights[1],
            "The relationship between X and Y is negative."
        );
        assert_eq!(report.model_performance.quality, FitQuality::Poor);
    }

    #[test]
    fn test_negative_slope_formatting() {
        let fit = FitResult {
            slope: -0.123456789,
            intercept: 2.5,
        };
        assert_eq!(equation(&fit), "y = -0.123457x + 2.500000");
        let lines = insights(&fit, &goodness(0.456789));
        assert_eq!(
            lines[0],
            "The model explains 45.68% of the variance in the dependent variable."
        );
        assert!(lines[2].ends_with("approximately -0.1235 units."));
    }
}
