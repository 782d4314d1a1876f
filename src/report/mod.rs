pub mod builder;
pub mod render;

use serde::{Deserialize, Serialize};

pub use builder::build;

/// Qualitative band for an R² value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitQuality {
    Excellent,
    Good,
    Moderate,
    Weak,
    Poor,
}

impl FitQuality {
    /// Closed-open bands on [0, 1]. Values above 1 land in Excellent and
    /// values below 0 in Poor; NaN compares false everywhere and is Poor.
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= 0.8 {
            FitQuality::Excellent
        } else if r_squared >= 0.6 {
            FitQuality::Good
        } else if r_squared >= 0.4 {
            FitQuality::Moderate
        } else if r_squared >= 0.2 {
            FitQuality::Weak
        } else {
            FitQuality::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FitQuality::Excellent => "Excellent fit",
            FitQuality::Good => "Good fit",
            FitQuality::Moderate => "Moderate fit",
            FitQuality::Weak => "Weak fit",
            FitQuality::Poor => "Poor fit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FitQuality::Excellent => "model explains most variance in the data",
            FitQuality::Good => "model explains substantial variance in the data",
            FitQuality::Moderate => "model explains moderate variance in the data",
            FitQuality::Weak => "model explains limited variance in the data",
            FitQuality::Poor => "model explains very little variance in the data",
        }
    }

    pub fn interpretation(&self) -> String {
        format!("{} - {}", self.label(), self.description())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub sample_size: usize,
    pub mean_x: f64,
    pub mean_y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegressionCoefficients {
    pub slope_beta1: f64,
    pub intercept_beta0: f64,
    pub equation: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub r_squared: f64,
    pub r_squared_percentage: f64,
    pub quality: FitQuality,
    pub interpretation: String,
    pub total_sum_squares: f64,
    pub residual_sum_squares: f64,
}

/// Final, read-only result of one analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub data_summary: DataSummary,
    pub regression_coefficients: RegressionCoefficients,
    pub model_performance: ModelPerformance,
    pub analysis_insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries_are_closed_open() {
        assert_eq!(FitQuality::from_r_squared(0.8), FitQuality::Excellent);
        assert_eq!(FitQuality::from_r_squared(0.7999), FitQuality::Good);
        assert_eq!(FitQuality::from_r_squared(0.6), FitQuality::Good);
        assert_eq!(FitQuality::from_r_squared(0.4), FitQuality::Moderate);
        assert_eq!(FitQuality::from_r_squared(0.2), FitQuality::Weak);
        assert_eq!(FitQuality::from_r_squared(0.1999), FitQuality::Poor);
    }

    #[test]
    fn test_out_of_range_values_clamp_to_nearest_band() {
        assert_eq!(FitQuality::from_r_squared(1.5), FitQuality::Excellent);
        assert_eq!(FitQuality::from_r_squared(-3.0), FitQuality::Poor);
        assert_eq!(FitQuality::from_r_squared(f64::NAN), FitQuality::Poor);
    }

    #[test]
    fn test_interpretation_text() {
        assert_eq!(
            FitQuality::Excellent.interpretation(),
            "Excellent fit - model explains most variance in the data"
        );
        assert_eq!(FitQuality::Weak.label(), "Weak fit");
    }
}
