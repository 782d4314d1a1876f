use std::fmt::Write;

use crate::report::Report;

const RULE_WIDTH: usize = 50;

/// Console rendering of a report, one section per block.
pub fn render_text(report: &Report) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "ANALYSIS RESULTS");
    let _ = writeln!(out, "{rule}");

    let summary = &report.data_summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "Data Summary:");
    let _ = writeln!(out, "  Sample Size: {}", group_thousands(summary.sample_size));
    let _ = writeln!(out, "  Mean X: {:.6}", summary.mean_x);
    let _ = writeln!(out, "  Mean Y: {:.6}", summary.mean_y);

    let coefficients = &report.regression_coefficients;
    let _ = writeln!(out);
    let _ = writeln!(out, "Regression Equation:");
    let _ = writeln!(out, "  {}", coefficients.equation);
    let _ = writeln!(out, "  Slope (β₁): {:.6}", coefficients.slope_beta1);
    let _ = writeln!(out, "  Intercept (β₀): {:.6}", coefficients.intercept_beta0);

    let performance = &report.model_performance;
    let _ = writeln!(out);
    let _ = writeln!(out, "Model Performance:");
    let _ = writeln!(out, "  R-squared: {:.6}", performance.r_squared);
    let _ = writeln!(out, "  R-squared (%): {:.2}%", performance.r_squared_percentage);
    let _ = writeln!(out, "  Interpretation: {}", performance.interpretation);

    let _ = writeln!(out);
    let _ = writeln!(out, "Key Insights:");
    for insight in &report.analysis_insights {
        let _ = writeln!(out, "  • {insight}");
    }

    out
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
