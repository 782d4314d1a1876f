use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Widget};

use crate::engine::FitResult;
use crate::ui::theme::Theme;

/// Upper bound on plotted points; braille cells saturate long before this.
pub const MAX_PLOTTED_POINTS: usize = 2000;

/// Scatter of the samples, optionally overlaid with the fitted line.
pub struct RegressionChart<'a> {
    pub title: String,
    pub points: &'a [(f64, f64)],
    pub fit: Option<FitResult>,
    pub theme: &'a Theme,
}

impl<'a> RegressionChart<'a> {
    pub fn new(title: impl Into<String>, points: &'a [(f64, f64)], theme: &'a Theme) -> Self {
        Self {
            title: title.into(),
            points,
            fit: None,
            theme,
        }
    }

    pub fn with_fit(mut self, fit: FitResult) -> Self {
        self.fit = Some(fit);
        self
    }
}

/// Evenly strided subset of at most `max` points, first point kept.
pub fn thin_points(points: &[(f64, f64)], max: usize) -> Vec<(f64, f64)> {
    if max == 0 {
        return Vec::new();
    }
    if points.len() <= max {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(max);
    points.iter().step_by(stride).copied().collect()
}

/// Padded [min, max] of one coordinate, widened when the range is empty.
fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 0.5 };
    [lo - pad, hi + pad]
}

impl Widget for RegressionChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(format!(" {} ", self.title))
            .border_style(Style::default().fg(colors.border()));

        if self.points.is_empty() {
            block.render(area, buf);
            return;
        }

        let x_bounds = bounds(self.points.iter().map(|p| p.0));
        let line: Vec<(f64, f64)> = match self.fit {
            Some(fit) => {
                let (lo, hi) = self
                    .points
                    .iter()
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                        (lo.min(p.0), hi.max(p.0))
                    });
                vec![(lo, fit.predict(lo)), (hi, fit.predict(hi))]
            }
            None => Vec::new(),
        };
        let y_bounds = bounds(self.points.iter().chain(line.iter()).map(|p| p.1));

        let mut datasets = vec![
            Dataset::default()
                .name("samples")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.points()))
                .data(self.points),
        ];
        if let Some(fit) = self.fit {
            datasets.push(
                Dataset::default()
                    .name(format!("y = {:.3}x + {:.3}", fit.slope, fit.intercept))
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(colors.fit_line()))
                    .data(&line),
            );
        }

        let axis_style = Style::default().fg(colors.axis());
        let labels = |b: [f64; 2]| {
            vec![
                Span::raw(format!("{:.2}", b[0])),
                Span::raw(format!("{:.2}", (b[0] + b[1]) / 2.0)),
                Span::raw(format!("{:.2}", b[1])),
            ]
        };

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("X-coordinate")
                    .style(axis_style)
                    .bounds(x_bounds)
                    .labels(labels(x_bounds)),
            )
            .y_axis(
                Axis::default()
                    .title("Y-coordinate")
                    .style(axis_style)
                    .bounds(y_bounds)
                    .labels(labels(y_bounds)),
            );

        chart.render(area, buf);
    }
}
