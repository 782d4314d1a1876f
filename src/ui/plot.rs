//! Full-screen terminal view of the samples and the fitted line.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::analysis::Analysis;
use crate::data::SampleSet;
use crate::engine::FitResult;
use crate::event::{EventHandler, PlotEvent};
use crate::ui::components::chart::{MAX_PLOTTED_POINTS, RegressionChart, thin_points};
use crate::ui::theme::Theme;

pub struct PlotView {
    pub points: Vec<(f64, f64)>,
    pub sample_size: usize,
    pub fit: FitResult,
    pub r_squared: f64,
    pub theme: Theme,
}

impl PlotView {
    pub fn new(samples: &SampleSet, analysis: &Analysis, theme: Theme) -> Self {
        Self {
            points: thin_points(&samples.to_pairs(), MAX_PLOTTED_POINTS),
            sample_size: samples.len(),
            fit: analysis.fit,
            r_squared: analysis.goodness.r_squared,
            theme,
        }
    }
}

/// Take over the terminal until the user quits.
pub fn show(view: &PlotView) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let events = EventHandler::new(Duration::from_millis(250));

    let result = run_view(&mut terminal, view, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_view(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    view: &PlotView,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, view))?;

        match events.next()? {
            PlotEvent::Key(key) if is_quit_key(key) => return Ok(()),
            PlotEvent::Key(_) | PlotEvent::Tick | PlotEvent::Resize => {}
        }
    }
}

pub fn is_quit_key(key: KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

pub fn render(frame: &mut ratatui::Frame, view: &PlotView) {
    let area = frame.area();
    let colors = &view.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header_info = format!(
        " {} samples | y = {:.6}x + {:.6} | R² = {:.4}",
        view.sample_size, view.fit.slope, view.fit.intercept, view.r_squared
    );
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " olsfit ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            header_info,
            Style::default().fg(colors.fg()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    let original = RegressionChart::new(
        format!("Original Data Points ({} Points)", view.sample_size),
        &view.points,
        &view.theme,
    );
    frame.render_widget(original, panels[0]);

    let fitted = RegressionChart::new(
        format!("Linear Regression Analysis, R² = {:.4}", view.r_squared),
        &view.points,
        &view.theme,
    )
    .with_fit(view.fit);
    frame.render_widget(fitted, panels[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        " [q/Esc] Quit ",
        Style::default().fg(colors.axis()),
    )));
    frame.render_widget(footer, layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_render_shows_equation_and_both_panels() {
        let set = SampleSet::from_pairs(&[(0.0, 0.0), (1.0, 0.5), (2.0, 1.0), (3.0, 2.1)]);
        let analysis = analysis::run(&set).unwrap();
        let view = PlotView::new(&set, &analysis, Theme::default());

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| render(frame, &view)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("y = 0.680000x + -0.120000"));
        assert!(text.contains("Original Data Points"));
        assert!(text.contains("Linear Regression Analysis"));
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
