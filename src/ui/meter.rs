use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Sparkline};

use crate::system::history::MetricSeries;
use crate::ui::theme::Theme;

/// Percent-style panel: gauge on top, one detail line, optional history
/// sparkline below. `series == None` renders the collapsed form (or a
/// metric with no data, like an absent GPU).
pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    percent: f64,
    detail: &str,
    series: Option<&MetricSeries>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.gauge_filled)
                .bg(theme.gauge_unfilled),
        )
        .ratio(ratio)
        .label(format!("{percent:.1}%"));
    frame.render_widget(gauge, chunks[0]);

    if chunks[1].height > 0 {
        frame.render_widget(
            Paragraph::new(detail.to_string()).style(Style::default().fg(theme.text)),
            chunks[1],
        );
    }

    if let Some(series) = series
        && chunks[2].height > 0
        && !series.is_empty()
    {
        let bars = series.as_bars();
        let sparkline = Sparkline::default()
            .data(&bars)
            .max(100)
            .style(Style::default().fg(theme.series_primary));
        frame.render_widget(sparkline, chunks[2]);
    }
}
