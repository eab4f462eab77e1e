use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::system::history::MetricSeries;
use crate::ui::theme::Theme;

/// Two-series rate panel (disk read/write, network up/down): detail text on
/// top, a line chart with autoscaled y-axis below. `chart == None` renders
/// the collapsed form with just the text.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    detail_lines: Vec<Line>,
    chart: Option<(&MetricSeries, &MetricSeries)>,
    series_names: (&str, &str),
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

    let text_height = (detail_lines.len() as u16).min(inner.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(text_height), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(detail_lines).style(Style::default().fg(theme.text)),
        chunks[0],
    );

    let Some((primary, secondary)) = chart else {
        return;
    };
    if chunks[1].height < 3 {
        return;
    }

    let primary_points = primary.as_points();
    let secondary_points = secondary.as_points();

    // Autoscale like the source graphs: 20% headroom over the window's
    // peak, with a floor so a flat zero line still has an axis.
    let y_max = (primary.max().max(secondary.max()) * 1.2).max(0.1);
    let x_max = (primary.capacity().saturating_sub(1)).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .name(series_names.0)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.series_primary))
            .data(&primary_points),
        Dataset::default()
            .name(series_names.1)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme.series_secondary))
            .data(&secondary_points),
    ];

    let chart = Chart::new(datasets)
        .x_axis(Axis::default().bounds([0.0, x_max]))
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::styled("0", Style::default().fg(theme.text_dim)),
                    Span::styled(format!("{y_max:.1}"), Style::default().fg(theme.text_dim)),
                ]),
        );
    frame.render_widget(chart, chunks[1]);
}
