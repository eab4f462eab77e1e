use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Row, Table};

use crate::format::truncate_unicode;
use crate::system::process::ProcessSample;
use crate::ui::theme::Theme;

const NAME_WIDTH: usize = 40;

/// Top-process table, padded with "-" rows up to `rows` so the panel keeps
/// a stable shape while the machine is idle.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    processes: &[ProcessSample],
    rows: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Top Processes (Total CPU %) ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));

    let header = Row::new(vec!["PID", "Name", "CPU %"]).style(
        Style::default()
            .fg(theme.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = (0..rows)
        .map(|i| match processes.get(i) {
            Some(process) => Row::new(vec![
                Cell::from(process.pid.to_string()),
                Cell::from(truncate_unicode(&process.name, NAME_WIDTH)),
                Cell::from(format!("{:.1}%", process.cpu_percent)),
            ])
            .style(Style::default().fg(theme.text)),
            None => Row::new(vec!["-", "-", "-"]).style(Style::default().fg(theme.text_dim)),
        })
        .collect();

    let table = Table::new(
        body,
        [
            Constraint::Length(8),
            Constraint::Min(12),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
