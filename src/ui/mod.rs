pub mod help;
pub mod meter;
pub mod process_table;
pub mod statusbar;
pub mod theme;
pub mod throughput;


use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;

use crate::app::App;
use crate::format::{format_rate, format_size};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    draw_meters(frame, columns[0], app);
    draw_rates(frame, columns[1], app);
    statusbar::render(frame, chunks[1], &app.theme);

    if app.show_help {
        help::render(frame, frame.area(), app);
    }
}

fn panel_constraint(collapsed: bool) -> Constraint {
    if collapsed {
        Constraint::Length(4)
    } else {
        Constraint::Min(7)
    }
}

/// Left column: CPU, RAM, GPU meter panels.
fn draw_meters(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            panel_constraint(app.collapsed.cpu),
            panel_constraint(app.collapsed.memory),
            panel_constraint(app.collapsed.gpu || !app.snapshot.gpu.found),
        ])
        .split(area);

    let snapshot = &app.snapshot;

    meter::render(
        frame,
        rows[0],
        &app.theme,
        " CPU Usage [1] ",
        f64::from(snapshot.cpu_percent),
        &format!("{:.1}%", snapshot.cpu_percent),
        (!app.collapsed.cpu).then_some(&app.history.cpu),
    );

    let memory_detail = format!(
        "Used: {} / Total: {} ({:.1}%)",
        format_size(snapshot.memory.used_bytes as f64),
        format_size(snapshot.memory.total_bytes as f64),
        snapshot.memory.percent,
    );
    meter::render(
        frame,
        rows[1],
        &app.theme,
        " RAM Usage [2] ",
        f64::from(snapshot.memory.percent),
        &memory_detail,
        (!app.collapsed.memory).then_some(&app.history.memory),
    );

    if snapshot.gpu.found {
        let gpu_detail = format!(
            "Memory: {:.0}MB / {:.0}MB | Temp: {:.0}C",
            snapshot.gpu.memory_used_mb, snapshot.gpu.memory_total_mb, snapshot.gpu.temperature_c,
        );
        meter::render(
            frame,
            rows[2],
            &app.theme,
            " GPU Usage [3] ",
            snapshot.gpu.load_percent,
            &gpu_detail,
            (!app.collapsed.gpu).then_some(&app.history.gpu),
        );
    } else {
        meter::render(
            frame,
            rows[2],
            &app.theme,
            " GPU Usage [3] ",
            0.0,
            "No NVIDIA GPU detected",
            None,
        );
    }
}

/// Right column: disk and network rate panels plus the process table.
fn draw_rates(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            panel_constraint(app.collapsed.disk),
            panel_constraint(app.collapsed.network),
            Constraint::Min(6),
        ])
        .split(area);

    let snapshot = &app.snapshot;

    let disk_lines: Vec<Line> = snapshot
        .disk_space_summary
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();
    throughput::render(
        frame,
        rows[0],
        &app.theme,
        " Disk Activity (MB/s) [4] ",
        disk_lines,
        (!app.collapsed.disk).then_some((&app.history.disk_read, &app.history.disk_write)),
        ("Read", "Write"),
    );

    let network_line = vec![Line::from(format!(
        "Upload: {} | Download: {}",
        format_rate(snapshot.network_io_rate.sent_bytes_s),
        format_rate(snapshot.network_io_rate.recv_bytes_s),
    ))];
    throughput::render(
        frame,
        rows[1],
        &app.theme,
        " Network Traffic (MB/s) [5] ",
        network_line,
        (!app.collapsed.network).then_some((&app.history.net_up, &app.history.net_down)),
        ("Upload", "Download"),
    );

    process_table::render(
        frame,
        rows[2],
        &app.theme,
        &snapshot.top_processes,
        app.process_rows,
    );
}
