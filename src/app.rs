use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::{Action, Panel};
use crate::config::{Config, KeybindsConfig, parse_key};
use crate::system::history::ChartHistory;
use crate::system::snapshot::Snapshot;
use crate::system::store::SnapshotStore;
use crate::ui::theme::Theme;

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
    pub help: KeyCode,
    pub refresh: KeyCode,
    pub cpu_chart: KeyCode,
    pub memory_chart: KeyCode,
    pub gpu_chart: KeyCode,
    pub disk_chart: KeyCode,
    pub network_chart: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
            help: parse_key(&kb.help).unwrap_or(KeyCode::Char('?')),
            refresh: parse_key(&kb.refresh).unwrap_or(KeyCode::Char('r')),
            cpu_chart: parse_key(&kb.cpu_chart).unwrap_or(KeyCode::Char('1')),
            memory_chart: parse_key(&kb.memory_chart).unwrap_or(KeyCode::Char('2')),
            gpu_chart: parse_key(&kb.gpu_chart).unwrap_or(KeyCode::Char('3')),
            disk_chart: parse_key(&kb.disk_chart).unwrap_or(KeyCode::Char('4')),
            network_chart: parse_key(&kb.network_chart).unwrap_or(KeyCode::Char('5')),
        }
    }

    /// Returns (key_label, description) pairs for the help overlay.
    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        vec![
            (key_label(self.quit), "Quit"),
            (key_label(self.help), "Toggle help"),
            (key_label(self.refresh), "Re-read latest snapshot"),
            (key_label(self.cpu_chart), "Collapse/expand CPU chart"),
            (key_label(self.memory_chart), "Collapse/expand RAM chart"),
            (key_label(self.gpu_chart), "Collapse/expand GPU chart"),
            (key_label(self.disk_chart), "Collapse/expand disk chart"),
            (key_label(self.network_chart), "Collapse/expand network chart"),
            ("Ctrl+C".to_string(), "Quit (always)"),
        ]
    }
}

fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "?".to_string(),
    }
}

/// Which charts are currently collapsed. A collapsed panel keeps showing
/// its numeric readout; only the chart is hidden and its window frozen.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollapsedCharts {
    pub cpu: bool,
    pub memory: bool,
    pub gpu: bool,
    pub disk: bool,
    pub network: bool,
}

impl CollapsedCharts {
    pub fn toggle(&mut self, panel: Panel) {
        let flag = self.flag_mut(panel);
        *flag = !*flag;
    }

    pub fn is_collapsed(&self, panel: Panel) -> bool {
        match panel {
            Panel::Cpu => self.cpu,
            Panel::Memory => self.memory,
            Panel::Gpu => self.gpu,
            Panel::Disk => self.disk,
            Panel::Network => self.network,
        }
    }

    fn flag_mut(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Cpu => &mut self.cpu,
            Panel::Memory => &mut self.memory,
            Panel::Gpu => &mut self.gpu,
            Panel::Disk => &mut self.disk,
            Panel::Network => &mut self.network,
        }
    }
}

pub struct App {
    pub running: bool,
    store: SnapshotStore,
    pub snapshot: Snapshot,
    pub history: ChartHistory,
    pub collapsed: CollapsedCharts,
    pub show_help: bool,
    pub process_rows: usize,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
}

impl App {
    pub fn new(config: &Config, store: SnapshotStore) -> Self {
        App {
            running: true,
            store,
            snapshot: Snapshot::default(),
            history: ChartHistory::new(config.general.chart_points),
            collapsed: CollapsedCharts::default(),
            show_help: false,
            process_rows: config.general.process_rows,
            theme: Theme::from_config(&config.colors),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
        }
    }

    /// One render cycle's data work: copy the latest snapshot out of the
    /// store (the lock is held only for the clone) and append to the
    /// rolling windows of every visible chart.
    pub fn on_tick(&mut self) {
        self.snapshot = self.store.read();
        self.record_history();
    }

    fn record_history(&mut self) {
        if !self.collapsed.cpu {
            self.history.cpu.push(f64::from(self.snapshot.cpu_percent));
        }
        if !self.collapsed.memory {
            self.history.memory.push(f64::from(self.snapshot.memory.percent));
        }
        if !self.collapsed.gpu && self.snapshot.gpu.found {
            self.history.gpu.push(self.snapshot.gpu.load_percent);
        }
        if !self.collapsed.disk {
            self.history.disk_read.push(self.snapshot.disk_io_rate.read_mb_s);
            self.history.disk_write.push(self.snapshot.disk_io_rate.write_mb_s);
        }
        if !self.collapsed.network {
            self.history.net_up.push(self.snapshot.network_io_rate.up_mb_s);
            self.history.net_down.push(self.snapshot.network_io_rate.down_mb_s);
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        // Ctrl+C always quits (hardwired safety)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if self.show_help {
            // In help mode only the help key and Esc dismiss, everything
            // else is ignored.
            if key.code == self.keybinds.help || key.code == KeyCode::Esc {
                return Action::ToggleHelp;
            }
            return Action::None;
        }

        let kb = &self.keybinds;
        let code = key.code;
        if code == kb.quit {
            return Action::Quit;
        }
        if code == kb.help {
            return Action::ToggleHelp;
        }
        if code == kb.refresh {
            return Action::Refresh;
        }
        if code == kb.cpu_chart {
            return Action::ToggleChart(Panel::Cpu);
        }
        if code == kb.memory_chart {
            return Action::ToggleChart(Panel::Memory);
        }
        if code == kb.gpu_chart {
            return Action::ToggleChart(Panel::Gpu);
        }
        if code == kb.disk_chart {
            return Action::ToggleChart(Panel::Disk);
        }
        if code == kb.network_chart {
            return Action::ToggleChart(Panel::Network);
        }

        Action::None
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ToggleChart(panel) => self.collapsed.toggle(panel),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::Refresh => self.on_tick(),
            Action::None => {}
        }
    }

    pub fn help_entries(&self) -> Vec<(String, &'static str)> {
        self.keybinds.help_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::snapshot::{DiskIoRate, GpuStats, MemoryStats, NetworkIoRate};

    fn make_app() -> App {
        App::new(&Config::default(), SnapshotStore::new())
    }

    fn make_app_with_snapshot(snapshot: Snapshot) -> App {
        let store = SnapshotStore::new();
        store.publish(snapshot);
        App::new(&Config::default(), store)
    }

    fn busy_snapshot() -> Snapshot {
        Snapshot {
            cpu_percent: 25.0,
            memory: MemoryStats {
                percent: 50.0,
                used_bytes: 4 << 30,
                total_bytes: 8 << 30,
            },
            gpu: GpuStats {
                found: true,
                load_percent: 30.0,
                memory_used_mb: 1024.0,
                memory_total_mb: 8192.0,
                temperature_c: 55.0,
            },
            disk_space_summary: "/dev/sda1 (/): 50.0% Used of 1.00GB\n".to_string(),
            disk_io_rate: DiskIoRate {
                read_mb_s: 1.5,
                write_mb_s: 0.5,
            },
            network_io_rate: NetworkIoRate {
                sent_bytes_s: 1024.0,
                recv_bytes_s: 2048.0,
                up_mb_s: 0.001,
                down_mb_s: 0.002,
            },
            top_processes: Vec::new(),
        }
    }

    #[test]
    fn default_keybinds_map_to_actions() {
        let app = make_app();

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);

        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleChart(Panel::Cpu));

        let key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleChart(Panel::Network));

        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);

        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);
    }

    #[test]
    fn help_mode_blocks_other_keys() {
        let mut app = make_app();
        app.dispatch(Action::ToggleHelp);
        assert!(app.show_help);

        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::None);

        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.map_key(key), Action::ToggleHelp);

        // Ctrl+C still works (safety)
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.map_key(key), Action::Quit);
    }

    #[test]
    fn tick_copies_snapshot_and_records_history() {
        let mut app = make_app_with_snapshot(busy_snapshot());
        app.on_tick();

        assert_eq!(app.snapshot.cpu_percent, 25.0);
        assert_eq!(app.history.cpu.latest(), Some(25.0));
        assert_eq!(app.history.memory.latest(), Some(50.0));
        assert_eq!(app.history.gpu.latest(), Some(30.0));
        assert_eq!(app.history.disk_read.latest(), Some(1.5));
        assert_eq!(app.history.net_down.latest(), Some(0.002));
    }

    #[test]
    fn collapsed_chart_freezes_its_window() {
        let mut app = make_app_with_snapshot(busy_snapshot());
        app.on_tick();
        app.dispatch(Action::ToggleChart(Panel::Cpu));
        app.on_tick();

        // CPU stayed at one point while the others kept accumulating.
        assert_eq!(app.history.cpu.len(), 1);
        assert_eq!(app.history.memory.len(), 2);
        assert_eq!(app.history.disk_read.len(), 2);

        app.dispatch(Action::ToggleChart(Panel::Cpu));
        app.on_tick();
        assert_eq!(app.history.cpu.len(), 2);
    }

    #[test]
    fn missing_gpu_records_no_points() {
        let mut snapshot = busy_snapshot();
        snapshot.gpu = GpuStats::default();
        let mut app = make_app_with_snapshot(snapshot);
        app.on_tick();

        assert!(app.history.gpu.is_empty());
        assert_eq!(app.history.cpu.len(), 1);
    }

    #[test]
    fn refresh_action_re_reads_the_store() {
        let mut app = make_app_with_snapshot(busy_snapshot());
        app.dispatch(Action::Refresh);
        assert_eq!(app.snapshot.memory.percent, 50.0);
    }
}
