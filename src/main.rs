use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use sysdash::app::App;
use sysdash::config::{self, load_config, load_config_from_path};
use sysdash::event::{Event, EventHandler};
use sysdash::system::sampler;
use sysdash::system::store::SnapshotStore;
use sysdash::ui;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "sysdash",
    about = "Terminal telemetry dashboard with live gauges and charts"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render refresh interval in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Sampler interval in milliseconds
    #[arg(long)]
    sample_rate: Option<u64>,

    /// Write logs to this file (the terminal itself belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    init_logging(cli.log_file.as_deref())?;

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();
    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let store = SnapshotStore::new();
    let sampler = sampler::spawn(
        store.clone(),
        Duration::from_millis(config.general.sample_rate_ms.max(1)),
    )?;

    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms.max(1));
    let mut app = App::new(&config, store);
    let mut events = EventHandler::new(tick_rate);

    app.on_tick();
    draw(terminal, &mut app);

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                    }
                }
                Event::Tick => app.on_tick(),
                Event::Resize => {}
            }
            draw(terminal, &mut app);
        }
    }

    sampler.stop();
    Ok(())
}

/// A failed draw is logged and retried on the next event; rendering errors
/// never take the dashboard down.
fn draw(terminal: &mut ratatui::DefaultTerminal, app: &mut App) {
    if let Err(err) = terminal.draw(|frame| ui::draw(frame, app)) {
        warn!(error = %err, "draw failed, retrying next cycle");
    }
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(rate) = cli.sample_rate {
        config.general.sample_rate_ms = rate;
    }

    config
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
