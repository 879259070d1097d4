// sortty: step-by-step sorting algorithm visualizer

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::config::Config;
use sortty::input::parse_array;
use sortty::logging::{self, LogSink};
use sortty::playback::PlaybackController;
use sortty::ui::App;

/// Watch sorting algorithms run one comparison and swap at a time
#[derive(Debug, Parser)]
#[command(name = "sortty", version, about)]
struct Cli {
    /// TOML file with `algorithm`, `array` and `speed` keys
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// bubble, selection, insertion, merge, quick or counting
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Comma-separated integers, e.g. "64, 34, 25, 12"
    #[arg(long, allow_hyphen_values = true)]
    array: Option<String>,

    /// Playback speed from 100 (slowest) to 900 (fastest)
    #[arg(short, long)]
    speed: Option<u64>,

    /// Print the full step trace as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Write the merged settings to a TOML file and exit
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,

    /// Write log records to this file (the TUI never logs to the terminal)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn is_interactive(&self) -> bool {
        !self.dump && self.save_config.is_none()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(&LogSink::for_run(cli.is_interactive(), cli.log_file.as_deref()))?;

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(algorithm) = &cli.algorithm {
        config.algorithm = algorithm.clone();
    }
    if let Some(array) = &cli.array {
        config.array = parse_array(array)?;
    }
    if let Some(speed) = cli.speed {
        config.speed = speed;
    }

    let (algorithm, cadence) = config.validate()?;
    log::info!(
        "starting with {} on {} elements at speed {}",
        algorithm.display_name(),
        config.array.len(),
        cadence.display_speed()
    );

    if let Some(path) = &cli.save_config {
        config.save(path)?;
        log::info!("settings written to {}", path.display());
        return Ok(());
    }

    if cli.dump {
        let trace = algorithm.generate(&config.array)?;
        serde_json::to_writer_pretty(io::stdout().lock(), &trace)?;
        println!();
        return Ok(());
    }

    let controller = PlaybackController::new(config.array, cadence);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller, algorithm);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
