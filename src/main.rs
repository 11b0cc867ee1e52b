use anyhow::{Context, Result, anyhow};
use clap::Parser;
use grid_snake::game::GameConfig;
use grid_snake::modes::PlayMode;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake on a wrap-around grid, in the terminal")]
struct Cli {
    /// JSON file with base settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Terminal columns per cell
    #[arg(long)]
    cell_size: Option<u16>,

    /// Game speed in ticks per second
    #[arg(long)]
    tps: Option<u32>,

    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here (filtered by RUST_LOG); nothing is logged otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(tps) = self.tps {
            config.ticks_per_second = tps;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

// The TUI owns the terminal, so logs only ever go to a file
fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err).context("Failed to install tracing subscriber"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_file.as_ref())?;

    let config = cli.game_config()?;

    let mut play_mode = PlayMode::new(config)?;
    play_mode.run().await?;

    Ok(())
}
