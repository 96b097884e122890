use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, NamedColor, Session};
use grid_snake::modes::HumanMode;
use log::info;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Snake in the terminal, with mouse buttons and custom colors")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Name shown next to the score
    #[arg(long, default_value = "Player")]
    player: String,

    /// Snake color (red, green, blue, yellow, black, white)
    #[arg(long, default_value = "green")]
    snake_color: NamedColor,

    /// Food color (red, green, blue, yellow, black, white)
    #[arg(long, default_value = "red")]
    food_color: NamedColor,

    /// Write logs here instead of stderr, which the game screen uses
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
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn session(&self) -> Session {
        Session {
            player_name: self.player.clone(),
            snake_color: self.snake_color,
            food_color: self.food_color,
        }
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_ref())?;

    let config = cli.game_config()?;
    info!("loaded config: {:?}", config);

    let mut human_mode = HumanMode::new(config, cli.session());
    human_mode.run().await?;

    Ok(())
}
