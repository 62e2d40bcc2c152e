use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::config::{GameConfig, SettingKind, Validate};

#[derive(Parser, Debug)]
#[command(name = "grid-snake", about = "Classic snake on a configurable grid")]
pub struct Args {
    /// YAML file with speed, width, height and cell_size
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Steps per second
    #[arg(long)]
    pub speed: Option<i32>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<i32>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<i32>,

    /// Cell size in pixels
    #[arg(long)]
    pub cell_size: Option<i32>,

    /// Write logs to this file. The terminal itself is taken by the game.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Args {
    /// Defaults, then the config file, then command-line overrides.
    pub fn resolve_config(&self) -> Result<GameConfig, String> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        let overrides = [
            (SettingKind::Speed, self.speed),
            (SettingKind::Width, self.width),
            (SettingKind::Height, self.height),
            (SettingKind::CellSize, self.cell_size),
        ];
        for (kind, value) in overrides {
            if let Some(value) = value {
                config.set(kind, value);
            }
        }

        config.validate()?;
        Ok(config)
    }
}
