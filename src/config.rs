use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// One of the four values adjustable while the game runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SettingKind {
    Speed,
    Width,
    Height,
    CellSize,
}

impl SettingKind {
    pub const ALL: [SettingKind; 4] = [
        SettingKind::Speed,
        SettingKind::Width,
        SettingKind::Height,
        SettingKind::CellSize,
    ];

    /// Inclusive range of accepted values.
    pub fn bounds(&self) -> (i32, i32) {
        match self {
            SettingKind::Speed => (1, 40),
            SettingKind::Width => (5, 60),
            SettingKind::Height => (5, 30),
            SettingKind::CellSize => (10, 40),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingKind::Speed => "SPEED",
            SettingKind::Width => "WIDTH",
            SettingKind::Height => "HEIGHT",
            SettingKind::CellSize => "CELL",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Steps per second
    pub speed: i32,
    /// Grid width in cells
    pub width: i32,
    /// Grid height in cells
    pub height: i32,
    /// Cell size in pixels
    pub cell_size: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: 10,
            width: 10,
            height: 10,
            cell_size: 20,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        for kind in SettingKind::ALL {
            let (min, max) = kind.bounds();
            let value = self.get(kind);
            if !(min..=max).contains(&value) {
                return Err(format!(
                    "{} must be between {} and {}, got {}",
                    kind.label().to_lowercase(),
                    min,
                    max,
                    value
                ));
            }
        }
        Ok(())
    }
}

impl GameConfig {
    pub fn get(&self, kind: SettingKind) -> i32 {
        match kind {
            SettingKind::Speed => self.speed,
            SettingKind::Width => self.width,
            SettingKind::Height => self.height,
            SettingKind::CellSize => self.cell_size,
        }
    }

    pub fn set(&mut self, kind: SettingKind, value: i32) {
        let slot = match kind {
            SettingKind::Speed => &mut self.speed,
            SettingKind::Width => &mut self.width,
            SettingKind::Height => &mut self.height,
            SettingKind::CellSize => &mut self.cell_size,
        };
        *slot = value;
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: GameConfig = serde_yaml_ng::from_str(content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;

        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Reads a YAML config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(Self::default()),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }
}
