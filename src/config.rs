//! Game settings, read from a JSON file in the user's config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::builtin_assets;
use crate::game::session::{
    DEFAULT_GAP_PX, DEFAULT_MATCH_REVEAL_MS, DEFAULT_MISMATCH_REVEAL_MS, DEFAULT_WIN_DELAY_MS,
};
use crate::game::{AssetId, CardCount, LayoutPolicy, SessionSettings, Timings};

const CONFIG_DIR_NAME: &str = "pairs";
const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_PATH_ENV: &str = "PAIRS_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameConfig {
    /// Directory the image files are loaded from.
    #[serde(default = "default_image_dir")]
    pub image_dir: PathBuf,
    /// Ordered image file names making up the catalog.
    #[serde(default = "builtin_assets")]
    pub assets: Vec<String>,
    /// Cards on the board; `None` uses the whole catalog.
    #[serde(default)]
    pub card_count: Option<usize>,
    #[serde(default = "default_separator")]
    pub separator: char,
    #[serde(default)]
    pub layout: LayoutPolicy,
    #[serde(default = "default_gap_px")]
    pub gap_px: u32,
    #[serde(default = "default_match_reveal_ms")]
    pub match_reveal_ms: u64,
    #[serde(default = "default_mismatch_reveal_ms")]
    pub mismatch_reveal_ms: u64,
    #[serde(default = "default_win_delay_ms")]
    pub win_delay_ms: u64,
}

fn default_image_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_separator() -> char {
    '_'
}

fn default_gap_px() -> u32 {
    DEFAULT_GAP_PX
}

fn default_match_reveal_ms() -> u64 {
    DEFAULT_MATCH_REVEAL_MS
}

fn default_mismatch_reveal_ms() -> u64 {
    DEFAULT_MISMATCH_REVEAL_MS
}

fn default_win_delay_ms() -> u64 {
    DEFAULT_WIN_DELAY_MS
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            image_dir: default_image_dir(),
            assets: builtin_assets(),
            card_count: None,
            separator: default_separator(),
            layout: LayoutPolicy::default(),
            gap_px: default_gap_px(),
            match_reveal_ms: default_match_reveal_ms(),
            mismatch_reveal_ms: default_mismatch_reveal_ms(),
            win_delay_ms: default_win_delay_ms(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Loads from [`config_path`]; a missing or broken file falls back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "config loaded");
                config
            }
            Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring config file");
                Self::default()
            }
        }
    }

    pub fn asset_ids(&self) -> Vec<AssetId> {
        self.assets.iter().map(|name| AssetId::new(name.as_str())).collect()
    }

    pub fn card_count(&self) -> CardCount {
        CardCount::from_option(self.card_count)
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            layout: self.layout,
            separator: self.separator,
            gap_px: self.gap_px,
            timings: Timings {
                match_reveal: Duration::from_millis(self.match_reveal_ms),
                mismatch_reveal: Duration::from_millis(self.mismatch_reveal_ms),
                win_delay: Duration::from_millis(self.win_delay_ms),
            },
        }
    }
}

/// `$PAIRS_CONFIG`, else `$XDG_CONFIG_HOME/pairs/config.json`, else `~/.config/pairs/config.json`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_PATH_ENV)
        && !explicit.trim().is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    let base = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(env::var("HOME").ok()?).join(".config"),
    };
    Some(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Same switch semantics as a debug env toggle: `1`, `true`, `yes` or `on`.
pub fn flag_enabled(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    matches!(v.as_str(), "1" | "true" | "yes" | "on")
}
