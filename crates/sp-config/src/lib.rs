//! sp-config: map files and valuation settings
//!
//! Maps are stored as JSON objects keyed by floor number, the same shape the
//! seed-based map generator emits. Settings hold the room weights, state
//! rules and starting resources used when ranking paths. Settings are only
//! ever read here; nothing in this crate writes them back.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use sp_core::{Map, MapError, Room, RoomValues};

/// Rooms keyed by floor number, as stored on disk
type Floors = BTreeMap<u8, Vec<Room>>;

/// Directory name under the platform config directory
pub const APP_DIR: &str = "spire-paths";

/// Settings file name inside [`APP_DIR`]
pub const SETTINGS_FILE: &str = "settings.json";

/// Gold in hand when none is configured
pub const DEFAULT_GOLD: f64 = 99.0;

/// Map and settings file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid map: {0}")]
    Map(#[from] MapError),
}

/// Everything the ranking needs besides the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Room weights and state rules
    pub values: RoomValues,
    /// Gold in hand at the start of every path
    pub gold: f64,
    /// Fights already taken before an explicitly chosen start room
    pub fights_before_path: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            values: RoomValues::default(),
            gold: DEFAULT_GOLD,
            fights_before_path: 0,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>, ConfigError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ConfigError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Load and validate a map file
pub fn load_map(path: impl AsRef<Path>) -> Result<Map, ConfigError> {
    let path = path.as_ref();
    // Validate separately so bad maps surface as `MapError`, not JSON errors
    let floors: Floors = serde_json::from_reader(open(path)?)?;
    let map = Map::try_from(floors)?;
    info!(
        path = %path.display(),
        floors = map.depth(),
        rooms = map.room_count(),
        "loaded map"
    );
    Ok(map)
}

/// Parse a map from a JSON string
pub fn parse_map(json: &str) -> Result<Map, ConfigError> {
    let floors: Floors = serde_json::from_str(json)?;
    Ok(Map::try_from(floors)?)
}

/// Write a map as pretty-printed JSON
pub fn save_map(map: &Map, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), map)?;
    Ok(())
}

/// Load settings from a file
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let settings = serde_json::from_reader(open(path)?)?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Default settings location: `<config dir>/spire-paths/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_DIR);
    path.push(SETTINGS_FILE);
    Some(path)
}

/// Load settings from `path`, or from the default location if `None`
///
/// A missing default file yields [`Settings::default`]. A missing file that
/// was asked for explicitly is an error.
pub fn resolve_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    if let Some(path) = path {
        return load_settings(path);
    }

    match default_settings_path() {
        Some(path) => match load_settings(&path) {
            Err(ConfigError::NotFound(_)) => {
                debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            other => other,
        },
        None => Ok(Settings::default()),
    }
}
