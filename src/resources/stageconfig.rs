//! Stage configuration.
//!
//! Settings for the demo shell loaded from an INI file. Defaults are safe;
//! missing values retain their current (default) values.
//!
//! # Configuration File Format
//!
//! ```ini
//! [surface]
//! width = 256
//! height = 256
//!
//! [playback]
//! target_fps = 60
//!
//! [assets]
//! characters = assets/characters.json
//! base_path = assets
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_SURFACE_WIDTH: f32 = 256.0;
const DEFAULT_SURFACE_HEIGHT: f32 = 256.0;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_CHARACTERS_PATH: &str = "assets/characters.json";
const DEFAULT_BASE_PATH: &str = "assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Demo shell configuration.
#[derive(Debug, Clone)]
pub struct StageConfig {
    /// Drawing surface width in pixels.
    pub surface_width: f32,
    /// Drawing surface height in pixels.
    pub surface_height: f32,
    /// Draw loop cadence of the host.
    pub target_fps: u32,
    /// Path to the character registry JSON.
    pub characters_path: String,
    /// Base directory sprite paths are resolved under.
    pub base_path: String,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        StageConfig {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            characters_path: DEFAULT_CHARACTERS_PATH.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        StageConfig {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an
    /// error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [surface] section
        if let Some(width) = config.getfloat("surface", "width").ok().flatten() {
            self.surface_width = width as f32;
        }
        if let Some(height) = config.getfloat("surface", "height").ok().flatten() {
            self.surface_height = height as f32;
        }

        // [playback] section
        if let Some(fps) = config.getuint("playback", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(characters) = config.get("assets", "characters") {
            self.characters_path = characters;
        }
        if let Some(base) = config.get("assets", "base_path") {
            self.base_path = base;
        }

        info!(
            "Loaded config: {}x{} surface, fps={}, characters={}, base={}",
            self.surface_width,
            self.surface_height,
            self.target_fps,
            self.characters_path,
            self.base_path
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_without_a_file() {
        let config = StageConfig::new();
        assert!(config.surface_width > 0.0);
        assert!(config.surface_height > 0.0);
        assert!(config.target_fps > 0);
        assert!(!config.characters_path.is_empty());
    }

    #[test]
    fn missing_file_keeps_defaults() {
        let mut config = StageConfig::with_path("/nonexistent/config.ini");
        let before = config.clone();
        assert!(config.load_from_file().is_err());
        assert_eq!(config.surface_width, before.surface_width);
        assert_eq!(config.target_fps, before.target_fps);
    }
}
