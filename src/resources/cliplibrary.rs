//! Clip definition registry.
//!
//! A [`ClipLibrary`] holds the ordered, immutable [`AnimationClip`]
//! definitions for one character. Clips are built once at configuration load
//! and looked up by index; playback state lives elsewhere
//! (see [`Playback`](crate::components::playback::Playback)).
//!
//! # JSON Format
//!
//! Clips arrive in the legacy wire form, one record per clip:
//!
//! ```json
//! [
//!   { "name": "Idle", "width": 64, "height": 64,
//!     "frameX": 4, "frameY": 1, "sprite": "idle.png" }
//! ]
//! ```
//!
//! `frameX` is the column count and `frameY` the row count of the sheet grid.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Clip names that historically meant "repeat forever". Matched as
/// case-sensitive substrings of the clip name, at load time only.
const LOOP_NAME_KEYWORDS: [&str; 4] = ["Idle", "Move", "Standby", "Magic"];

/// Whether a clip repeats after its last cell or plays a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    Loop,
    PlayOnce,
}

impl LoopMode {
    /// Classify a clip by the legacy naming convention.
    pub fn for_clip_name(name: &str) -> LoopMode {
        if LOOP_NAME_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            LoopMode::Loop
        } else {
            LoopMode::PlayOnce
        }
    }
}

/// Immutable description of one named animation: a fixed-size cell grid over
/// a sprite sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    /// Cell size in pixels.
    pub frame_width: f32,
    pub frame_height: f32,
    /// Grid dimensions, both at least 1.
    pub columns: u32,
    pub rows: u32,
    /// Resolved path of the sheet image asset.
    pub sheet_path: String,
    pub loop_mode: LoopMode,
}

/// Wire/config form of a clip as stored in character JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClipRecord {
    pub name: String,
    pub width: f32,
    pub height: f32,
    /// Column count of the sheet grid.
    #[serde(rename = "frameX")]
    pub frame_x: u32,
    /// Row count of the sheet grid.
    #[serde(rename = "frameY")]
    pub frame_y: u32,
    /// Sheet image path, relative until the deployment layer resolves it.
    pub sprite: String,
}

impl ClipRecord {
    /// Build the immutable clip, resolving `sprite` against `base`.
    ///
    /// The loop mode is fixed here, at configuration time, from the clip
    /// name; playback never inspects names.
    pub fn into_clip(self, base: &str) -> Result<AnimationClip, String> {
        if self.frame_x == 0 || self.frame_y == 0 {
            return Err(format!(
                "clip '{}' has an empty grid ({}x{})",
                self.name, self.frame_x, self.frame_y
            ));
        }
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(format!(
                "clip '{}' has a degenerate cell size ({}x{})",
                self.name, self.width, self.height
            ));
        }
        let sheet_path = if base.is_empty() {
            self.sprite
        } else {
            format!("{}/{}", base.trim_end_matches('/'), self.sprite)
        };
        let loop_mode = LoopMode::for_clip_name(&self.name);
        Ok(AnimationClip {
            name: self.name,
            frame_width: self.width,
            frame_height: self.height,
            columns: self.frame_x,
            rows: self.frame_y,
            sheet_path,
            loop_mode,
        })
    }
}

/// Ordered clip definitions for the active character.
#[derive(Resource, Debug, Clone, Default)]
pub struct ClipLibrary {
    clips: Vec<AnimationClip>,
}

impl ClipLibrary {
    pub fn new(clips: Vec<AnimationClip>) -> Self {
        ClipLibrary { clips }
    }

    /// Convert wire records into a library, resolving sprite paths against
    /// `base`. Fails on the first invalid record.
    pub fn from_records(records: Vec<ClipRecord>, base: &str) -> Result<Self, String> {
        let clips = records
            .into_iter()
            .map(|r| r.into_clip(base))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ClipLibrary { clips })
    }

    /// Load a bare clip list from a JSON file.
    pub fn load_from_file(path: &str, base: &str) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read clip list {}: {}", path, e))?;
        let records: Vec<ClipRecord> = serde_json::from_str(&data)
            .map_err(|e| format!("failed to parse clip list {}: {}", path, e))?;
        Self::from_records(records, base)
    }

    pub fn get(&self, index: usize) -> Option<&AnimationClip> {
        self.clips.get(index)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationClip> {
        self.clips.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, frame_x: u32, frame_y: u32) -> ClipRecord {
        ClipRecord {
            name: name.to_string(),
            width: 64.0,
            height: 64.0,
            frame_x,
            frame_y,
            sprite: format!("{}.png", name.to_lowercase()),
        }
    }

    #[test]
    fn loop_mode_follows_name_keywords() {
        assert_eq!(LoopMode::for_clip_name("Idle"), LoopMode::Loop);
        assert_eq!(LoopMode::for_clip_name("Move Right"), LoopMode::Loop);
        assert_eq!(LoopMode::for_clip_name("Standby"), LoopMode::Loop);
        assert_eq!(LoopMode::for_clip_name("Dark Magic"), LoopMode::Loop);
        assert_eq!(LoopMode::for_clip_name("Attack"), LoopMode::PlayOnce);
        assert_eq!(LoopMode::for_clip_name("Jump"), LoopMode::PlayOnce);
        // the match is case-sensitive
        assert_eq!(LoopMode::for_clip_name("idle"), LoopMode::PlayOnce);
    }

    #[test]
    fn record_conversion_resolves_sprite_against_base() {
        let clip = record("Idle", 4, 1).into_clip("assets/hero").unwrap();
        assert_eq!(clip.sheet_path, "assets/hero/idle.png");
        assert_eq!(clip.columns, 4);
        assert_eq!(clip.rows, 1);
        assert_eq!(clip.loop_mode, LoopMode::Loop);

        let clip = record("Jump", 3, 1).into_clip("").unwrap();
        assert_eq!(clip.sheet_path, "jump.png");
        assert_eq!(clip.loop_mode, LoopMode::PlayOnce);
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert!(record("Idle", 0, 1).into_clip("").is_err());
        assert!(record("Idle", 4, 0).into_clip("").is_err());
    }

    #[test]
    fn load_from_file_round_trips_records() {
        let path = std::env::temp_dir().join("spritestage_clips_test.json");
        let records = vec![record("Idle", 4, 1), record("Jump", 3, 1)];
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let library = ClipLibrary::load_from_file(path.to_str().unwrap(), "hero").unwrap();
        assert_eq!(library.len(), 2);
        assert_eq!(library.get(0).unwrap().sheet_path, "hero/idle.png");
        assert_eq!(library.get(1).unwrap().loop_mode, LoopMode::PlayOnce);

        assert!(ClipLibrary::load_from_file("/nonexistent/clips.json", "").is_err());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn wire_field_names_parse() {
        let json = r#"[{"name":"Attack","width":96,"height":64,
                        "frameX":6,"frameY":2,"sprite":"attack.png"}]"#;
        let records: Vec<ClipRecord> = serde_json::from_str(json).unwrap();
        let library = ClipLibrary::from_records(records, "hero").unwrap();
        assert_eq!(library.len(), 1);
        let clip = library.get(0).unwrap();
        assert_eq!(clip.columns, 6);
        assert_eq!(clip.rows, 2);
        assert_eq!(clip.frame_width, 96.0);
        assert_eq!(clip.sheet_path, "hero/attack.png");
    }
}
