//! Character registry.
//!
//! Characters are defined in a single JSON document, each with a display
//! name, an optional icon, and an ordered clip list in the legacy wire form.
//! The registry derives a URL-safe slug per character and resolves every
//! clip's `sprite` field into `<base>/<slug>/<sprite>`, so the playback core
//! only ever sees concrete asset paths.
//!
//! # JSON Format
//!
//! ```json
//! [
//!   {
//!     "name": "Forest Slime",
//!     "icon": "icon.png",
//!     "animations": [
//!       { "name": "Idle", "width": 64, "height": 64,
//!         "frameX": 4, "frameY": 1, "sprite": "idle.png" }
//!     ]
//!   }
//! ]
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::cliplibrary::{ClipLibrary, ClipRecord};

/// One character as stored in the registry JSON.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CharacterRecord {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub animations: Vec<ClipRecord>,
}

/// Lowercase the name and collapse whitespace runs into single hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_whitespace() {
            pending_hyphen = !slug.is_empty();
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        slug.extend(c.to_lowercase());
    }
    slug
}

/// All known characters, addressable by slug.
#[derive(Debug, Clone, Default)]
pub struct CharacterRegistry {
    characters: Vec<CharacterRecord>,
    by_slug: FxHashMap<String, usize>,
}

impl CharacterRegistry {
    pub fn new(characters: Vec<CharacterRecord>) -> Self {
        let by_slug = characters
            .iter()
            .enumerate()
            .map(|(i, c)| (slugify(&c.name), i))
            .collect();
        CharacterRegistry {
            characters,
            by_slug,
        }
    }

    /// Load the registry from a JSON document.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read character registry {}: {}", path, e))?;
        let characters: Vec<CharacterRecord> = serde_json::from_str(&data)
            .map_err(|e| format!("failed to parse character registry {}: {}", path, e))?;
        Ok(Self::new(characters))
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&CharacterRecord> {
        self.by_slug.get(slug).map(|&i| &self.characters[i])
    }

    /// `(slug, record)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &CharacterRecord)> {
        self.characters.iter().map(|c| (slugify(&c.name), c))
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Build the clip library for one character, resolving sprite paths to
    /// `<base>/<slug>/<sprite>`.
    pub fn library_for(&self, slug: &str, base: &str) -> Result<ClipLibrary, String> {
        let character = self
            .get_by_slug(slug)
            .ok_or_else(|| format!("unknown character '{}'", slug))?;
        let prefix = if base.is_empty() {
            slug.to_string()
        } else {
            format!("{}/{}", base.trim_end_matches('/'), slug)
        };
        ClipLibrary::from_records(character.animations.clone(), &prefix)
    }
}
