//! Display strings for the screen's labels
//!
//! English defaults, optionally overridden from a JSON object keyed by the
//! camelCase key names, e.g. `{ "flipPolarity": "Umpolen" }`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringKey {
    MagnetControls,
    FlipPolarity,
    MoveMagnet,
    AddMagnet,
    ResetAll,
}

impl StringKey {
    pub const ALL: [StringKey; 5] = [
        StringKey::MagnetControls,
        StringKey::FlipPolarity,
        StringKey::MoveMagnet,
        StringKey::AddMagnet,
        StringKey::ResetAll,
    ];

    fn english(self) -> &'static str {
        match self {
            StringKey::MagnetControls => "Magnet Controls",
            StringKey::FlipPolarity => "Flip Polarity",
            StringKey::MoveMagnet => "Move Magnet",
            StringKey::AddMagnet => "Add Magnet",
            StringKey::ResetAll => "Reset All",
        }
    }
}

/// Key to string lookup
#[derive(Debug, Clone, Default)]
pub struct Strings {
    overrides: HashMap<StringKey, String>,
}

impl Strings {
    pub fn english() -> Self {
        Self::default()
    }

    /// Build a table from JSON overrides; keys not present fall back to English
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let overrides: HashMap<StringKey, String> = serde_json::from_str(json)?;
        Ok(Self { overrides })
    }

    pub fn get(&self, key: StringKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.english())
    }
}
