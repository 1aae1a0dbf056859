//! Persisted sound options.
//!
//! The director consumes a small options blob owned by the game's save
//! system: which regional music set to use and whether music is disabled
//! outright. Stored as JSON; unknown fields are ignored and missing fields
//! fall back to defaults so older saves keep loading.

use crate::region::MusicSet;
use crate::{Result, SoundError};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Persisted sound options consumed by the director.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundOptions {
    /// Selected regional music set.
    pub music_set: MusicSet,
    /// Disable all BGM playback (map music commits song 0 instead).
    pub music_disabled: bool,
}

impl SoundOptions {
    /// Options with defaults: base music set, music enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style selector for the music set.
    pub fn music_set(mut self, set: MusicSet) -> Self {
        self.music_set = set;
        self
    }

    /// Builder-style toggle for disabling music.
    pub fn music_disabled(mut self, disabled: bool) -> Self {
        self.music_disabled = disabled;
        self
    }

    /// Parse options from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| SoundError::Config(e.to_string()))
    }

    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SoundError::Config(e.to_string()))
    }

    /// Serialize options as JSON to a writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self).map_err(|e| SoundError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SoundOptions::new();
        assert_eq!(options.music_set, MusicSet::FireRed);
        assert!(!options.music_disabled);
    }

    #[test]
    fn json_round_trip() {
        let options = SoundOptions::new().music_set(MusicSet::Hgss).music_disabled(true);
        let mut buf = Vec::new();
        options.to_writer(&mut buf).unwrap();
        let back = SoundOptions::from_reader(buf.as_slice()).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options = SoundOptions::from_json("{}").unwrap();
        assert_eq!(options, SoundOptions::default());

        let options = SoundOptions::from_json(r#"{"music_set":"Hgss"}"#).unwrap();
        assert_eq!(options.music_set, MusicSet::Hgss);
        assert!(!options.music_disabled);
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(SoundOptions::from_json("not json").is_err());
    }
}
