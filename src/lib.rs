//! BGM, fanfare and creature-cry sequencing for a fixed-function game audio
//! engine.
//!
//! This crate is the control layer between game logic and an external audio
//! mixer/sequencer that plays named songs on fixed channels. It performs no
//! synthesis or mixing itself — it sequences: which song the BGM channel
//! should play, how transitions between map songs fade across ticks, how a
//! fanfare jingle preempts and hands back the channel, and which synthesis
//! parameters a creature cry is given.
//!
//! # Features
//! - Map music state machine: immediate play, fade-out-to-stop,
//!   fade-out-then-switch and fade-out-then-fade-in, advanced once per tick
//! - Fanfare sequencing with automatic BGM resumption and a manual
//!   wait-style API
//! - Creature cry parameter derivation over a closed set of playback modes
//! - BGM ducking while a cry plays, with grace-period restore
//! - Regional song remapping selected by persisted options
//!
//! # Quick start
//! ```no_run
//! use sound_director::{AudioBackend, SoundDirector};
//! use sound_director::songs::{MUS_ROUTE1, MUS_GYM};
//!
//! fn run<B: AudioBackend>(backend: B) {
//!     let mut director = SoundDirector::new(backend);
//!     director.init_map_music();
//!     director.play_new_map_music(MUS_ROUTE1);
//!     loop {
//!         director.tick(); // once per frame
//!         # break;
//!     }
//!     director.fade_out_and_play_new_map_music(MUS_GYM, 4);
//! }
//! ```

#![warn(missing_docs)]

pub mod backend; // Audio engine contract
pub mod config; // Persisted sound options
pub mod cry; // Cry parameter derivation
pub mod director; // Top-level controller
pub mod ducking; // BGM ducking countdown
pub mod fanfare; // Fanfare table and sequencing
pub mod map_music; // Map music state machine
pub mod region; // Regional song remapping
pub mod songs; // Named song identifiers

/// Error types for sound director operations
#[derive(thiserror::Error, Debug)]
pub enum SoundError {
    /// Invalid or unreadable configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error from filesystem or device
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<String> for SoundError {
    fn from(msg: String) -> Self {
        SoundError::Other(msg)
    }
}

impl From<&str> for SoundError {
    fn from(msg: &str) -> Self {
        SoundError::Other(msg.to_string())
    }
}

/// Result type for sound director operations
pub type Result<T> = std::result::Result<T, SoundError>;

// Public API exports
pub use backend::{AudioBackend, Channel, CryToneTable, PlaybackStatus, TrackMask};
pub use config::SoundOptions;
pub use cry::{cry_index, derive_cry_parameters, CryMode, CryParameters};
pub use director::{SoundDirector, CRY_PRIORITY_NORMAL, CRY_VOLUME};
pub use ducking::{DUCKED_BGM_VOLUME, FULL_BGM_VOLUME};
pub use fanfare::{Fanfare, FanfareEntry, FanfareSequencer, FANFARES};
pub use map_music::{BgmSnapshot, MapMusic, MapMusicAction, MapMusicState};
pub use region::{remap_song, MusicSet};
pub use songs::SongId;
