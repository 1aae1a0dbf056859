//! Backend trait abstraction for the fixed-function audio engine.
//!
//! This module defines the interface the director drives: a mixer/sequencer
//! that plays named songs on fixed logical channels and exposes a small set
//! of per-channel controls. The engine is opaque; the director only starts,
//! stops and fades songs, polls status bits, and pushes cry synthesis
//! parameters.
//!
//! All operations are infallible by contract: the engine ignores requests it
//! cannot honour, and the director is written to tolerate that.

use crate::songs::SongId;
use bitflags::bitflags;

/// Logical playback channels exposed by the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Background music: the single long-running shared music resource.
    Bgm,
    /// Sound-effect channel 1.
    Se1,
    /// Sound-effect channel 2.
    Se2,
    /// Sound-effect channel 3 (reserved for special effects).
    Se3,
    /// Creature cry synthesis channel.
    Cry,
}

bitflags! {
    /// Per-channel playback status register.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PlaybackStatus: u8 {
        /// The channel's player is paused.
        const PAUSED = 0x01;
        /// At least one track on the channel is still producing output.
        const TRACK_ACTIVE = 0x02;
    }
}

bitflags! {
    /// Track-selection mask for per-track volume/panpot control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TrackMask: u16 {
        /// All tracks of the channel.
        const ALL = 0xFFFF;
    }
}

/// Which cry tone table the synthesizer should read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryToneTable {
    /// Normal playback order.
    Forward,
    /// Reversed sample order (echo/growl effects).
    Reverse,
}

/// Contract of the external audio mixer/sequencer.
///
/// Implementations wrap the real engine; tests substitute a scripted fake.
/// The director never assumes a call succeeded — it re-polls
/// [`status`](AudioBackend::status) on later ticks instead.
pub trait AudioBackend {
    /// Start the song with the given id on its assigned channel.
    fn start_song(&mut self, song: SongId);

    /// Stop the song with the given id if it is playing.
    fn stop_song(&mut self, song: SongId);

    /// Halt a channel's player immediately.
    fn stop(&mut self, channel: Channel);

    /// Continue a previously halted channel player from where it stopped.
    fn resume(&mut self, channel: Channel);

    /// Reset a channel player so immediate parameter writes take effect.
    fn init_immediate(&mut self, channel: Channel);

    /// Fade a channel in at the given speed.
    fn fade_in(&mut self, channel: Channel, speed: u8);

    /// Fade a channel out at the given speed and stop it.
    fn fade_out(&mut self, channel: Channel, speed: u8);

    /// Fade a channel out at the given speed, keeping it resumable.
    fn fade_out_temporary(&mut self, channel: Channel, speed: u8);

    /// Current status bits for a channel.
    fn status(&self, channel: Channel) -> PlaybackStatus;

    /// Set the volume of the selected tracks on a channel (0..=256).
    fn set_volume(&mut self, channel: Channel, tracks: TrackMask, volume: u16);

    /// Set the panpot of the selected tracks on a channel (-128..=127).
    fn set_panpot(&mut self, channel: Channel, tracks: TrackMask, pan: i8);

    // Cry synthesis parameter latch. Values written here apply to the next
    // tone started via `set_cry_tone`.

    /// Cry playback volume.
    fn set_cry_volume(&mut self, volume: i8);
    /// Cry stereo position.
    fn set_cry_panpot(&mut self, pan: i8);
    /// Cry base pitch.
    fn set_cry_pitch(&mut self, pitch: u32);
    /// Cry playback length in engine units.
    fn set_cry_length(&mut self, length: u32);
    /// Cry playback progress (0 restarts from the beginning).
    fn set_cry_progress(&mut self, progress: u32);
    /// Cry release envelope value.
    fn set_cry_release(&mut self, release: u32);
    /// Cry chorus depth.
    fn set_cry_chorus(&mut self, chorus: u32);
    /// Cry channel priority against competing sounds.
    fn set_cry_priority(&mut self, priority: u8);
    /// Start the cry tone at `index` of the given tone table.
    fn set_cry_tone(&mut self, table: CryToneTable, index: u16);

    /// Whether the cry channel is still audible.
    fn is_cry_playing(&self) -> bool;

    /// Release any cry song slots held by finished playback.
    fn clear_cry_songs(&mut self);
}

impl PlaybackStatus {
    /// True when no track on the channel is producing output.
    pub fn is_stopped(&self) -> bool {
        !self.contains(PlaybackStatus::TRACK_ACTIVE)
    }

    /// True when the channel is paused or has no active track.
    pub fn is_paused_or_stopped(&self) -> bool {
        self.contains(PlaybackStatus::PAUSED) || self.is_stopped()
    }

    /// True when the channel is actively playing (not paused, track live).
    pub fn is_playing(&self) -> bool {
        !self.contains(PlaybackStatus::PAUSED) && self.contains(PlaybackStatus::TRACK_ACTIVE)
    }
}
