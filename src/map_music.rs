//! Map music state machine.
//!
//! Owns the "current" and "pending" map song ids and sequences BGM
//! transitions across polled ticks: immediate play, fade-out-then-stop,
//! fade-out-then-switch and fade-out-then-fade-in. The machine itself never
//! touches the audio engine — each tick it consumes a snapshot of the
//! conditions it gates on and hands the director back the action to perform,
//! which keeps every transition deterministic and unit-testable.
//!
//! The one-tick commit boundary is deliberate: entry operations only record
//! intent, and the backend start happens on the next [`MapMusic::advance`].
//! Callers may therefore request a transition from contexts that must not
//! block on the engine.

use crate::songs::{SongId, MUS_NONE};

/// Phase of the map music controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMusicState {
    /// Nothing playing, nothing scheduled.
    #[default]
    Idle,
    /// A song is committed and starts on the next tick.
    Starting,
    /// The committed song has been handed to the backend.
    Playing,
    /// Fading out; goes Idle once the channel reports stopped.
    FadingOutToStop,
    /// Fading out; the pending song starts once the channel is free.
    FadingOutToSwitch,
    /// Fading out; the pending song fades in once the channel is free.
    FadingOutToFadeIn,
}

/// Conditions sampled once per tick that fade transitions gate on.
#[derive(Debug, Clone, Copy)]
pub struct BgmSnapshot {
    /// The backend reports no active track on the BGM channel.
    pub bgm_stopped: bool,
    /// No fanfare task currently occupies the BGM channel.
    pub fanfare_inactive: bool,
}

/// Backend action a tick advance asks the director to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMusicAction {
    /// Start the song on the BGM channel.
    StartSong(SongId),
    /// Start the song faded in at the given speed.
    FadeInSong(SongId, u8),
}

/// Map music controller state.
///
/// Exactly one of `current`/`pending` is authoritative per state; `pending`
/// is cleared whenever a transition completes.
#[derive(Debug, Default)]
pub struct MapMusic {
    state: MapMusicState,
    current: SongId,
    pending: SongId,
    fade_in_speed: u8,
}

impl MapMusic {
    /// Create a controller in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to idle with both song slots cleared.
    pub fn reset(&mut self) {
        self.current = MUS_NONE;
        self.pending = MUS_NONE;
        self.state = MapMusicState::Idle;
        self.fade_in_speed = 0;
    }

    /// Commit a new map song; the backend start happens on the next tick.
    pub fn play_new(&mut self, song: SongId) {
        self.current = song;
        self.pending = MUS_NONE;
        self.state = MapMusicState::Starting;
    }

    /// Stop map music by committing song 0 (silence is owned by the backend).
    pub fn stop(&mut self) {
        self.play_new(MUS_NONE);
    }

    /// Enter the fade-out-to-stop state.
    ///
    /// Returns `true` when the caller must issue a backend fade-out — that
    /// is, when no fade was already in flight. A second fade request while
    /// one is pending only redirects the target state; it never re-fades.
    #[must_use]
    pub fn begin_fade_out(&mut self) -> bool {
        let issue_fade = self.is_ready_for_new_transition();
        self.current = MUS_NONE;
        self.pending = MUS_NONE;
        self.state = MapMusicState::FadingOutToStop;
        issue_fade
    }

    /// After [`begin_fade_out`](Self::begin_fade_out): switch to `song` once
    /// the channel is free.
    pub fn fade_out_then_play(&mut self, song: SongId) {
        self.pending = song;
        self.state = MapMusicState::FadingOutToSwitch;
    }

    /// After [`begin_fade_out`](Self::begin_fade_out): fade `song` in at
    /// `speed` once the channel is free.
    pub fn fade_out_then_fade_in(&mut self, song: SongId, speed: u8) {
        self.pending = song;
        self.state = MapMusicState::FadingOutToFadeIn;
        self.fade_in_speed = speed;
    }

    /// Advance the machine by one tick against the sampled conditions.
    ///
    /// Fade-driven switches wait for *both* "channel stopped" and "fanfare
    /// inactive" so a queued map transition can never clobber a jingle that
    /// is still holding the BGM channel.
    pub fn advance(&mut self, snapshot: BgmSnapshot) -> Option<MapMusicAction> {
        match self.state {
            MapMusicState::Idle | MapMusicState::Playing => None,
            MapMusicState::Starting => {
                self.state = MapMusicState::Playing;
                Some(MapMusicAction::StartSong(self.current))
            }
            MapMusicState::FadingOutToStop => {
                if snapshot.bgm_stopped {
                    self.pending = MUS_NONE;
                    self.state = MapMusicState::Idle;
                }
                None
            }
            MapMusicState::FadingOutToSwitch => {
                if snapshot.bgm_stopped && snapshot.fanfare_inactive {
                    self.current = self.pending;
                    self.pending = MUS_NONE;
                    self.state = MapMusicState::Playing;
                    Some(MapMusicAction::StartSong(self.current))
                } else {
                    None
                }
            }
            MapMusicState::FadingOutToFadeIn => {
                if snapshot.bgm_stopped && snapshot.fanfare_inactive {
                    let speed = self.fade_in_speed;
                    self.current = self.pending;
                    self.pending = MUS_NONE;
                    self.state = MapMusicState::Playing;
                    self.fade_in_speed = 0;
                    Some(MapMusicAction::FadeInSong(self.current, speed))
                } else {
                    None
                }
            }
        }
    }

    /// The current (authoritative) map song id.
    pub fn current(&self) -> SongId {
        self.current
    }

    /// Current phase of the controller.
    pub fn state(&self) -> MapMusicState {
        self.state
    }

    /// False while a fade-driven transition is still waiting on the channel.
    ///
    /// Pure query: callers must check this before assuming an immediate
    /// transition is safe. Violating it cannot crash, only glitch.
    pub fn is_ready_for_new_transition(&self) -> bool {
        !matches!(
            self.state,
            MapMusicState::FadingOutToStop
                | MapMusicState::FadingOutToSwitch
                | MapMusicState::FadingOutToFadeIn
        )
    }
}
