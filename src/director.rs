//! Top-level sound director.
//!
//! [`SoundDirector`] owns every piece of sound-control state — the map music
//! state machine, the fanfare sequencer, the ducking countdown and the
//! persisted options — and is the only thing that talks to the audio
//! backend. Game logic calls its operations; a single [`tick`] per frame
//! advances everything that is waiting.
//!
//! [`tick`]: SoundDirector::tick

use crate::backend::{AudioBackend, Channel, CryToneTable, PlaybackStatus, TrackMask};
use crate::config::SoundOptions;
use crate::cry::{cry_index, derive_cry_parameters, CryMode};
use crate::ducking::{DuckingState, DuckingStep, DUCKED_BGM_VOLUME, FULL_BGM_VOLUME};
use crate::fanfare::{Fanfare, FanfareSequencer, REPLAY_STUB_TICKS};
use crate::map_music::{BgmSnapshot, MapMusic, MapMusicAction, MapMusicState};
use crate::region::remap_song;
use crate::songs::{SongId, MUS_DUMMY, MUS_NONE};

/// Default cry playback volume.
pub const CRY_VOLUME: i8 = 120;
/// Default cry channel priority.
pub const CRY_PRIORITY_NORMAL: u8 = 2;

/// Central controller for BGM, fanfares, sound effects and cries.
///
/// All state is owned here; access is single-threaded cooperative. "Waiting"
/// is always a state value polled on the next [`tick`](Self::tick), never a
/// blocked caller.
pub struct SoundDirector<B: AudioBackend> {
    backend: B,
    options: SoundOptions,
    map_music: MapMusic,
    fanfare: FanfareSequencer,
    ducking: DuckingState,
    /// Replaying a recorded play log: fanfares and script cries stay silent
    /// so the replay is deterministic.
    log_playback: bool,
    /// In a multi battle the release-double cry skips the BGM duck.
    multi_battle: bool,
    /// Sound effects suppressed (e.g. during map-load transitions).
    se_disabled: bool,
    /// A menu overlay holds the BGM volume; automatic reduction is locked out.
    volume_locked: bool,
}

impl<B: AudioBackend> SoundDirector<B> {
    /// Create a director over `backend` with default options.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, SoundOptions::default())
    }

    /// Create a director over `backend` with persisted options.
    pub fn with_options(backend: B, options: SoundOptions) -> Self {
        Self {
            backend,
            options,
            map_music: MapMusic::new(),
            fanfare: FanfareSequencer::new(),
            ducking: DuckingState::new(),
            log_playback: false,
            multi_battle: false,
            se_disabled: false,
            volume_locked: false,
        }
    }

    /// Currently applied options.
    pub fn options(&self) -> &SoundOptions {
        &self.options
    }

    /// Replace the applied options (takes effect on the next playback call).
    pub fn set_options(&mut self, options: SoundOptions) {
        self.options = options;
    }

    /// Toggle play-log replay mode.
    pub fn set_log_playback(&mut self, replaying: bool) {
        self.log_playback = replaying;
    }

    /// Toggle the multi-battle condition consulted by release-double cries.
    pub fn set_multi_battle(&mut self, multi: bool) {
        self.multi_battle = multi;
    }

    /// Toggle sound-effect suppression.
    pub fn set_se_disabled(&mut self, disabled: bool) {
        self.se_disabled = disabled;
    }

    /// Borrow the audio backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the audio backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // -- Per-tick advance ---------------------------------------------------

    /// Run one cooperative tick: map music first, then the fanfare
    /// completion task, then the ducking restore task.
    pub fn tick(&mut self) {
        let snapshot = BgmSnapshot {
            bgm_stopped: self.is_bgm_stopped(),
            fanfare_inactive: self.is_fanfare_inactive(),
        };
        if let Some(action) = self.map_music.advance(snapshot) {
            match action {
                MapMusicAction::StartSong(song) => self.play_bgm(song),
                MapMusicAction::FadeInSong(song, speed) => self.fade_in_new_bgm(song, speed),
            }
        }

        if self.fanfare.is_task_armed() && self.fanfare.step() {
            self.backend.resume(Channel::Bgm);
            self.fanfare.disarm_task();
        }

        if self.ducking.is_task_armed() {
            let cry_playing = self.backend.is_cry_playing();
            if self.ducking.step(cry_playing) == DuckingStep::Restore {
                self.backend
                    .set_volume(Channel::Bgm, TrackMask::ALL, FULL_BGM_VOLUME);
                self.ducking.disarm_task();
            }
        }
    }

    // -- Map music ----------------------------------------------------------

    /// Re-enable music and reset the map music controller.
    pub fn init_map_music(&mut self) {
        self.options.music_disabled = false;
        self.map_music.reset();
    }

    /// Reset the map music controller to idle.
    pub fn reset_map_music(&mut self) {
        self.map_music.reset();
    }

    /// Commit a new map song; the backend start happens on the next tick.
    pub fn play_new_map_music(&mut self, song: SongId) {
        self.map_music.play_new(song);
    }

    /// Stop map music by committing song 0.
    pub fn stop_map_music(&mut self) {
        self.map_music.stop();
    }

    /// Fade the current map music out and go silent.
    pub fn fade_out_map_music(&mut self, speed: u8) {
        if self.map_music.begin_fade_out() {
            self.backend.fade_out(Channel::Bgm, speed);
        }
    }

    /// Fade out, then start `song` once the channel is free.
    pub fn fade_out_and_play_new_map_music(&mut self, song: SongId, speed: u8) {
        self.fade_out_map_music(speed);
        self.map_music.fade_out_then_play(song);
    }

    /// Fade out at `out_speed`, then fade `song` in at `in_speed`.
    pub fn fade_out_and_fade_in_new_map_music(
        &mut self,
        song: SongId,
        out_speed: u8,
        in_speed: u8,
    ) {
        self.fade_out_map_music(out_speed);
        self.map_music.fade_out_then_fade_in(song, in_speed);
    }

    /// The current map song id.
    pub fn get_current_map_music(&self) -> SongId {
        self.map_music.current()
    }

    /// Current phase of the map music controller.
    pub fn map_music_state(&self) -> MapMusicState {
        self.map_music.state()
    }

    /// Advisory check that no fade transition is still in flight.
    pub fn is_ready_for_new_transition(&self) -> bool {
        self.map_music.is_ready_for_new_transition()
    }

    // -- BGM helpers --------------------------------------------------------

    /// Start a song on the BGM channel, honouring the disable flag and the
    /// regional remap.
    pub fn play_bgm(&mut self, song: SongId) {
        let song = self.effective_bgm_song(song);
        self.backend.start_song(song);
    }

    /// Start a song on the BGM channel faded in from silence.
    ///
    /// Runs the engine's pre-load sequence: start, reset the player, zero
    /// the volume, stop the song, then fade the channel in.
    pub fn fade_in_new_bgm(&mut self, song: SongId, speed: u8) {
        let song = self.effective_bgm_song(song);
        self.backend.start_song(song);
        self.backend.init_immediate(Channel::Bgm);
        self.backend.set_volume(Channel::Bgm, TrackMask::ALL, 0);
        self.backend.stop_song(song);
        self.backend.fade_in(Channel::Bgm, speed);
    }

    fn effective_bgm_song(&self, song: SongId) -> SongId {
        let song = if self.options.music_disabled {
            MUS_NONE
        } else {
            song
        };
        remap_song(self.options.music_set, song)
    }

    /// Fade the BGM channel in at `speed`.
    pub fn fade_in_bgm(&mut self, speed: u8) {
        self.backend.fade_in(Channel::Bgm, speed);
    }

    /// Fade the BGM channel out at `speed` and stop it.
    pub fn fade_out_bgm(&mut self, speed: u8) {
        self.backend.fade_out(Channel::Bgm, speed);
    }

    /// Fade the BGM channel out at `speed`, keeping it resumable.
    pub fn fade_out_bgm_temporarily(&mut self, speed: u8) {
        self.backend.fade_out_temporary(Channel::Bgm, speed);
    }

    /// True when the BGM channel reports no active track.
    pub fn is_bgm_stopped(&self) -> bool {
        self.backend.status(Channel::Bgm).is_stopped()
    }

    /// True when the BGM channel is paused or has no active track.
    pub fn is_bgm_paused_or_stopped(&self) -> bool {
        self.backend.status(Channel::Bgm).is_paused_or_stopped()
    }

    /// True when the BGM channel is actively playing.
    pub fn is_bgm_playing(&self) -> bool {
        self.backend.status(Channel::Bgm).is_playing()
    }

    // -- Fanfares -----------------------------------------------------------

    /// Start a fanfare by table index, preempting the BGM channel.
    ///
    /// Does not register the completion task — callers either drive
    /// [`wait_fanfare`](Self::wait_fanfare) themselves or go through
    /// [`play_fanfare`](Self::play_fanfare). In log-playback mode nothing is
    /// started; the countdown is stubbed so replay stays deterministic.
    pub fn play_fanfare_by_index(&mut self, fanfare: Fanfare) {
        if self.log_playback {
            self.fanfare.start(REPLAY_STUB_TICKS);
            return;
        }
        self.backend.stop(Channel::Bgm);
        let entry = fanfare.entry();
        let song = remap_song(self.options.music_set, entry.song);
        // The duration passes through the remapper as well; tick counts sit
        // below the song id range, so this is the identity in practice.
        let duration = remap_song(self.options.music_set, entry.duration);
        self.fanfare.start(duration);
        self.backend.start_song(song);
    }

    /// Start the fanfare whose song id matches and register the completion
    /// task.
    ///
    /// An id not present in the table falls back to the first entry rather
    /// than failing; existing callers rely on always hearing *a* jingle.
    pub fn play_fanfare(&mut self, song: SongId) {
        let fanfare = Fanfare::by_song(song).unwrap_or(Fanfare::LevelUp);
        self.play_fanfare_by_index(fanfare);
        self.fanfare.arm_task();
    }

    /// Manually advance the fanfare countdown by one call.
    ///
    /// Returns `false` while the jingle still has ticks left. Once elapsed,
    /// resumes the previous BGM (`stop_after == false`) or parks the channel
    /// on the dummy song (`stop_after == true`) and returns `true`.
    pub fn wait_fanfare(&mut self, stop_after: bool) -> bool {
        if !self.fanfare.step() {
            return false;
        }
        if stop_after {
            self.backend.start_song(MUS_DUMMY);
        } else {
            self.backend.resume(Channel::Bgm);
        }
        true
    }

    /// True iff no fanfare completion task is registered.
    pub fn is_fanfare_inactive(&self) -> bool {
        !self.fanfare.is_task_armed()
    }

    // -- Cries --------------------------------------------------------------

    /// Play a creature cry with explicit parameters and no ducking policy.
    ///
    /// Derives the synthesis parameter set for `mode`, pushes it to the
    /// engine and starts the creature's tone. A creature with no assigned
    /// cry latches the parameters but plays nothing.
    pub fn play_cry(&mut self, creature: u16, pan: i8, volume: i8, priority: u8, mode: CryMode) {
        let params = derive_cry_parameters(mode, volume);

        self.backend.set_cry_volume(params.volume);
        self.backend.set_cry_panpot(pan);
        self.backend.set_cry_pitch(params.pitch);
        self.backend.set_cry_length(params.length);
        self.backend.set_cry_progress(0);
        self.backend.set_cry_release(params.release);
        self.backend.set_cry_chorus(params.chorus);
        self.backend.set_cry_priority(priority);

        if let Some(index) = cry_index(creature) {
            let table = if params.reverse {
                CryToneTable::Reverse
            } else {
                CryToneTable::Forward
            };
            self.backend.set_cry_tone(table, index);
        }
    }

    /// Normal cry: duck the BGM, play, restore automatically.
    pub fn play_cry_normal(&mut self, creature: u16, pan: i8) {
        self.duck_bgm();
        self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, CryMode::Normal);
        self.ducking.request();
        self.ducking.arm_task();
    }

    /// Normal cry with explicit volume/priority and no ducking.
    pub fn play_cry_no_ducking(&mut self, creature: u16, pan: i8, volume: i8, priority: u8) {
        self.play_cry(creature, pan, volume, priority, CryMode::Normal);
    }

    /// Cry in an arbitrary mode; ducks and auto-restores except in doubles,
    /// where the shortened cry plays unducked.
    pub fn play_cry_by_mode(&mut self, creature: u16, pan: i8, mode: CryMode) {
        if mode == CryMode::Doubles {
            self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
        } else {
            self.duck_bgm();
            self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
            self.ducking.request();
            self.ducking.arm_task();
        }
    }

    /// Cry used when releasing several creatures at once: the duck is
    /// skipped in a multi battle and the volume is never auto-restored.
    pub fn play_cry_release_double(&mut self, creature: u16, pan: i8, mode: CryMode) {
        if mode == CryMode::Doubles {
            self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
        } else {
            if !self.multi_battle {
                self.duck_bgm();
            }
            self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
        }
    }

    /// Cry that ducks the BGM without ever restoring it (the caller restores
    /// volume itself, typically on scene exit).
    pub fn play_cry_duck_no_restore(&mut self, creature: u16, pan: i8, mode: CryMode) {
        if mode == CryMode::Doubles {
            self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
        } else {
            self.duck_bgm();
            self.play_cry(creature, pan, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
            self.ducking.request();
        }
    }

    /// Cry triggered from a game script: silent during log replay, but the
    /// restore task is still armed so the replay's volume state matches.
    pub fn play_cry_script(&mut self, creature: u16, mode: CryMode) {
        if !self.log_playback {
            self.duck_bgm();
            self.play_cry(creature, 0, CRY_VOLUME, CRY_PRIORITY_NORMAL, mode);
        }
        self.ducking.request();
        self.ducking.arm_task();
    }

    fn duck_bgm(&mut self) {
        self.backend
            .set_volume(Channel::Bgm, TrackMask::ALL, DUCKED_BGM_VOLUME);
    }

    /// True once the ducking restore task has finished; clears the cry song
    /// slots as a side effect of reporting completion.
    pub fn is_cry_finished(&mut self) -> bool {
        if self.ducking.is_task_armed() {
            false
        } else {
            self.backend.clear_cry_songs();
            true
        }
    }

    /// Whether the cry channel is still audible.
    pub fn is_cry_playing(&self) -> bool {
        self.backend.is_cry_playing()
    }

    /// Like [`is_cry_playing`](Self::is_cry_playing), but clears the cry
    /// song slots when playback has ended.
    pub fn is_cry_playing_or_clear(&mut self) -> bool {
        if self.backend.is_cry_playing() {
            true
        } else {
            self.backend.clear_cry_songs();
            false
        }
    }

    /// Stop the cry channel.
    pub fn stop_cry(&mut self) {
        self.backend.stop(Channel::Cry);
    }

    /// Stop the cry channel and release its song slots.
    pub fn stop_cry_and_clear_cry_songs(&mut self) {
        self.backend.stop(Channel::Cry);
        self.backend.clear_cry_songs();
    }

    // -- Sound effects ------------------------------------------------------

    /// Play a one-shot sound effect (remapped; suppressed while SE are
    /// disabled or a play log is replaying).
    pub fn play_se(&mut self, song: SongId) {
        if self.se_disabled || self.log_playback {
            return;
        }
        let song = remap_song(self.options.music_set, song);
        self.backend.start_song(song);
    }

    /// Play a sound effect panned on both SE channels.
    pub fn play_se12_with_panning(&mut self, song: SongId, pan: i8) {
        self.backend.start_song(song);
        self.backend.init_immediate(Channel::Se1);
        self.backend.init_immediate(Channel::Se2);
        self.backend.set_panpot(Channel::Se1, TrackMask::ALL, pan);
        self.backend.set_panpot(Channel::Se2, TrackMask::ALL, pan);
    }

    /// Play a sound effect panned on SE channel 1.
    pub fn play_se1_with_panning(&mut self, song: SongId, pan: i8) {
        self.backend.start_song(song);
        self.backend.init_immediate(Channel::Se1);
        self.backend.set_panpot(Channel::Se1, TrackMask::ALL, pan);
    }

    /// Play a sound effect panned on SE channel 2.
    pub fn play_se2_with_panning(&mut self, song: SongId, pan: i8) {
        self.backend.start_song(song);
        self.backend.init_immediate(Channel::Se2);
        self.backend.set_panpot(Channel::Se2, TrackMask::ALL, pan);
    }

    /// Re-pan both SE channels mid-playback.
    pub fn se12_panpot_control(&mut self, pan: i8) {
        self.backend.set_panpot(Channel::Se1, TrackMask::ALL, pan);
        self.backend.set_panpot(Channel::Se2, TrackMask::ALL, pan);
    }

    /// True while either SE channel is audible.
    pub fn is_se_playing(&self) -> bool {
        let se1 = self.backend.status(Channel::Se1);
        let se2 = self.backend.status(Channel::Se2);
        if se1.contains(PlaybackStatus::PAUSED) && se2.contains(PlaybackStatus::PAUSED) {
            return false;
        }
        !(se1.is_stopped() && se2.is_stopped())
    }

    /// True while the special-effect channel is audible.
    pub fn is_special_se_playing(&self) -> bool {
        self.backend.status(Channel::Se3).is_playing()
    }

    // -- Volume overrides ---------------------------------------------------

    /// Hold the BGM at `volume` and lock out automatic volume reduction
    /// (used while a menu overlay owns the mix).
    pub fn set_bgm_volume_locked(&mut self, volume: u16) {
        self.volume_locked = true;
        self.backend.set_volume(Channel::Bgm, TrackMask::ALL, volume);
    }

    /// Restore full BGM volume and release the lock.
    pub fn restore_bgm_volume_unlocked(&mut self) {
        self.volume_locked = false;
        self.backend
            .set_volume(Channel::Bgm, TrackMask::ALL, FULL_BGM_VOLUME);
    }

    /// True while automatic volume reduction is locked out.
    pub fn is_bgm_volume_locked(&self) -> bool {
        self.volume_locked
    }
}
