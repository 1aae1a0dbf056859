//! Scripted fake audio backend shared by the behaviour tests.

use sound_director::{AudioBackend, Channel, CryToneTable, PlaybackStatus, SongId, TrackMask};

/// Every call the fake backend records, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StartSong(SongId),
    StopSong(SongId),
    Stop(Channel),
    Resume(Channel),
    InitImmediate(Channel),
    FadeIn(Channel, u8),
    FadeOut(Channel, u8),
    FadeOutTemporary(Channel, u8),
    SetVolume(Channel, u16),
    SetPanpot(Channel, i8),
    CryVolume(i8),
    CryPanpot(i8),
    CryPitch(u32),
    CryLength(u32),
    CryProgress(u32),
    CryRelease(u32),
    CryChorus(u32),
    CryPriority(u8),
    CryTone(CryToneTable, u16),
    ClearCrySongs,
}

/// Recording backend whose status bits the test scripts directly.
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub calls: Vec<Call>,
    pub bgm_status: PlaybackStatus,
    pub se1_status: PlaybackStatus,
    pub se2_status: PlaybackStatus,
    pub se3_status: PlaybackStatus,
    pub cry_playing: bool,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the BGM channel as actively playing.
    pub fn bgm_playing(&mut self) {
        self.bgm_status = PlaybackStatus::TRACK_ACTIVE;
    }

    /// Script the BGM channel as stopped.
    pub fn bgm_stopped(&mut self) {
        self.bgm_status = PlaybackStatus::empty();
    }

    /// Drop recorded calls, keeping scripted status.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn started_songs(&self) -> Vec<SongId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::StartSong(song) => Some(*song),
                _ => None,
            })
            .collect()
    }
}

impl AudioBackend for FakeBackend {
    fn start_song(&mut self, song: SongId) {
        self.calls.push(Call::StartSong(song));
    }

    fn stop_song(&mut self, song: SongId) {
        self.calls.push(Call::StopSong(song));
    }

    fn stop(&mut self, channel: Channel) {
        self.calls.push(Call::Stop(channel));
    }

    fn resume(&mut self, channel: Channel) {
        self.calls.push(Call::Resume(channel));
    }

    fn init_immediate(&mut self, channel: Channel) {
        self.calls.push(Call::InitImmediate(channel));
    }

    fn fade_in(&mut self, channel: Channel, speed: u8) {
        self.calls.push(Call::FadeIn(channel, speed));
    }

    fn fade_out(&mut self, channel: Channel, speed: u8) {
        self.calls.push(Call::FadeOut(channel, speed));
    }

    fn fade_out_temporary(&mut self, channel: Channel, speed: u8) {
        self.calls.push(Call::FadeOutTemporary(channel, speed));
    }

    fn status(&self, channel: Channel) -> PlaybackStatus {
        match channel {
            Channel::Bgm => self.bgm_status,
            Channel::Se1 => self.se1_status,
            Channel::Se2 => self.se2_status,
            Channel::Se3 => self.se3_status,
            Channel::Cry => PlaybackStatus::empty(),
        }
    }

    fn set_volume(&mut self, channel: Channel, _tracks: TrackMask, volume: u16) {
        self.calls.push(Call::SetVolume(channel, volume));
    }

    fn set_panpot(&mut self, channel: Channel, _tracks: TrackMask, pan: i8) {
        self.calls.push(Call::SetPanpot(channel, pan));
    }

    fn set_cry_volume(&mut self, volume: i8) {
        self.calls.push(Call::CryVolume(volume));
    }

    fn set_cry_panpot(&mut self, pan: i8) {
        self.calls.push(Call::CryPanpot(pan));
    }

    fn set_cry_pitch(&mut self, pitch: u32) {
        self.calls.push(Call::CryPitch(pitch));
    }

    fn set_cry_length(&mut self, length: u32) {
        self.calls.push(Call::CryLength(length));
    }

    fn set_cry_progress(&mut self, progress: u32) {
        self.calls.push(Call::CryProgress(progress));
    }

    fn set_cry_release(&mut self, release: u32) {
        self.calls.push(Call::CryRelease(release));
    }

    fn set_cry_chorus(&mut self, chorus: u32) {
        self.calls.push(Call::CryChorus(chorus));
    }

    fn set_cry_priority(&mut self, priority: u8) {
        self.calls.push(Call::CryPriority(priority));
    }

    fn set_cry_tone(&mut self, table: CryToneTable, index: u16) {
        self.calls.push(Call::CryTone(table, index));
    }

    fn is_cry_playing(&self) -> bool {
        self.cry_playing
    }

    fn clear_cry_songs(&mut self) {
        self.calls.push(Call::ClearCrySongs);
    }
}
