//! End-to-end behaviour of the sound director over a scripted backend.

mod common;

use common::{Call, FakeBackend};
use sound_director::fanfare::FANFARES;
use sound_director::songs::*;
use sound_director::{
    Channel, CryMode, CryToneTable, Fanfare, MapMusicState, MusicSet, SoundDirector, SoundOptions,
    DUCKED_BGM_VOLUME, FULL_BGM_VOLUME,
};

fn director() -> SoundDirector<FakeBackend> {
    let mut d = SoundDirector::new(FakeBackend::new());
    d.init_map_music();
    d
}

#[test]
fn play_new_map_music_commits_on_next_tick() {
    let mut d = director();
    d.play_new_map_music(MUS_ROUTE1);

    // Nothing reaches the backend until the tick boundary.
    assert!(d.backend().started_songs().is_empty());
    assert_eq!(d.get_current_map_music(), MUS_ROUTE1);

    d.tick();
    assert_eq!(d.backend().started_songs(), vec![MUS_ROUTE1]);
    assert_eq!(d.map_music_state(), MapMusicState::Playing);

    // Further ticks are no-ops while playing.
    d.tick();
    assert_eq!(d.backend().started_songs(), vec![MUS_ROUTE1]);
}

#[test]
fn fade_out_transition_waits_for_channel_and_switches() {
    let mut d = director();
    d.play_new_map_music(MUS_ROUTE1);
    d.backend_mut().bgm_playing();
    d.tick();
    d.backend_mut().clear_calls();

    d.fade_out_and_play_new_map_music(MUS_GYM, 4);
    assert_eq!(d.backend().calls, vec![Call::FadeOut(Channel::Bgm, 4)]);
    assert!(!d.is_ready_for_new_transition());

    // Channel still active: no switch.
    d.tick();
    assert_eq!(d.map_music_state(), MapMusicState::FadingOutToSwitch);

    d.backend_mut().bgm_stopped();
    d.tick();
    assert_eq!(d.map_music_state(), MapMusicState::Playing);
    assert_eq!(d.get_current_map_music(), MUS_GYM);
    assert_eq!(d.backend().started_songs(), vec![MUS_GYM]);
    assert!(d.is_ready_for_new_transition());
}

#[test]
fn second_fade_request_does_not_refade() {
    let mut d = director();
    d.backend_mut().bgm_playing();
    d.fade_out_map_music(4);
    d.fade_out_and_play_new_map_music(MUS_GYM, 6);

    let fades: Vec<_> = d
        .backend()
        .calls
        .iter()
        .filter(|c| matches!(c, Call::FadeOut(_, _)))
        .collect();
    assert_eq!(fades, vec![&Call::FadeOut(Channel::Bgm, 4)]);
}

#[test]
fn fade_out_and_fade_in_uses_preload_sequence() {
    let mut d = director();
    d.backend_mut().bgm_stopped();
    d.fade_out_and_fade_in_new_map_music(MUS_SURF, 4, 8);
    d.backend_mut().clear_calls();

    d.tick();
    assert_eq!(
        d.backend().calls,
        vec![
            Call::StartSong(MUS_SURF),
            Call::InitImmediate(Channel::Bgm),
            Call::SetVolume(Channel::Bgm, 0),
            Call::StopSong(MUS_SURF),
            Call::FadeIn(Channel::Bgm, 8),
        ]
    );
    assert_eq!(d.get_current_map_music(), MUS_SURF);
}

#[test]
fn map_transition_yields_to_active_fanfare() {
    let mut d = director();
    d.backend_mut().bgm_playing();

    d.play_fanfare(MUS_LEVEL_UP);
    assert!(!d.is_fanfare_inactive());

    d.fade_out_and_play_new_map_music(MUS_GYM, 4);
    d.backend_mut().bgm_stopped();
    d.backend_mut().clear_calls();

    let duration = Fanfare::LevelUp.entry().duration;
    for _ in 0..duration {
        assert_eq!(d.map_music_state(), MapMusicState::FadingOutToSwitch);
        d.tick();
    }

    // The jingle has handed the channel back...
    assert!(d.is_fanfare_inactive());
    assert!(d.backend().calls.contains(&Call::Resume(Channel::Bgm)));
    assert_eq!(d.map_music_state(), MapMusicState::FadingOutToSwitch);

    // ...and only now may the queued switch complete.
    d.tick();
    assert_eq!(d.map_music_state(), MapMusicState::Playing);
    assert_eq!(d.backend().started_songs().last(), Some(&MUS_GYM));
}

#[test]
fn fanfare_wait_loop_finishes_on_duration_th_call() {
    let mut d = director();
    d.play_fanfare_by_index(Fanfare::Heal);
    assert_eq!(
        d.backend().calls,
        vec![Call::Stop(Channel::Bgm), Call::StartSong(MUS_HEAL)]
    );

    let duration = Fanfare::Heal.entry().duration;
    for _ in 0..duration - 1 {
        assert!(!d.wait_fanfare(false));
    }
    assert!(d.wait_fanfare(false));
    assert!(d.backend().calls.contains(&Call::Resume(Channel::Bgm)));
}

#[test]
fn fanfare_wait_with_stop_parks_on_dummy_song() {
    let mut d = director();
    d.play_fanfare_by_index(Fanfare::ObtainBerry);
    let duration = Fanfare::ObtainBerry.entry().duration;
    for _ in 0..duration - 1 {
        assert!(!d.wait_fanfare(true));
    }
    assert!(d.wait_fanfare(true));
    assert_eq!(d.backend().started_songs().last(), Some(&MUS_DUMMY));
    assert!(!d.backend().calls.contains(&Call::Resume(Channel::Bgm)));
}

#[test]
fn unknown_fanfare_song_falls_back_to_first_entry() {
    let mut d = director();
    d.play_fanfare(9999);

    let mut expected = SoundDirector::new(FakeBackend::new());
    expected.play_fanfare(FANFARES[0].song);

    assert_eq!(d.backend().calls, expected.backend().calls);
    assert!(!d.is_fanfare_inactive());
}

#[test]
fn fanfare_song_is_remapped_through_the_region_table() {
    let options = SoundOptions::new().music_set(MusicSet::Hgss);
    let mut d = SoundDirector::with_options(FakeBackend::new(), options);
    d.play_fanfare(MUS_HEAL);
    assert_eq!(d.backend().started_songs(), vec![MUS_HG_HEAL]);
}

#[test]
fn bgm_respects_disable_flag_and_remap() {
    let options = SoundOptions::new().music_set(MusicSet::Hgss);
    let mut d = SoundDirector::with_options(FakeBackend::new(), options);
    d.play_bgm(MUS_HEAL);
    assert_eq!(d.backend().started_songs(), vec![MUS_HG_HEAL]);

    let options = SoundOptions::new().music_disabled(true);
    let mut d = SoundDirector::with_options(FakeBackend::new(), options);
    d.play_new_map_music(MUS_ROUTE1);
    d.tick();
    assert_eq!(d.backend().started_songs(), vec![MUS_NONE]);
}

#[test]
fn cry_with_ducking_restores_after_grace_period() {
    let mut d = director();
    d.backend_mut().cry_playing = true;
    d.play_cry_normal(25, 0);

    assert_eq!(
        d.backend().calls.first(),
        Some(&Call::SetVolume(Channel::Bgm, DUCKED_BGM_VOLUME))
    );
    assert!(d.backend().calls.contains(&Call::CryTone(CryToneTable::Forward, 24)));
    assert!(!d.is_cry_finished());

    // Grace tick: a silent read must not restore yet.
    d.backend_mut().cry_playing = false;
    d.tick();
    assert!(!d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, FULL_BGM_VOLUME)));

    // Second tick with the cry inaudible restores and unregisters.
    d.tick();
    assert!(d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, FULL_BGM_VOLUME)));
    assert!(d.is_cry_finished());
}

#[test]
fn ducking_waits_for_the_cry_to_end() {
    let mut d = director();
    d.backend_mut().cry_playing = true;
    d.play_cry_normal(1, 0);

    for _ in 0..10 {
        d.tick();
    }
    assert!(!d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, FULL_BGM_VOLUME)));

    d.backend_mut().cry_playing = false;
    d.tick();
    assert!(d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, FULL_BGM_VOLUME)));
}

#[test]
fn doubles_cry_skips_ducking() {
    let mut d = director();
    d.play_cry_by_mode(7, -64, CryMode::Doubles);
    assert!(!d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, DUCKED_BGM_VOLUME)));
    assert!(d.is_cry_finished());
}

#[test]
fn release_double_cry_skips_duck_in_multi_battle() {
    let mut d = director();
    d.set_multi_battle(true);
    d.play_cry_release_double(7, 0, CryMode::Normal);
    assert!(!d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, DUCKED_BGM_VOLUME)));

    let mut d = director();
    d.play_cry_release_double(7, 0, CryMode::Normal);
    assert_eq!(
        d.backend().calls.first(),
        Some(&Call::SetVolume(Channel::Bgm, DUCKED_BGM_VOLUME))
    );
    // No restore task: the volume stays ducked no matter how long we run.
    for _ in 0..5 {
        d.tick();
    }
    assert!(!d
        .backend()
        .calls
        .contains(&Call::SetVolume(Channel::Bgm, FULL_BGM_VOLUME)));
}

#[test]
fn creature_without_cry_is_a_silent_no_op() {
    let mut d = director();
    d.play_cry_no_ducking(0, 0, 120, 2);
    assert!(!d
        .backend()
        .calls
        .iter()
        .any(|c| matches!(c, Call::CryTone(_, _))));
}

#[test]
fn reverse_modes_select_the_reverse_tone_table() {
    let mut d = director();
    d.play_cry_by_mode(10, 0, CryMode::EchoStart);
    assert!(d.backend().calls.contains(&Call::CryTone(CryToneTable::Reverse, 9)));
}

#[test]
fn log_playback_keeps_fanfares_and_script_cries_silent() {
    let mut d = director();
    d.set_log_playback(true);

    d.play_fanfare_by_index(Fanfare::Heal);
    assert!(d.backend().calls.is_empty());

    d.play_cry_script(25, CryMode::Normal);
    assert!(d.backend().calls.is_empty());
    // The restore task is still armed so replayed volume state matches.
    assert!(!d.is_cry_finished());

    d.play_se(MUS_ROUTE1);
    assert!(d.backend().calls.is_empty());
}

#[test]
fn se_panning_helpers_touch_the_right_channels() {
    let mut d = director();
    d.play_se12_with_panning(42, -32);
    assert_eq!(
        d.backend().calls,
        vec![
            Call::StartSong(42),
            Call::InitImmediate(Channel::Se1),
            Call::InitImmediate(Channel::Se2),
            Call::SetPanpot(Channel::Se1, -32),
            Call::SetPanpot(Channel::Se2, -32),
        ]
    );

    d.backend_mut().clear_calls();
    d.se12_panpot_control(16);
    assert_eq!(
        d.backend().calls,
        vec![Call::SetPanpot(Channel::Se1, 16), Call::SetPanpot(Channel::Se2, 16)]
    );
}

#[test]
fn volume_lock_round_trip() {
    let mut d = director();
    d.set_bgm_volume_locked(128);
    assert!(d.is_bgm_volume_locked());
    assert!(d.backend().calls.contains(&Call::SetVolume(Channel::Bgm, 128)));

    d.restore_bgm_volume_unlocked();
    assert!(!d.is_bgm_volume_locked());
    assert_eq!(
        d.backend().calls.last(),
        Some(&Call::SetVolume(Channel::Bgm, FULL_BGM_VOLUME))
    );
}
