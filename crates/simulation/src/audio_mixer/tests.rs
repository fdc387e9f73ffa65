use super::*;
use crate::lightning::ThunderTier;
use crate::storm_config::StormConfig;

fn unmuted_mixer(level: u8) -> RainAudioMixer {
    let mut mixer = RainAudioMixer::default();
    mixer.set_muted(false);
    mixer.set_intensity(level);
    mixer
}

fn audible_config() -> StormConfig {
    StormConfig {
        muted: false,
        ..Default::default()
    }
}

// ====================================================================
// Rain mix
// ====================================================================

#[test]
fn test_mix_table_matches_levels() {
    assert_eq!(rain_mix_for_level(0), [None, None, None]);
    assert_eq!(rain_mix_for_level(1), [Some(0.8), None, None]);
    assert_eq!(rain_mix_for_level(3), [Some(1.0), Some(0.05), None]);
    assert_eq!(rain_mix_for_level(4), [None, Some(0.2), None]);
    assert_eq!(rain_mix_for_level(7), [None, Some(0.6), Some(0.1)]);
    assert_eq!(rain_mix_for_level(9), [None, None, Some(0.3)]);
}

#[test]
fn test_mixer_starts_muted() {
    let mixer = RainAudioMixer::default();
    assert!(mixer.is_muted());
    assert_eq!(mixer.level(), 4);
    assert_eq!(mixer.playing_count(), 0);
}

#[test]
fn test_level_four_plays_only_medium() {
    let mixer = unmuted_mixer(4);
    let medium = mixer.voice(RainSoundLayer::Medium);
    assert!(medium.playing);
    assert!(medium.looping);
    assert!((medium.volume - 0.2).abs() < 1e-6);
    assert!(!mixer.voice(RainSoundLayer::Light).playing);
    assert!(!mixer.voice(RainSoundLayer::Heavy).playing);
}

#[test]
fn test_level_three_blends_light_and_medium() {
    let mixer = unmuted_mixer(3);
    assert_eq!(mixer.playing_count(), 2);
    assert!((mixer.voice(RainSoundLayer::Light).volume - 1.0).abs() < 1e-6);
    assert!((mixer.voice(RainSoundLayer::Medium).volume - 0.05).abs() < 1e-6);
}

#[test]
fn test_dropping_to_zero_pauses_everything() {
    let mut mixer = unmuted_mixer(4);
    mixer.set_intensity(0);
    assert_eq!(mixer.playing_count(), 0);
}

#[test]
fn test_level_change_pauses_unused_layers() {
    let mut mixer = unmuted_mixer(7);
    assert_eq!(mixer.playing_count(), 2);
    mixer.set_intensity(9);
    assert_eq!(mixer.playing_count(), 1);
    assert!(!mixer.voice(RainSoundLayer::Medium).playing);
    assert!(mixer.voice(RainSoundLayer::Heavy).playing);
}

#[test]
fn test_every_level_plays_at_most_two_layers() {
    for level in 0..=9 {
        let mixer = unmuted_mixer(level);
        let expected = rain_mix_for_level(level).iter().flatten().count();
        assert_eq!(mixer.playing_count(), expected, "level {level}");
        assert!(mixer.playing_count() <= 2);
    }
}

#[test]
fn test_intensity_is_clamped() {
    let mixer = unmuted_mixer(42);
    assert_eq!(mixer.level(), 9);
    assert!(mixer.voice(RainSoundLayer::Heavy).playing);
}

#[test]
fn test_mute_then_unmute_restores_mix() {
    let mut mixer = unmuted_mixer(5);
    mixer.set_muted(true);
    assert_eq!(mixer.playing_count(), 0);
    mixer.set_muted(false);
    let medium = mixer.voice(RainSoundLayer::Medium);
    assert!(medium.playing);
    assert!((medium.volume - 0.4).abs() < 1e-6);
}

#[test]
fn test_intensity_change_while_muted_stays_silent() {
    let mut mixer = RainAudioMixer::default();
    mixer.set_intensity(8);
    assert_eq!(mixer.playing_count(), 0);
    mixer.set_muted(false);
    assert!(mixer.voice(RainSoundLayer::Heavy).playing);
}

// ====================================================================
// Thunder
// ====================================================================

#[test]
fn test_trigger_ignored_while_muted() {
    let mut bank = ThunderBank::default();
    let config = StormConfig::default();
    assert!(config.muted);
    assert!(!bank.trigger(ThunderTier::Near, &config));
    assert!(!bank.any_playing());
}

#[test]
fn test_trigger_ignored_when_thunder_disabled() {
    let mut bank = ThunderBank::default();
    let config = StormConfig {
        thunder_enabled: false,
        ..audible_config()
    };
    assert!(!bank.trigger(ThunderTier::Mid, &config));
    assert!(!bank.any_playing());
}

#[test]
fn test_trigger_starts_voice_at_thunder_volume() {
    let mut bank = ThunderBank::default();
    let config = audible_config();
    assert!(bank.trigger(ThunderTier::Far, &config));
    let voice = bank.voice(ThunderTier::Far);
    assert!(voice.playing);
    assert!(!voice.at_start);
    assert!((voice.volume - 0.18).abs() < 1e-6);
    assert!(!bank.voice(ThunderTier::Near).playing);
}

#[test]
fn test_trigger_does_not_restart_playing_voice() {
    let mut bank = ThunderBank::default();
    let config = audible_config();
    assert!(bank.trigger(ThunderTier::Near, &config));
    assert!(!bank.trigger(ThunderTier::Near, &config));
    assert!(bank.voice(ThunderTier::Near).playing);
}

#[test]
fn test_stop_all_rewinds_every_voice() {
    let mut bank = ThunderBank::default();
    let config = audible_config();
    for tier in ThunderTier::ALL {
        bank.trigger(tier, &config);
    }
    bank.stop_all();
    for tier in ThunderTier::ALL {
        let voice = bank.voice(tier);
        assert!(!voice.playing);
        assert!(voice.at_start);
    }
}

#[test]
fn test_finished_voice_can_play_again() {
    let mut bank = ThunderBank::default();
    let config = audible_config();
    bank.trigger(ThunderTier::Mid, &config);
    bank.finished(ThunderTier::Mid);
    assert!(!bank.any_playing());
    assert!(bank.trigger(ThunderTier::Mid, &config));
}

#[test]
fn test_set_volume_reaches_all_voices() {
    let mut bank = ThunderBank::default();
    bank.set_volume(0.05);
    for tier in ThunderTier::ALL {
        assert!((bank.voice(tier).volume - 0.05).abs() < 1e-6);
    }
}
