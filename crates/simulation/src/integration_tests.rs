//! Integration tests for the storm using the `TestStorm` harness.
//!
//! These spin up a headless Bevy App with `SimulationPlugin` and check that
//! the frame loop and the panel controls keep every dependent resource in step.

use crate::audio_mixer::RainSoundLayer;
use crate::config::{RAIN_RESPAWN_Y_MAX, THUNDER_VOLUME_SCALE};
use crate::lightning::ThunderTier;
use crate::rain_field::RainLayerKind;
use crate::storm_config::StormConfig;
use crate::test_harness::TestStorm;
use crate::water_surface::WaveParams;

// ===========================================================================
// 1. Bootstrap
// ===========================================================================

#[test]
fn default_storm_starts_at_level_four() {
    let storm = TestStorm::new();
    assert_eq!(storm.config().rain_level, 4);
    assert_eq!(storm.rain().inner.len(), 3000);
    assert_eq!(storm.rain().outer.len(), 1000);
    assert_eq!(storm.rain_audio().level(), 4);
}

#[test]
fn default_storm_starts_muted() {
    let storm = TestStorm::new();
    assert!(storm.config().muted);
    assert!(storm.rain_audio().is_muted());
    assert_eq!(storm.rain_audio().playing_count(), 0);
}

#[test]
fn custom_config_is_applied_at_startup() {
    let config = StormConfig {
        rain_level: 8,
        muted: false,
        ..Default::default()
    };
    let storm = TestStorm::with_config(config, 3);
    assert_eq!(storm.rain().total_drops(), 8000);
    assert!(storm.rain_audio().voice(RainSoundLayer::Heavy).playing);
}

// ===========================================================================
// 2. Frame loop
// ===========================================================================

#[test]
fn every_frame_advances_the_clock_once() {
    let mut storm = TestStorm::new();
    let before = storm.clock().ticks;
    storm.tick(25);
    assert_eq!(storm.clock().ticks, before + 25);
}

#[test]
fn cloud_spin_tracks_frame_count() {
    let mut storm = TestStorm::new();
    let ticks_before = storm.clock().ticks;
    storm.tick(50);
    let frames = storm.clock().ticks as f32;
    let angle = storm.observe().cloud_angle;
    assert!((angle - frames * -0.002).abs() < 1e-4, "angle {angle}");
    assert_eq!(storm.clock().ticks - ticks_before, 50);
}

#[test]
fn rain_stays_within_band_while_running() {
    let mut storm = TestStorm::new().with_rain_level(9);
    storm.tick(200);
    for kind in RainLayerKind::ALL {
        let field = storm.rain().get(kind);
        assert_eq!(field.len(), kind.drop_count(9));
        for p in field.positions() {
            assert!(p.y >= kind.recycle_floor() && p.y <= RAIN_RESPAWN_Y_MAX);
        }
    }
}

#[test]
fn same_seed_gives_same_rain() {
    let mut a = TestStorm::with_seed(11);
    let mut b = TestStorm::with_seed(11);
    a.tick(30);
    b.tick(30);
    assert_eq!(a.rain().inner.positions(), b.rain().inner.positions());
    assert_eq!(a.lightning().strikes, b.lightning().strikes);
}

// ===========================================================================
// 3. Controls
// ===========================================================================

#[test]
fn rain_level_change_rebuilds_rain_and_audio() {
    let mut storm = TestStorm::new().unmuted();
    let generation = storm.rain().inner.generation();

    storm.controls(|c| c.set_rain_level(7));

    assert_eq!(storm.config().rain_level, 7);
    assert_eq!(storm.rain().inner.len(), 5250);
    assert_eq!(storm.rain().outer.len(), 1750);
    assert!(storm.rain().inner.generation() > generation);
    assert_eq!(storm.rain_audio().playing_count(), 2);
}

#[test]
fn rain_level_zero_empties_rain_and_silences_loops() {
    let mut storm = TestStorm::new().unmuted();
    storm.controls(|c| c.set_rain_level(0));
    assert_eq!(storm.rain().total_drops(), 0);
    assert_eq!(storm.rain_audio().playing_count(), 0);
    storm.tick(5);
    assert_eq!(storm.rain().total_drops(), 0);
}

#[test]
fn muted_storm_never_plays_thunder() {
    let mut storm = TestStorm::new();
    storm.tick(300);
    assert!(storm.lightning().strikes > 0);
    assert!(!storm.thunder().any_playing());
}

#[test]
fn unmuted_storm_eventually_thunders() {
    let mut storm = TestStorm::new().unmuted();
    storm.tick(300);
    assert!(storm.thunder().any_playing());
}

#[test]
fn muting_stops_and_rewinds_thunder() {
    let mut storm = TestStorm::new().unmuted();
    let config = storm.config().clone();
    storm
        .resource_mut::<crate::audio_mixer::ThunderBank>()
        .trigger(ThunderTier::Near, &config);
    assert!(storm.thunder().any_playing());

    storm.controls(|c| c.set_muted(true));

    assert!(!storm.thunder().any_playing());
    assert!(storm.thunder().voice(ThunderTier::Near).at_start);
    assert_eq!(storm.rain_audio().playing_count(), 0);
}

#[test]
fn toggle_muted_flips_state() {
    let mut storm = TestStorm::new();
    storm.controls(|c| c.toggle_muted());
    assert!(!storm.config().muted);
    storm.controls(|c| c.toggle_muted());
    assert!(storm.config().muted);
}

#[test]
fn disabling_thunder_hides_lightning() {
    let mut storm = TestStorm::new();
    storm.controls(|c| c.set_thunder_enabled(false));
    assert!(!storm.lightning().is_visible());
    assert!(!storm.config().thunder_enabled);
    storm.controls(|c| c.set_thunder_enabled(true));
    assert!(storm.lightning().is_visible());
}

#[test]
fn transparent_clouds_silence_thunder_until_visible_again() {
    let mut storm = TestStorm::new().unmuted();

    storm.controls(|c| c.set_cloud_transparency(0.0));
    assert!(!storm.config().thunder_enabled);
    assert!(storm.config().thunder_requested);
    assert!(!storm.lightning().is_visible());

    storm.controls(|c| c.set_cloud_transparency(0.5));
    assert!(storm.config().thunder_enabled);
    assert!(storm.lightning().is_visible());
    let volume = storm.thunder().voice(ThunderTier::Far).volume;
    assert!((volume - 0.5 * THUNDER_VOLUME_SCALE).abs() < 1e-6);
}

#[test]
fn visible_clouds_do_not_override_user_thunder_toggle() {
    let mut storm = TestStorm::new();
    storm.controls(|c| c.set_thunder_enabled(false));
    storm.controls(|c| c.set_cloud_transparency(0.0));
    storm.controls(|c| c.set_cloud_transparency(0.8));
    assert!(!storm.config().thunder_enabled);
    assert!(!storm.lightning().is_visible());
}

#[test]
fn background_color_also_sets_fog() {
    let mut storm = TestStorm::new();
    let color = bevy::color::Srgba::rgb_u8(0x20, 0x20, 0x30);
    storm.controls(|c| c.set_background_color(color));
    assert_eq!(storm.config().background_color, color);
    assert_eq!(
        storm.resource::<WaveParams>().fog_color,
        bevy::color::LinearRgba::from(color)
    );
}

// ===========================================================================
// 4. Observation
// ===========================================================================

#[test]
fn observation_reflects_controls() {
    let mut storm = TestStorm::new().with_rain_level(2);
    storm.tick(3);
    let obs = storm.observe();
    assert_eq!(obs.rain_level, 2);
    assert_eq!(obs.inner_drops, 1500);
    assert_eq!(obs.outer_drops, 500);
    assert_eq!(obs.rain_voices.len(), 3);
    assert_eq!(obs.thunder_voices.len(), 3);
    assert_eq!(obs.background_color, "#11111f");
}
