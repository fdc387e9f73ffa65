//! Serializable snapshot of the storm, used by the headless agent protocol.

use bevy::prelude::*;
use serde::Serialize;

use crate::audio_mixer::{RainAudioMixer, RainSoundLayer, RainVoice, ThunderBank, ThunderVoice};
use crate::clouds::CloudDrift;
use crate::frame_loop::StormClock;
use crate::lightning::{LightningPhase, LightningState, ThunderTier};
use crate::rain_field::RainLayers;
use crate::storm_config::{hex_string, StormConfig};
use crate::water_surface::WaterSurface;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StormObservation {
    pub tick: u64,
    pub elapsed: f32,
    pub water_time: f32,
    pub cloud_angle: f32,
    pub rain_level: u8,
    pub inner_drops: usize,
    pub outer_drops: usize,
    pub lightning: LightningObservation,
    pub rain_voices: Vec<(RainSoundLayer, RainVoice)>,
    pub thunder_voices: Vec<(ThunderTier, ThunderVoice)>,
    pub muted: bool,
    pub thunder_enabled: bool,
    pub cloud_transparency: f32,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LightningObservation {
    pub power: f32,
    pub position: [f32; 3],
    pub phase: LightningPhase,
    pub visible: bool,
    pub strikes: u64,
}

impl StormObservation {
    /// Build a snapshot from the world. Missing resources read as defaults.
    pub fn capture(world: &World) -> Self {
        let mut obs = StormObservation::default();

        if let Some(clock) = world.get_resource::<StormClock>() {
            obs.tick = clock.ticks;
            obs.elapsed = clock.elapsed;
        }
        if let Some(water) = world.get_resource::<WaterSurface>() {
            obs.water_time = water.time;
        }
        if let Some(drift) = world.get_resource::<CloudDrift>() {
            obs.cloud_angle = drift.angle;
        }
        if let Some(rain) = world.get_resource::<RainLayers>() {
            obs.inner_drops = rain.inner.len();
            obs.outer_drops = rain.outer.len();
        }
        if let Some(lightning) = world.get_resource::<LightningState>() {
            obs.lightning = LightningObservation {
                power: lightning.power,
                position: lightning.position.to_array(),
                phase: lightning.phase,
                visible: lightning.is_visible(),
                strikes: lightning.strikes,
            };
        }
        if let Some(mixer) = world.get_resource::<RainAudioMixer>() {
            obs.rain_voices = RainSoundLayer::ALL
                .iter()
                .map(|&layer| (layer, *mixer.voice(layer)))
                .collect();
        }
        if let Some(bank) = world.get_resource::<ThunderBank>() {
            obs.thunder_voices = ThunderTier::ALL
                .iter()
                .map(|&tier| (tier, *bank.voice(tier)))
                .collect();
        }
        if let Some(config) = world.get_resource::<StormConfig>() {
            obs.rain_level = config.rain_level;
            obs.muted = config.muted;
            obs.thunder_enabled = config.thunder_enabled;
            obs.cloud_transparency = config.cloud_transparency;
            obs.background_color = hex_string(config.background_color);
        }

        obs
    }
}
