//! Entry points behind every debug-panel control.
//!
//! A change handler never just writes a field: it calls one of these methods,
//! which update `StormConfig` and synchronously re-invoke every component that
//! depends on the changed value (e.g. a new rain level rebuilds both rain
//! layers and re-selects the rain loops in the same call).

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::audio_mixer::{RainAudioMixer, ThunderBank};
use crate::config::MAX_RAIN_LEVEL;
use crate::lightning::LightningState;
use crate::rain_field::RainLayers;
use crate::sim_rng::SimRng;
use crate::storm_config::StormConfig;
use crate::water_surface::WaveParams;

#[derive(SystemParam)]
pub struct StormControls<'w> {
    config: ResMut<'w, StormConfig>,
    waves: ResMut<'w, WaveParams>,
    rain: ResMut<'w, RainLayers>,
    rain_audio: ResMut<'w, RainAudioMixer>,
    thunder: ResMut<'w, ThunderBank>,
    lightning: ResMut<'w, LightningState>,
    rng: ResMut<'w, SimRng>,
}

impl StormControls<'_> {
    pub fn config(&self) -> &StormConfig {
        &self.config
    }

    pub fn waves(&self) -> &WaveParams {
        &self.waves
    }

    /// Direct access for sliders bound straight to a wave uniform.
    pub fn waves_mut(&mut self) -> &mut WaveParams {
        &mut self.waves
    }

    /// Rebuild the rain and re-select the rain loops for `level`.
    pub fn set_rain_level(&mut self, level: u8) {
        let level = level.min(MAX_RAIN_LEVEL);
        self.config.rain_level = level;
        self.rain.regenerate(level, &mut self.rng.0);
        self.rain_audio.set_intensity(level);
        info!("Rain level set to {}", level);
    }

    /// Mute pauses the rain loops and stops and rewinds all thunder.
    pub fn set_muted(&mut self, muted: bool) {
        self.config.muted = muted;
        self.rain_audio.set_muted(muted);
        if muted {
            self.thunder.stop_all();
        }
        info!("Sound {}", if muted { "muted" } else { "unmuted" });
    }

    pub fn toggle_muted(&mut self) {
        let muted = !self.config.muted;
        self.set_muted(muted);
    }

    /// The user's thunder toggle. Turning it off hides the light and stops
    /// all thunder immediately.
    pub fn set_thunder_enabled(&mut self, enabled: bool) {
        self.config.thunder_requested = enabled;
        self.apply_thunder_enabled(enabled);
    }

    fn apply_thunder_enabled(&mut self, enabled: bool) {
        self.config.thunder_enabled = enabled;
        self.lightning.enabled = enabled;
        if !enabled {
            self.thunder.stop_all();
        }
    }

    /// Cloud opacity also sets thunder volume. Fully transparent clouds
    /// silence thunder; making them visible again restores the user's toggle.
    pub fn set_cloud_transparency(&mut self, transparency: f32) {
        let transparency = transparency.clamp(0.0, 1.0);
        self.config.cloud_transparency = transparency;
        self.thunder.set_volume(self.config.thunder_volume());

        if transparency == 0.0 {
            if self.config.thunder_enabled {
                self.apply_thunder_enabled(false);
            }
        } else if self.config.thunder_requested && !self.config.thunder_enabled {
            self.apply_thunder_enabled(true);
        }
    }

    /// Background drives both the clear color and the water shader's fog.
    pub fn set_background_color(&mut self, color: Srgba) {
        self.config.background_color = color;
        self.waves.set_fog_color(color);
    }

    pub fn set_depth_color(&mut self, color: Srgba) {
        self.config.depth_color = color;
        self.waves.set_depth_color(color);
    }

    pub fn set_surface_color(&mut self, color: Srgba) {
        self.config.surface_color = color;
        self.waves.set_surface_color(color);
    }

    pub fn set_rain_color(&mut self, color: Srgba) {
        self.config.rain_color = color;
    }
}

/// Push the startup configuration through the same entry points the panel
/// uses, so the first frame already has rain buffers and a matching mix.
pub fn apply_initial_config(mut controls: StormControls) {
    let config = controls.config().clone();
    controls.set_rain_level(config.rain_level);
    controls.set_muted(config.muted);
    controls.set_thunder_enabled(config.thunder_requested);
    controls.set_cloud_transparency(config.cloud_transparency);
    controls.set_background_color(config.background_color);
    controls.set_depth_color(config.depth_color);
    controls.set_surface_color(config.surface_color);
}
