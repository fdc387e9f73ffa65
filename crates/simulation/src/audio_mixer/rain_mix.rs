use bevy::prelude::*;
use serde::Serialize;

use crate::config::{DEFAULT_RAIN_LEVEL, MAX_RAIN_LEVEL};

/// The three looping rain samples, from drizzle to downpour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RainSoundLayer {
    Light,
    Medium,
    Heavy,
}

impl RainSoundLayer {
    pub const ALL: [RainSoundLayer; 3] = [
        RainSoundLayer::Light,
        RainSoundLayer::Medium,
        RainSoundLayer::Heavy,
    ];

    pub fn index(self) -> usize {
        match self {
            RainSoundLayer::Light => 0,
            RainSoundLayer::Medium => 1,
            RainSoundLayer::Heavy => 2,
        }
    }

    /// Sample path relative to the asset root.
    pub fn asset_path(self) -> &'static str {
        match self {
            RainSoundLayer::Light => "sounds/rain-light.ogg",
            RainSoundLayer::Medium => "sounds/rain-med.ogg",
            RainSoundLayer::Heavy => "sounds/rain-heavy.ogg",
        }
    }
}

/// Volumes per layer (light, medium, heavy) for a rain level. `None` means
/// the layer is paused at that level.
pub fn rain_mix_for_level(level: u8) -> [Option<f32>; 3] {
    match level {
        1 => [Some(0.8), None, None],
        2 => [Some(0.9), None, None],
        3 => [Some(1.0), Some(0.05), None],
        4 => [None, Some(0.2), None],
        5 => [None, Some(0.4), None],
        6 => [None, Some(0.6), None],
        7 => [None, Some(0.6), Some(0.1)],
        8 => [None, None, Some(0.25)],
        9 => [None, None, Some(0.3)],
        _ => [None, None, None],
    }
}

/// Playback intent for one looping rain sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RainVoice {
    pub volume: f32,
    pub looping: bool,
    pub playing: bool,
}

impl Default for RainVoice {
    fn default() -> Self {
        Self {
            volume: 1.0,
            looping: false,
            playing: false,
        }
    }
}

/// Maps the rain level onto the three rain loops.
///
/// Starts muted: nothing plays until the user unmutes.
#[derive(Resource, Debug, Clone)]
pub struct RainAudioMixer {
    voices: [RainVoice; 3],
    level: u8,
    muted: bool,
}

impl Default for RainAudioMixer {
    fn default() -> Self {
        Self {
            voices: [RainVoice::default(); 3],
            level: DEFAULT_RAIN_LEVEL,
            muted: true,
        }
    }
}

impl RainAudioMixer {
    /// Select the loops for a rain level. Layers not used at this level are
    /// paused explicitly so old loops never overlap the new mix.
    pub fn set_intensity(&mut self, level: u8) {
        self.level = level.min(MAX_RAIN_LEVEL);
        self.apply();
    }

    /// Muting pauses every layer; unmuting restores the mix for the current level.
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply();
    }

    fn apply(&mut self) {
        let mix = if self.muted {
            [None, None, None]
        } else {
            rain_mix_for_level(self.level)
        };
        for (voice, target) in self.voices.iter_mut().zip(mix) {
            match target {
                Some(volume) => {
                    voice.volume = volume;
                    voice.looping = true;
                    voice.playing = true;
                }
                None => voice.playing = false,
            }
        }
    }

    pub fn voice(&self, layer: RainSoundLayer) -> &RainVoice {
        &self.voices[layer.index()]
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of layers currently meant to be audible.
    pub fn playing_count(&self) -> usize {
        self.voices.iter().filter(|v| v.playing).count()
    }
}
