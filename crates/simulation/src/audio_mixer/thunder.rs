use bevy::prelude::*;
use serde::Serialize;

use crate::lightning::ThunderTier;
use crate::storm_config::StormConfig;

/// Playback intent for one thunder sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThunderVoice {
    pub volume: f32,
    pub playing: bool,
    /// The next play starts from the beginning of the sample.
    pub at_start: bool,
}

impl Default for ThunderVoice {
    fn default() -> Self {
        Self {
            volume: 0.0,
            playing: false,
            at_start: true,
        }
    }
}

/// The three one-shot thunder voices, one per tier.
#[derive(Resource, Debug, Clone, Default)]
pub struct ThunderBank {
    voices: [ThunderVoice; 3],
}

impl ThunderBank {
    /// Start the voice for `tier` if thunder is audible under `config`.
    ///
    /// A voice that is already sounding is left alone rather than restarted.
    /// Returns whether playback was started.
    pub fn trigger(&mut self, tier: ThunderTier, config: &StormConfig) -> bool {
        if config.muted || !config.thunder_enabled {
            return false;
        }
        let voice = &mut self.voices[tier.index()];
        voice.volume = config.thunder_volume();
        if voice.playing {
            return false;
        }
        voice.playing = true;
        voice.at_start = false;
        true
    }

    /// Pause every voice and rewind it to position zero.
    pub fn stop_all(&mut self) {
        for voice in self.voices.iter_mut() {
            voice.playing = false;
            voice.at_start = true;
        }
    }

    /// Apply a new thunder volume to all voices, including ones mid-clap.
    pub fn set_volume(&mut self, volume: f32) {
        for voice in self.voices.iter_mut() {
            voice.volume = volume;
        }
    }

    /// Called by playback once a voice's sample has run out.
    pub fn finished(&mut self, tier: ThunderTier) {
        let voice = &mut self.voices[tier.index()];
        voice.playing = false;
        voice.at_start = true;
    }

    pub fn voice(&self, tier: ThunderTier) -> &ThunderVoice {
        &self.voices[tier.index()]
    }

    pub fn any_playing(&self) -> bool {
        self.voices.iter().any(|v| v.playing)
    }
}
