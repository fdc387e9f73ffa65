//! Storm audio mixing.
//!
//! Owns the data side of the storm's sound: which rain loops should be
//! playing at what volume for the current rain level, and which one-shot
//! thunder voices are sounding. Actual playback lives in the rendering
//! crate, which mirrors these resources onto audio sinks every frame.
//!
//! Both resources are driven by explicit calls (`set_intensity`,
//! `set_muted`, `trigger`, `stop_all`); nothing here polls configuration.

mod rain_mix;
mod thunder;

#[cfg(test)]
mod tests;

pub use rain_mix::{rain_mix_for_level, RainAudioMixer, RainSoundLayer, RainVoice};
pub use thunder::{ThunderBank, ThunderVoice};

use bevy::prelude::*;

pub struct AudioMixerPlugin;

impl Plugin for AudioMixerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainAudioMixer>()
            .init_resource::<ThunderBank>();
    }
}
