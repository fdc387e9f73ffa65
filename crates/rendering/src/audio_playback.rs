//! Mirrors the storm's audio intent onto Bevy audio sinks.
//!
//! `RainAudioMixer` and `ThunderBank` in the simulation crate decide what
//! should be audible. This module only follows them: rain loops are spawned
//! once, paused, and toggled in place; a thunder clap gets its own one-shot
//! entity that is despawned when the voice stops or the sample runs out.
//! Missing or undecodable sound files never produce a sink, so they are
//! simply silent.

use bevy::asset::LoadState;
use bevy::audio::{AudioSink, AudioSinkPlayback, PlaybackSettings, Volume};
use bevy::prelude::*;

use simulation::audio_mixer::{RainAudioMixer, RainSoundLayer, ThunderBank};
use simulation::lightning::ThunderTier;

#[derive(Resource)]
pub struct ThunderSounds {
    clips: [Handle<AudioSource>; 3],
}

#[derive(Component, Debug, Clone, Copy)]
pub struct RainLoop(pub RainSoundLayer);

#[derive(Component, Debug, Clone, Copy)]
pub struct ThunderClap(pub ThunderTier);

pub fn load_storm_sounds(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mixer: Res<RainAudioMixer>,
) {
    for layer in RainSoundLayer::ALL {
        let voice = mixer.voice(layer);
        commands.spawn((
            AudioPlayer::new(asset_server.load(layer.asset_path())),
            PlaybackSettings::LOOP
                .with_volume(Volume::new(voice.volume))
                .paused(),
            RainLoop(layer),
        ));
    }

    commands.insert_resource(ThunderSounds {
        clips: ThunderTier::ALL.map(|tier| asset_server.load(tier.asset_path())),
    });
}

/// Play, pause and re-level the rain loops to match the mixer.
pub fn sync_rain_loops(mixer: Res<RainAudioMixer>, sinks: Query<(&AudioSink, &RainLoop)>) {
    for (sink, rain_loop) in &sinks {
        let voice = mixer.voice(rain_loop.0);
        if (sink.volume() - voice.volume).abs() > f32::EPSILON {
            sink.set_volume(voice.volume);
        }
        if voice.playing && sink.is_paused() {
            sink.play();
        } else if !voice.playing && !sink.is_paused() {
            sink.pause();
        }
    }
}

/// Start, stop and retire thunder claps to match the bank.
pub fn sync_thunder_claps(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    sounds: Res<ThunderSounds>,
    mut bank: ResMut<ThunderBank>,
    claps: Query<(Entity, &ThunderClap, Option<&AudioSink>)>,
) {
    for tier in ThunderTier::ALL {
        let voice = *bank.voice(tier);
        let clap = claps.iter().find(|(_, clap, _)| clap.0 == tier);

        match (voice.playing, clap) {
            (true, None) => {
                let clip = &sounds.clips[tier.index()];
                if let LoadState::Failed(_) = asset_server.load_state(clip) {
                    bank.finished(tier);
                    continue;
                }
                commands.spawn((
                    AudioPlayer::new(clip.clone()),
                    PlaybackSettings::ONCE.with_volume(Volume::new(voice.volume)),
                    ThunderClap(tier),
                ));
            }
            (true, Some((entity, _, Some(sink)))) => {
                if sink.empty() {
                    commands.entity(entity).despawn();
                    bank.finished(tier);
                } else if (sink.volume() - voice.volume).abs() > f32::EPSILON {
                    sink.set_volume(voice.volume);
                }
            }
            // Still decoding; the sink appears once the clip is ready.
            (true, Some((_, _, None))) => {}
            // Stopped from the panel: drop the clap so the next one starts at zero.
            (false, Some((entity, _, sink))) => {
                if let Some(sink) = sink {
                    sink.pause();
                }
                commands.entity(entity).despawn();
            }
            (false, None) => {}
        }
    }
}

pub struct AudioPlaybackPlugin;

impl Plugin for AudioPlaybackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_storm_sounds).add_systems(
            PostUpdate,
            (sync_rain_loops, sync_thunder_claps),
        );
    }
}
