use bevy::prelude::*;

pub mod agent_protocol;
pub mod audio_mixer;
pub mod clouds;
pub mod config;
pub mod controls;
pub mod frame_loop;
pub mod lightning;
pub mod observation;
pub mod rain_field;
pub mod sim_rng;
pub mod storm_config;
pub mod water_surface;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use frame_loop::{FrameSet, StormClock};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Both may already be inserted by the app (env seed, custom config).
        app.init_resource::<storm_config::StormConfig>()
            .init_resource::<sim_rng::SimRng>()
            .add_systems(Startup, controls::apply_initial_config);

        app.add_plugins((
            frame_loop::FrameLoopPlugin,
            water_surface::WaterSurfacePlugin,
            clouds::CloudsPlugin,
            lightning::LightningPlugin,
            rain_field::RainFieldPlugin,
            audio_mixer::AudioMixerPlugin,
        ));
    }
}
