//! # TestStorm — headless harness for the storm simulation
//!
//! Wraps a `MinimalPlugins` app with `SimulationPlugin` so integration tests
//! and benches can tick the storm and drive the panel controls without a
//! window, renderer or audio device.

use bevy::app::App;
use bevy::ecs::system::SystemState;
use bevy::prelude::*;

use crate::audio_mixer::{RainAudioMixer, ThunderBank};
use crate::controls::StormControls;
use crate::lightning::LightningState;
use crate::observation::StormObservation;
use crate::rain_field::RainLayers;
use crate::sim_rng::SimRng;
use crate::storm_config::StormConfig;
use crate::{SimulationPlugin, StormClock};

/// Seed used by `TestStorm::new()`.
pub const TEST_SEED: u64 = 42;

pub struct TestStorm {
    app: App,
}

impl Default for TestStorm {
    fn default() -> Self {
        Self::new()
    }
}

impl TestStorm {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Default configuration, deterministic seed.
    pub fn new() -> Self {
        Self::with_config(StormConfig::default(), TEST_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(StormConfig::default(), seed)
    }

    /// Start from a custom configuration. Startup systems have already run
    /// when this returns; no frame has ticked the storm yet beyond that one.
    pub fn with_config(config: StormConfig, seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Inserted before the plugin so init_resource keeps them.
        app.insert_resource(config);
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Builder helpers
    // -----------------------------------------------------------------------

    pub fn with_rain_level(mut self, level: u8) -> Self {
        self.controls(|c| c.set_rain_level(level));
        self
    }

    pub fn unmuted(mut self) -> Self {
        self.controls(|c| c.set_muted(false));
        self
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run `n` full frames.
    pub fn tick(&mut self, n: u32) -> &mut Self {
        for _ in 0..n {
            self.app.update();
        }
        self
    }

    /// Run `f` against the panel controls, the same way a UI system would.
    pub fn controls<R>(&mut self, f: impl FnOnce(&mut StormControls) -> R) -> R {
        let mut state: SystemState<StormControls<'static>> =
            SystemState::new(self.app.world_mut());
        let mut controls = state.get_mut(self.app.world_mut());
        let result = f(&mut controls);
        state.apply(self.app.world_mut());
        result
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn resource_mut<R: Resource>(&mut self) -> Mut<'_, R> {
        self.app.world_mut().resource_mut::<R>()
    }

    pub fn config(&self) -> &StormConfig {
        self.resource::<StormConfig>()
    }

    pub fn rain(&self) -> &RainLayers {
        self.resource::<RainLayers>()
    }

    pub fn rain_audio(&self) -> &RainAudioMixer {
        self.resource::<RainAudioMixer>()
    }

    pub fn thunder(&self) -> &ThunderBank {
        self.resource::<ThunderBank>()
    }

    pub fn lightning(&self) -> &LightningState {
        self.resource::<LightningState>()
    }

    pub fn clock(&self) -> &StormClock {
        self.resource::<StormClock>()
    }

    pub fn observe(&self) -> StormObservation {
        StormObservation::capture(self.app.world())
    }

    pub fn world(&self) -> &World {
        self.app.world()
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
