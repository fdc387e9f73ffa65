use bevy::prelude::*;

use crate::audio_mixer::ThunderBank;
use crate::sim_rng::SimRng;
use crate::storm_config::StormConfig;
use crate::FrameSet;

use super::state::LightningState;

/// Frame step 4: run the lightning trigger and fire thunder for the tier it picks.
pub fn tick_lightning(
    config: Res<StormConfig>,
    mut lightning: ResMut<LightningState>,
    mut thunder: ResMut<ThunderBank>,
    mut rng: ResMut<SimRng>,
) {
    let Some(outcome) = lightning.tick(&mut rng.0) else {
        return;
    };
    if let Some(tier) = outcome.tier {
        if thunder.trigger(tier, &config) {
            debug!(
                "Thunder {:?} at power {:.1}, pos {:?}",
                tier, outcome.power, lightning.position
            );
        }
    }
}

pub struct LightningPlugin;

impl Plugin for LightningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LightningState>()
            .add_systems(Update, tick_lightning.in_set(FrameSet::Lightning));
    }
}
