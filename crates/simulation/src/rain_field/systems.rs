use bevy::prelude::*;

use crate::sim_rng::SimRng;
use crate::FrameSet;

use super::field::RainLayers;

/// Frame step 5: advance both rain layers by one fixed step.
pub fn advance_rain(mut rain: ResMut<RainLayers>, mut rng: ResMut<SimRng>) {
    rain.advance(&mut rng.0);
}

pub struct RainFieldPlugin;

impl Plugin for RainFieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RainLayers>()
            .add_systems(Update, advance_rain.in_set(FrameSet::Rain));
    }
}
