use bevy::prelude::*;

use crate::config::CLOUD_SPIN_PER_TICK;
use crate::FrameSet;

/// Accumulated spin of the cloud sprites around their facing axis.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CloudDrift {
    pub angle: f32,
}

impl CloudDrift {
    pub fn spin(&mut self) {
        self.angle += CLOUD_SPIN_PER_TICK;
    }
}

/// Frame step 3.
pub fn spin_clouds(mut drift: ResMut<CloudDrift>) {
    drift.spin();
}

pub struct CloudsPlugin;

impl Plugin for CloudsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CloudDrift>()
            .add_systems(Update, spin_clouds.in_set(FrameSet::Clouds));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_is_fixed_per_tick() {
        let mut drift = CloudDrift::default();
        for _ in 0..10 {
            drift.spin();
        }
        assert!((drift.angle + 0.02).abs() < 1e-6);
    }
}
