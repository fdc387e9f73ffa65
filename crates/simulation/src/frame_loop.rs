//! Per-frame ordering of the storm.
//!
//! Every `Update` runs the storm in one fixed, chained order:
//!
//! 1. `Clock`     – elapsed time since start
//! 2. `Water`     – shader time
//! 3. `Clouds`    – cloud spin
//! 4. `Lightning` – strike trigger and thunder
//! 5. `Rain`      – both rain layers
//! 6. `Controls`  – camera controls (rendering crate)
//!
//! Rendering follows in Bevy's render sub-app, and the next tick is scheduled
//! by the runner. Rain and lightning step once per tick regardless of frame
//! time; only the water shader sees wall-clock time.

use bevy::prelude::*;

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Clock,
    Water,
    Clouds,
    Lightning,
    Rain,
    Controls,
}

/// Elapsed seconds since startup and the number of completed ticks.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct StormClock {
    pub elapsed: f32,
    pub ticks: u64,
}

/// Frame step 1.
pub fn advance_storm_clock(time: Res<Time>, mut clock: ResMut<StormClock>) {
    clock.elapsed = time.elapsed_secs();
    clock.ticks = clock.ticks.wrapping_add(1);
}

pub struct FrameLoopPlugin;

impl Plugin for FrameLoopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StormClock>()
            .configure_sets(
                Update,
                (
                    FrameSet::Clock,
                    FrameSet::Water,
                    FrameSet::Clouds,
                    FrameSet::Lightning,
                    FrameSet::Rain,
                    FrameSet::Controls,
                )
                    .chain(),
            )
            .add_systems(Update, advance_storm_clock.in_set(FrameSet::Clock));
    }
}
