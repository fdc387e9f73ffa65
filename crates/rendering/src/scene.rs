use bevy::prelude::*;
use bevy::window::{WindowResized, WindowScaleFactorChanged};

use simulation::storm_config::StormConfig;

/// Ambient fill in cd/m²; lightning has to outshine this to read as a flash.
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Highest device pixel ratio the scene renders at.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

pub fn setup_scene_lighting(mut commands: Commands, config: Res<StormConfig>) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(0x55, 0x55, 0x55),
        brightness: AMBIENT_BRIGHTNESS,
    });
    commands.insert_resource(ClearColor(Color::Srgba(config.background_color)));
}

/// Background color follows the panel.
pub fn sync_clear_color(config: Res<StormConfig>, mut clear: ResMut<ClearColor>) {
    if !config.is_changed() {
        return;
    }
    let color = Color::Srgba(config.background_color);
    if clear.0 != color {
        clear.0 = color;
    }
}

/// Scale factor override for a display's native ratio, or `None` when the
/// native ratio is already within bounds.
pub fn capped_scale_factor(native: f32) -> Option<f32> {
    (native > MAX_PIXEL_RATIO).then_some(MAX_PIXEL_RATIO)
}

/// Re-apply the pixel ratio cap whenever the window is resized or moves to
/// a display with a different ratio.
pub fn cap_pixel_ratio(
    mut resized: EventReader<WindowResized>,
    mut rescaled: EventReader<WindowScaleFactorChanged>,
    mut windows: Query<&mut Window>,
    mut first_run: Local<bool>,
) {
    let triggered = resized.read().count() + rescaled.read().count() > 0;
    if !triggered && *first_run {
        return;
    }
    *first_run = true;

    for mut window in &mut windows {
        let wanted = capped_scale_factor(window.resolution.base_scale_factor());
        if window.resolution.scale_factor_override() != wanted {
            window.resolution.set_scale_factor_override(wanted);
        }
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene_lighting)
            .add_systems(Update, (sync_clear_color, cap_pixel_ratio));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_is_capped_at_two() {
        assert_eq!(capped_scale_factor(1.0), None);
        assert_eq!(capped_scale_factor(2.0), None);
        assert_eq!(capped_scale_factor(3.0), Some(2.0));
    }
}
