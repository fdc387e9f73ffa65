use bevy::prelude::*;

pub mod audio_playback;
pub mod camera;
pub mod cloud_render;
pub mod egui_input_guard;
pub mod lightning_render;
pub mod rain_render;
pub mod scene;
pub mod water_render;

use simulation::FrameSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, camera::setup_camera).add_systems(
            Update,
            (camera::camera_orbit_drag, camera::update_orbit_camera)
                .chain()
                .in_set(FrameSet::Controls),
        );

        app.add_plugins((
            scene::ScenePlugin,
            water_render::WaterRenderPlugin,
            rain_render::RainRenderPlugin,
            cloud_render::CloudRenderPlugin,
            lightning_render::LightningRenderPlugin,
            audio_playback::AudioPlaybackPlugin,
        ));
    }
}
