//! Water surface driver.
//!
//! The ocean is a vertex-displacement shader; the host only feeds it a
//! monotonic `time` once per tick. The wave table in `WaveParams` is tuned
//! directly by the debug panel and copied into the shader uniforms by the
//! renderer when it changes. Range limits live in the panel widgets, not here.

use bevy::prelude::*;

use crate::config::{FOG_FAR, FOG_NEAR};
use crate::frame_loop::StormClock;
use crate::storm_config::StormConfig;
use crate::FrameSet;

/// Tunable wave and color parameters consumed by the water shader.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WaveParams {
    pub big_waves_elevation: f32,
    pub big_waves_frequency: Vec2,
    pub big_waves_speed: f32,
    pub small_waves_elevation: f32,
    pub small_waves_frequency: f32,
    pub small_waves_speed: f32,
    pub small_waves_iterations: u32,
    /// Linear color; converted from sRGB when the panel changes it.
    pub depth_color: LinearRgba,
    pub surface_color: LinearRgba,
    pub color_offset: f32,
    pub color_multiplier: f32,
    pub fog_color: LinearRgba,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self::from_config(&StormConfig::default())
    }
}

impl WaveParams {
    /// Default wave table with colors taken from `config`.
    pub fn from_config(config: &StormConfig) -> Self {
        Self {
            big_waves_elevation: 0.2,
            big_waves_frequency: Vec2::new(4.0, 1.5),
            big_waves_speed: 1.75,
            small_waves_elevation: 0.15,
            small_waves_frequency: 3.0,
            small_waves_speed: 0.2,
            small_waves_iterations: 4,
            depth_color: LinearRgba::from(config.depth_color),
            surface_color: LinearRgba::from(config.surface_color),
            color_offset: 0.08,
            color_multiplier: 5.0,
            fog_color: LinearRgba::from(config.background_color),
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
        }
    }

    pub fn set_depth_color(&mut self, color: Srgba) {
        self.depth_color = LinearRgba::from(color);
    }

    pub fn set_surface_color(&mut self, color: Srgba) {
        self.surface_color = LinearRgba::from(color);
    }

    pub fn set_fog_color(&mut self, color: Srgba) {
        self.fog_color = LinearRgba::from(color);
    }
}

/// Time fed to the displacement shader.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct WaterSurface {
    pub time: f32,
}

impl WaterSurface {
    pub fn tick(&mut self, elapsed_seconds: f32) {
        self.time = elapsed_seconds;
    }
}

/// Frame step 2: hand the elapsed time to the water shader.
pub fn tick_water_surface(clock: Res<StormClock>, mut water: ResMut<WaterSurface>) {
    water.tick(clock.elapsed);
}

pub struct WaterSurfacePlugin;

impl Plugin for WaterSurfacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WaveParams>()
            .init_resource::<WaterSurface>()
            .add_systems(Update, tick_water_surface.in_set(FrameSet::Water));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_sets_time() {
        let mut water = WaterSurface::default();
        water.tick(1.5);
        assert_eq!(water.time, 1.5);
        water.tick(2.25);
        assert_eq!(water.time, 2.25);
    }

    #[test]
    fn test_default_wave_table() {
        let params = WaveParams::default();
        assert_eq!(params.big_waves_elevation, 0.2);
        assert_eq!(params.big_waves_frequency, Vec2::new(4.0, 1.5));
        assert_eq!(params.small_waves_iterations, 4);
        assert_eq!(params.fog_near, 0.1);
        assert_eq!(params.fog_far, 4.0);
    }

    #[test]
    fn test_color_change_converts_to_linear() {
        let mut params = WaveParams::default();
        let srgb = Srgba::rgb_u8(0x80, 0x80, 0x80);
        params.set_depth_color(srgb);
        // sRGB mid grey is about 0.216 in linear space.
        assert!((params.depth_color.red - 0.2158).abs() < 1e-3);
        assert_eq!(params.depth_color, LinearRgba::from(srgb));
    }
}
