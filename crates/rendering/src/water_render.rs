//! Ocean plane driven by `shaders/water.wgsl`.
//!
//! The mesh is a flat, densely subdivided plane; all wave motion happens in
//! the vertex shader. Each frame the water driver's time is copied into the
//! material, and the wave table is copied across whenever the panel edits it.

// `ShaderType` derive on `WaterUniforms` emits per-field `check` helpers that
// trip `dead_code` under the workspace `unused = "deny"` lint.
#![allow(dead_code)]

use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderRef, ShaderType};

use simulation::config::{WATER_SEGMENTS, WATER_SIZE};
use simulation::water_surface::{WaterSurface, WaveParams};

const WATER_SHADER_PATH: &str = "shaders/water.wgsl";

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct WaterMaterial {
    #[uniform(0)]
    pub uniforms: WaterUniforms,
}

/// Layout mirrors `WaterUniforms` in the shader; colors are linear RGBA.
#[derive(ShaderType, Debug, Clone, Copy, Default, PartialEq)]
pub struct WaterUniforms {
    pub depth_color: Vec4,
    pub surface_color: Vec4,
    pub fog_color: Vec4,
    pub big_waves_frequency: Vec2,
    pub time: f32,
    pub big_waves_elevation: f32,
    pub big_waves_speed: f32,
    pub small_waves_elevation: f32,
    pub small_waves_frequency: f32,
    pub small_waves_speed: f32,
    pub small_waves_iterations: f32,
    pub color_offset: f32,
    pub color_multiplier: f32,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl WaterUniforms {
    pub fn from_params(params: &WaveParams, time: f32) -> Self {
        Self {
            depth_color: linear_vec4(params.depth_color),
            surface_color: linear_vec4(params.surface_color),
            fog_color: linear_vec4(params.fog_color),
            big_waves_frequency: params.big_waves_frequency,
            time,
            big_waves_elevation: params.big_waves_elevation,
            big_waves_speed: params.big_waves_speed,
            small_waves_elevation: params.small_waves_elevation,
            small_waves_frequency: params.small_waves_frequency,
            small_waves_speed: params.small_waves_speed,
            small_waves_iterations: params.small_waves_iterations as f32,
            color_offset: params.color_offset,
            color_multiplier: params.color_multiplier,
            fog_near: params.fog_near,
            fog_far: params.fog_far,
        }
    }
}

fn linear_vec4(color: LinearRgba) -> Vec4 {
    Vec4::new(color.red, color.green, color.blue, color.alpha)
}

impl Material for WaterMaterial {
    fn vertex_shader() -> ShaderRef {
        WATER_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        WATER_SHADER_PATH.into()
    }
}

/// Marker for the single ocean entity.
#[derive(Component)]
pub struct WaterPlane;

pub fn spawn_water(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<WaterMaterial>>,
    params: Res<WaveParams>,
    water: Res<WaterSurface>,
) {
    let mesh = Plane3d::default()
        .mesh()
        .size(WATER_SIZE, WATER_SIZE)
        .subdivisions(WATER_SEGMENTS - 1)
        .build();

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(WaterMaterial {
            uniforms: WaterUniforms::from_params(&params, water.time),
        })),
        Transform::default(),
        WaterPlane,
    ));
}

/// Copy shader time every frame and the wave table when it changed.
pub fn sync_water_material(
    params: Res<WaveParams>,
    water: Res<WaterSurface>,
    query: Query<&MeshMaterial3d<WaterMaterial>, With<WaterPlane>>,
    mut materials: ResMut<Assets<WaterMaterial>>,
) {
    let Ok(handle) = query.get_single() else {
        return;
    };
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };
    if params.is_changed() {
        material.uniforms = WaterUniforms::from_params(&params, water.time);
    } else {
        material.uniforms.time = water.time;
    }
}

pub struct WaterRenderPlugin;

impl Plugin for WaterRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<WaterMaterial>::default())
            .add_systems(Startup, spawn_water)
            .add_systems(
                Update,
                sync_water_material.after(simulation::FrameSet::Water),
            );
    }
}
