//! Cloud sprite above the ocean.
//!
//! The texture is requested at startup and the sprite is only spawned once
//! it has loaded. A failed load is logged once and the scene carries on
//! without clouds.

use bevy::asset::LoadState;
use bevy::prelude::*;

use simulation::clouds::CloudDrift;
use simulation::config::{CLOUD_POSITION, CLOUD_SIZE};
use simulation::storm_config::StormConfig;

const CLOUD_TEXTURE_PATH: &str = "textures/clouds.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CloudLoad {
    Pending,
    Spawned,
    Failed,
}

#[derive(Resource)]
pub struct CloudTexture {
    handle: Handle<Image>,
    state: CloudLoad,
}

#[derive(Component)]
pub struct CloudSprite;

pub fn load_cloud_texture(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(CloudTexture {
        handle: asset_server.load(CLOUD_TEXTURE_PATH),
        state: CloudLoad::Pending,
    });
}

fn cloud_material(texture: Handle<Image>, transparency: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, transparency),
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Blend,
        unlit: false,
        perceptual_roughness: 1.0,
        reflectance: 0.0,
        fog_enabled: false,
        double_sided: true,
        cull_mode: None,
        ..default()
    }
}

pub fn spawn_clouds_when_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut texture: ResMut<CloudTexture>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<StormConfig>,
    drift: Res<CloudDrift>,
) {
    if texture.state != CloudLoad::Pending {
        return;
    }
    match asset_server.load_state(&texture.handle) {
        LoadState::Loaded => {
            let half = CLOUD_SIZE / 2.0;
            commands.spawn((
                Mesh3d(meshes.add(Plane3d::new(Vec3::NEG_Y, Vec2::splat(half)))),
                MeshMaterial3d(materials.add(cloud_material(
                    texture.handle.clone(),
                    config.cloud_transparency,
                ))),
                cloud_transform(&drift),
                CloudSprite,
            ));
            texture.state = CloudLoad::Spawned;
            info!("Cloud texture loaded, spawned cloud sprite");
        }
        LoadState::Failed(err) => {
            warn!(
                "Cloud texture {} failed to load, continuing without clouds: {}",
                CLOUD_TEXTURE_PATH, err
            );
            texture.state = CloudLoad::Failed;
        }
        _ => {}
    }
}

fn cloud_transform(drift: &CloudDrift) -> Transform {
    Transform::from_translation(Vec3::from_array(CLOUD_POSITION))
        .with_rotation(Quat::from_rotation_y(drift.angle))
}

pub fn spin_cloud_sprites(
    drift: Res<CloudDrift>,
    mut query: Query<&mut Transform, With<CloudSprite>>,
) {
    for mut transform in &mut query {
        transform.rotation = Quat::from_rotation_y(drift.angle);
    }
}

pub fn sync_cloud_opacity(
    config: Res<StormConfig>,
    query: Query<&MeshMaterial3d<StandardMaterial>, With<CloudSprite>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !config.is_changed() {
        return;
    }
    for handle in &query {
        let Some(material) = materials.get_mut(&handle.0) else {
            continue;
        };
        if material.base_color.alpha() != config.cloud_transparency {
            material.base_color.set_alpha(config.cloud_transparency);
        }
    }
}

pub struct CloudRenderPlugin;

impl Plugin for CloudRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_cloud_texture).add_systems(
            Update,
            (
                spawn_clouds_when_loaded,
                spin_cloud_sprites,
                sync_cloud_opacity,
            )
                .chain()
                .after(simulation::FrameSet::Clouds),
        );
    }
}
