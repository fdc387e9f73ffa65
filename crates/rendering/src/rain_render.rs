//! Rain layers as point-list meshes.
//!
//! Each `RainField` is mirrored into one mesh entity. A new field generation
//! (the rain level changed) releases the old mesh asset and despawns its
//! entity before a replacement is built; an empty field gets no entity at
//! all. Between regenerations only the position attribute is re-uploaded.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use simulation::rain_field::{RainField, RainLayerKind, RainLayers};
use simulation::storm_config::StormConfig;

/// Links a mesh entity to the rain layer and field generation it shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainLayerMesh {
    pub kind: RainLayerKind,
    pub generation: u32,
}

/// One material per layer, both tinted with the configured rain color.
#[derive(Resource)]
pub struct RainMaterials {
    pub inner: Handle<StandardMaterial>,
    pub outer: Handle<StandardMaterial>,
}

impl RainMaterials {
    fn get(&self, kind: RainLayerKind) -> Handle<StandardMaterial> {
        match kind {
            RainLayerKind::Inner => self.inner.clone(),
            RainLayerKind::Outer => self.outer.clone(),
        }
    }
}

fn rain_material(color: Srgba) -> StandardMaterial {
    StandardMaterial {
        base_color: Color::Srgba(color),
        unlit: true,
        fog_enabled: false,
        ..default()
    }
}

fn build_rain_mesh(field: &RainField) -> Mesh {
    Mesh::new(
        PrimitiveTopology::PointList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, field.positions().to_vec())
}

pub fn setup_rain_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<StormConfig>,
) {
    commands.insert_resource(RainMaterials {
        inner: materials.add(rain_material(config.rain_color)),
        outer: materials.add(rain_material(config.rain_color)),
    });
}

/// Keep one mesh per non-empty rain layer in step with the simulation.
pub fn sync_rain_meshes(
    mut commands: Commands,
    mut rain: ResMut<RainLayers>,
    mut meshes: ResMut<Assets<Mesh>>,
    materials: Res<RainMaterials>,
    query: Query<(Entity, &RainLayerMesh, &Mesh3d)>,
) {
    for kind in RainLayerKind::ALL {
        let existing = query.iter().find(|(_, layer, _)| layer.kind == kind);
        let field = rain.get_mut(kind);

        match existing {
            Some((_, layer, mesh3d)) if layer.generation == field.generation() => {
                if !field.take_dirty() {
                    continue;
                }
                if let Some(mesh) = meshes.get_mut(&mesh3d.0) {
                    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, field.positions().to_vec());
                }
            }
            stale => {
                if let Some((entity, layer, mesh3d)) = stale {
                    meshes.remove(&mesh3d.0);
                    commands.entity(entity).despawn();
                    debug!(
                        "Released {} rain mesh (generation {})",
                        kind.label(),
                        layer.generation
                    );
                }
                field.take_dirty();
                if field.is_empty() {
                    continue;
                }
                commands.spawn((
                    Mesh3d(meshes.add(build_rain_mesh(field))),
                    MeshMaterial3d(materials.get(kind)),
                    Transform::default(),
                    RainLayerMesh {
                        kind,
                        generation: field.generation(),
                    },
                ));
            }
        }
    }
}

pub fn sync_rain_color(
    config: Res<StormConfig>,
    rain_materials: Res<RainMaterials>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !config.is_changed() {
        return;
    }
    for handle in [&rain_materials.inner, &rain_materials.outer] {
        if let Some(material) = materials.get_mut(handle) {
            if material.base_color != Color::Srgba(config.rain_color) {
                material.base_color = Color::Srgba(config.rain_color);
            }
        }
    }
}

pub struct RainRenderPlugin;

impl Plugin for RainRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_rain_materials).add_systems(
            Update,
            (sync_rain_meshes, sync_rain_color).after(simulation::FrameSet::Rain),
        );
    }
}
