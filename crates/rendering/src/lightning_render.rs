use bevy::prelude::*;

use simulation::lightning::LightningState;

const FLASH_RANGE: f32 = 500.0;
/// Lumens per unit of strike power.
const LUMENS_PER_POWER: f32 = 1.0e7;

#[derive(Component)]
pub struct LightningFlash;

pub fn spawn_lightning_flash(mut commands: Commands, lightning: Res<LightningState>) {
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0x16, 0x2d, 0x61),
            intensity: flash_intensity(lightning.power),
            range: FLASH_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(lightning.position),
        visibility_for(&lightning),
        LightningFlash,
    ));
}

/// The light keeps its last power between strikes, like a lingering glow.
pub fn flash_intensity(power: f32) -> f32 {
    power.max(0.0) * LUMENS_PER_POWER
}

fn visibility_for(lightning: &LightningState) -> Visibility {
    if lightning.is_visible() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

pub fn sync_lightning_flash(
    lightning: Res<LightningState>,
    mut query: Query<(&mut PointLight, &mut Transform, &mut Visibility), With<LightningFlash>>,
) {
    if !lightning.is_changed() {
        return;
    }
    for (mut light, mut transform, mut visibility) in &mut query {
        light.intensity = flash_intensity(lightning.power);
        transform.translation = lightning.position;
        visibility.set_if_neq(visibility_for(&lightning));
    }
}

pub struct LightningRenderPlugin;

impl Plugin for LightningRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_lightning_flash).add_systems(
            Update,
            sync_lightning_flash.after(simulation::FrameSet::Lightning),
        );
    }
}
