use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::egui_input_guard::egui_wants_pointer;

const FOV_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
const CAMERA_POSITION: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const CAMERA_TARGET: Vec3 = Vec3::new(1.25, 1.0, 1.0);
const DAMPING: f32 = 0.05;
const MIN_POLAR: f32 = 0.35 * std::f32::consts::PI;
const MAX_POLAR: f32 = 0.6 * std::f32::consts::PI;
/// Below this the remaining rotation delta is treated as settled.
const SETTLE_EPSILON: f32 = 1e-6;

/// Damped orbit around a fixed target. Zoom and pan are disabled, so the
/// radius and target never change after construction.
///
/// Angles follow the usual spherical convention with Y up: `phi` is measured
/// from +Y, `theta` around Y starting at +Z.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitControls {
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
    /// Rotation still to be applied; bled off by `damping` every update.
    pub delta_theta: f32,
    pub delta_phi: f32,
    pub damping: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::looking_from(CAMERA_POSITION, CAMERA_TARGET)
    }
}

impl OrbitControls {
    pub fn looking_from(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let radius = offset.length();
        let phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        Self {
            target,
            radius,
            theta: offset.x.atan2(offset.z),
            phi,
            delta_theta: 0.0,
            delta_phi: 0.0,
            damping: DAMPING,
            min_polar: MIN_POLAR,
            max_polar: MAX_POLAR,
        }
    }

    /// Queue a rotation for a pointer drag of `pixels` on a viewport of the
    /// given height. A full-height drag is one full turn.
    pub fn rotate(&mut self, pixels: Vec2, viewport_height: f32) {
        let height = viewport_height.max(1.0);
        self.delta_theta -= std::f32::consts::TAU * pixels.x / height;
        self.delta_phi -= std::f32::consts::TAU * pixels.y / height;
    }

    /// Apply one damped step of the pending rotation. Returns whether the
    /// camera moved.
    pub fn update(&mut self) -> bool {
        if self.delta_theta.abs() < SETTLE_EPSILON && self.delta_phi.abs() < SETTLE_EPSILON {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            return false;
        }
        self.theta += self.delta_theta * self.damping;
        self.phi = (self.phi + self.delta_phi * self.damping).clamp(self.min_polar, self.max_polar);
        self.delta_theta *= 1.0 - self.damping;
        self.delta_phi *= 1.0 - self.damping;
        true
    }

    pub fn position(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_phi * self.theta.sin(),
                    self.phi.cos(),
                    sin_phi * self.theta.cos(),
                )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position()).looking_at(self.target, Vec3::Y)
    }
}

pub fn setup_camera(mut commands: Commands) {
    let controls = OrbitControls::default();

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        controls.transform(),
    ));
    commands.insert_resource(controls);
}

/// Left-drag rotates the view unless the pointer belongs to the debug panel.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut contexts: EguiContexts,
    mut controls: ResMut<OrbitControls>,
) {
    let delta: Vec2 = motion.read().map(|m| m.delta).sum();
    if !buttons.pressed(MouseButton::Left) || delta == Vec2::ZERO {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    controls.rotate(delta, window.height());
}

/// Frame step 6: advance the damped orbit and write the camera transform.
pub fn update_orbit_camera(
    mut controls: ResMut<OrbitControls>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !controls.update() {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = controls.transform();
}
