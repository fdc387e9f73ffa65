//! Storm debug panel.
//!
//! Every widget reads its current value from `StormControls` and, when the
//! user changes it, calls the matching entry point so dependent parts of the
//! scene update in the same frame. `F1` shows or hides the panel.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::MAX_RAIN_LEVEL;
use simulation::controls::StormControls;
use simulation::storm_config::{srgb_bytes, StormConfig};
use simulation::water_surface::WaveParams;

pub const PANEL_WIDTH: f32 = 340.0;

#[derive(Resource)]
pub struct DebugPanelVisible(pub bool);

impl Default for DebugPanelVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// A wave-table slider: label, range, step and how to read/write the value.
#[derive(Clone, Copy)]
pub struct WaveSlider {
    pub label: &'static str,
    pub min: f32,
    pub max: f32,
    pub step: f64,
    pub get: fn(&WaveParams) -> f32,
    pub set: fn(&mut WaveParams, f32),
}

pub fn wave_sliders() -> [WaveSlider; 10] {
    [
        WaveSlider {
            label: "Big waves elevation",
            min: 0.0,
            max: 1.0,
            step: 0.001,
            get: |p| p.big_waves_elevation,
            set: |p, v| p.big_waves_elevation = v,
        },
        WaveSlider {
            label: "Big waves frequency X",
            min: 0.0,
            max: 10.0,
            step: 0.001,
            get: |p| p.big_waves_frequency.x,
            set: |p, v| p.big_waves_frequency.x = v,
        },
        WaveSlider {
            label: "Big waves frequency Y",
            min: 0.0,
            max: 10.0,
            step: 0.001,
            get: |p| p.big_waves_frequency.y,
            set: |p, v| p.big_waves_frequency.y = v,
        },
        WaveSlider {
            label: "Big waves speed",
            min: 0.0,
            max: 4.0,
            step: 0.001,
            get: |p| p.big_waves_speed,
            set: |p, v| p.big_waves_speed = v,
        },
        WaveSlider {
            label: "Small waves elevation",
            min: 0.0,
            max: 1.0,
            step: 0.001,
            get: |p| p.small_waves_elevation,
            set: |p, v| p.small_waves_elevation = v,
        },
        WaveSlider {
            label: "Small waves frequency",
            min: 0.0,
            max: 30.0,
            step: 0.001,
            get: |p| p.small_waves_frequency,
            set: |p, v| p.small_waves_frequency = v,
        },
        WaveSlider {
            label: "Small waves speed",
            min: 0.0,
            max: 4.0,
            step: 0.001,
            get: |p| p.small_waves_speed,
            set: |p, v| p.small_waves_speed = v,
        },
        WaveSlider {
            label: "Small waves iterations",
            min: 0.0,
            max: 4.0,
            step: 1.0,
            get: |p| p.small_waves_iterations as f32,
            set: |p, v| p.small_waves_iterations = v.round().max(0.0) as u32,
        },
        WaveSlider {
            label: "Color offset",
            min: 0.0,
            max: 1.0,
            step: 0.001,
            get: |p| p.color_offset,
            set: |p, v| p.color_offset = v,
        },
        WaveSlider {
            label: "Color multiplier",
            min: 0.0,
            max: 10.0,
            step: 0.001,
            get: |p| p.color_multiplier,
            set: |p, v| p.color_multiplier = v,
        },
    ]
}

/// Color button bound to an sRGB value; returns the new color on change.
fn color_row(ui: &mut egui::Ui, label: &str, color: Srgba) -> Option<Srgba> {
    let mut rgb = srgb_bytes(color);
    let changed = ui
        .horizontal(|ui| {
            let changed = egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed();
            ui.label(label);
            changed
        })
        .inner;
    changed.then(|| Srgba::rgb_u8(rgb[0], rgb[1], rgb[2]))
}

pub fn toggle_debug_panel(keys: Res<ButtonInput<KeyCode>>, mut visible: ResMut<DebugPanelVisible>) {
    if keys.just_pressed(KeyCode::F1) {
        visible.0 = !visible.0;
    }
}

pub fn debug_panel_ui(
    mut contexts: EguiContexts,
    visible: Res<DebugPanelVisible>,
    mut controls: StormControls,
) {
    if !visible.0 {
        return;
    }

    egui::Window::new("Storm")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-8.0, 8.0))
        .default_width(PANEL_WIDTH)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            egui::CollapsingHeader::new("Scene")
                .default_open(true)
                .show(ui, |ui| scene_section(ui, &mut controls));
            egui::CollapsingHeader::new("Waves")
                .default_open(true)
                .show(ui, |ui| waves_section(ui, &mut controls));
            egui::CollapsingHeader::new("Rain")
                .default_open(true)
                .show(ui, |ui| rain_section(ui, &mut controls));
        });
}

fn scene_section(ui: &mut egui::Ui, controls: &mut StormControls) {
    if let Some(color) = color_row(ui, "Background", controls.config().background_color) {
        controls.set_background_color(color);
    }

    let mut transparency = controls.config().cloud_transparency;
    if ui
        .add(
            egui::Slider::new(&mut transparency, 0.0..=1.0)
                .step_by(0.01)
                .text("Cloud transparency"),
        )
        .changed()
    {
        controls.set_cloud_transparency(transparency);
    }

    let mut thunder = thunder_checkbox_state(controls.config());
    if ui.checkbox(&mut thunder, "Thunder").changed() {
        controls.set_thunder_enabled(thunder);
    }
}

/// The checkbox shows whether thunder is actually on, so it unticks while
/// fully transparent clouds force thunder off. Edits still go to the
/// user's own toggle.
fn thunder_checkbox_state(config: &StormConfig) -> bool {
    config.thunder_enabled
}

fn waves_section(ui: &mut egui::Ui, controls: &mut StormControls) {
    if let Some(color) = color_row(ui, "Depth color", controls.config().depth_color) {
        controls.set_depth_color(color);
    }
    if let Some(color) = color_row(ui, "Surface color", controls.config().surface_color) {
        controls.set_surface_color(color);
    }

    for slider in wave_sliders() {
        let mut value = (slider.get)(controls.waves());
        let changed = ui
            .add(
                egui::Slider::new(&mut value, slider.min..=slider.max)
                    .step_by(slider.step)
                    .text(slider.label),
            )
            .changed();
        if changed {
            (slider.set)(controls.waves_mut(), value);
        }
    }
}

fn rain_section(ui: &mut egui::Ui, controls: &mut StormControls) {
    if let Some(color) = color_row(ui, "Rain color", controls.config().rain_color) {
        controls.set_rain_color(color);
    }

    let mut level = controls.config().rain_level;
    if ui
        .add(
            egui::Slider::new(&mut level, 0..=MAX_RAIN_LEVEL)
                .step_by(1.0)
                .text("Rain level"),
        )
        .changed()
    {
        controls.set_rain_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_sit_inside_slider_ranges() {
        let params = WaveParams::default();
        for slider in wave_sliders() {
            let value = (slider.get)(&params);
            assert!(
                value >= slider.min && value <= slider.max,
                "{} = {} outside [{}, {}]",
                slider.label,
                value,
                slider.min,
                slider.max
            );
        }
    }

    #[test]
    fn test_thunder_checkbox_shows_effective_state() {
        let forced_off = StormConfig {
            thunder_enabled: false,
            thunder_requested: true,
            cloud_transparency: 0.0,
            ..Default::default()
        };
        assert!(!thunder_checkbox_state(&forced_off));
        assert!(thunder_checkbox_state(&StormConfig::default()));
    }

    #[test]
    fn test_slider_labels_are_unique() {
        let sliders = wave_sliders();
        for (i, a) in sliders.iter().enumerate() {
            for b in &sliders[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn test_iterations_slider_rounds_to_whole_steps() {
        let mut params = WaveParams::default();
        let slider = wave_sliders()
            .into_iter()
            .find(|s| s.label == "Small waves iterations")
            .unwrap();
        (slider.set)(&mut params, 2.6);
        assert_eq!(params.small_waves_iterations, 3);
        assert_eq!((slider.get)(&params), 3.0);
    }

    #[test]
    fn test_setters_write_the_field_they_read() {
        for slider in wave_sliders() {
            let mut params = WaveParams::default();
            let target = if slider.step >= 1.0 { 1.0 } else { slider.min + 0.25 };
            (slider.set)(&mut params, target);
            assert!(((slider.get)(&params) - target).abs() < 1e-6, "{}", slider.label);
        }
    }

    #[test]
    fn test_panel_starts_visible() {
        assert!(DebugPanelVisible::default().0);
    }
}
