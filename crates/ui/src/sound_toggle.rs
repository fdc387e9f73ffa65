use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::controls::StormControls;

/// Button label for the current mute state.
pub fn sound_label(muted: bool) -> &'static str {
    if muted {
        "Sound: off"
    } else {
        "Sound: on"
    }
}

/// Small button in the bottom-left corner. Audio starts muted, so this is
/// the user's first interaction with sound.
pub fn sound_toggle_ui(mut contexts: EguiContexts, mut controls: StormControls) {
    let muted = controls.config().muted;
    egui::Area::new(egui::Id::new("sound_toggle"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .show(contexts.ctx_mut(), |ui| {
            if ui.button(sound_label(muted)).clicked() {
                controls.toggle_muted();
            }
        });
}

pub fn sound_toggle_keybind(keys: Res<ButtonInput<KeyCode>>, mut controls: StormControls) {
    if keys.just_pressed(KeyCode::KeyM) {
        controls.toggle_muted();
    }
}
