use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod debug_panel;
pub mod sound_toggle;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<debug_panel::DebugPanelVisible>()
            .add_systems(
                Update,
                (
                    debug_panel::toggle_debug_panel,
                    sound_toggle::sound_toggle_keybind,
                    debug_panel::debug_panel_ui,
                    sound_toggle::sound_toggle_ui,
                )
                    .chain()
                    .before(simulation::FrameSet::Clock),
            );
    }
}
