use bevy::prelude::*;
use bevy::window::PresentMode;

use simulation::sim_rng::SimRng;

#[cfg(not(target_arch = "wasm32"))]
mod agent_mode;

fn main() {
    if std::env::args().any(|arg| arg == "--agent") {
        #[cfg(not(target_arch = "wasm32"))]
        {
            agent_mode::run_agent_mode();
            return;
        }
    }

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Stormsea".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Seed before SimulationPlugin so its default seed does not win.
    .insert_resource(SimRng::from_env_or_entropy())
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ));

    app.run();
}
