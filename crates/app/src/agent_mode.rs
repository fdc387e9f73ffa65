//! Headless `--agent` mode: a blocking loop that reads JSON commands from
//! stdin and writes JSON responses to stdout.
//!
//! The storm runs without rendering, UI or audio. Commands that change the
//! scene go through the same `StormControls` entry points as the debug
//! panel, so the observable state matches what a windowed session would do.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.

#[cfg(not(target_arch = "wasm32"))]
pub fn run_agent_mode() {
    use std::io::{BufRead, Write};

    use bevy::prelude::*;

    use simulation::agent_protocol::{make_response, AgentCommand, ResponsePayload, PROTOCOL_VERSION};
    use simulation::sim_rng::SimRng;

    // -- Minimal app: simulation only ----------------------------------------
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SimRng::from_env_or_entropy());
    app.add_plugins(simulation::SimulationPlugin);

    // Startup systems build the rain and apply the initial configuration.
    app.update();

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    write_response(&mut stdout, &make_response(ResponsePayload::Ready));

    // Diagnostics go to stderr so stdout stays pure JSON.
    eprintln!(
        "stormsea agent mode v{} ready, waiting for commands on stdin",
        PROTOCOL_VERSION
    );

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: AgentCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                let resp = make_response(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                });
                write_response(&mut stdout, &resp);
                continue;
            }
        };

        let response = process_command(cmd, &mut app);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        write_response(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    let _ = stdout.flush();
    eprintln!("stormsea agent mode shutting down");
}

#[cfg(not(target_arch = "wasm32"))]
fn write_response(
    out: &mut impl std::io::Write,
    response: &simulation::agent_protocol::AgentResponse,
) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let _ = writeln!(out, "{json}");
            let _ = out.flush();
        }
        Err(e) => eprintln!("failed to encode response: {e}"),
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Upper bound for a single `step`, so a typo cannot hang the session.
#[cfg(not(target_arch = "wasm32"))]
const MAX_STEP_TICKS: u64 = 10_000;

#[cfg(not(target_arch = "wasm32"))]
fn process_command(
    cmd: simulation::agent_protocol::AgentCommand,
    app: &mut bevy::app::App,
) -> simulation::agent_protocol::AgentResponse {
    use simulation::agent_protocol::{make_response, AgentCommand, ResponsePayload};
    use simulation::observation::StormObservation;
    use simulation::storm_config::parse_hex_color;
    use simulation::StormClock;

    match cmd {
        AgentCommand::Observe => make_response(ResponsePayload::Observation {
            observation: StormObservation::capture(app.world()),
        }),

        AgentCommand::Step { ticks } => {
            for _ in 0..ticks.min(MAX_STEP_TICKS) {
                app.update();
            }
            let tick = app
                .world()
                .get_resource::<StormClock>()
                .map(|c| c.ticks)
                .unwrap_or(0);
            make_response(ResponsePayload::StepComplete { tick })
        }

        AgentCommand::SetRain { level } => {
            with_controls(app, |c| c.set_rain_level(level));
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::SetMuted { muted } => {
            with_controls(app, |c| c.set_muted(muted));
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::SetThunder { enabled } => {
            with_controls(app, |c| c.set_thunder_enabled(enabled));
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::SetCloudTransparency { value } => {
            with_controls(app, |c| c.set_cloud_transparency(value));
            make_response(ResponsePayload::Ok)
        }

        AgentCommand::SetBackground { color } => match parse_hex_color(&color) {
            Some(parsed) => {
                with_controls(app, |c| c.set_background_color(parsed));
                make_response(ResponsePayload::Ok)
            }
            None => make_response(ResponsePayload::Error {
                message: format!("invalid color: {color}"),
            }),
        },

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn with_controls(
    app: &mut bevy::app::App,
    f: impl FnOnce(&mut simulation::controls::StormControls),
) {
    use bevy::ecs::system::SystemState;
    use simulation::controls::StormControls;

    let mut state: SystemState<StormControls<'static>> = SystemState::new(app.world_mut());
    let mut controls = state.get_mut(app.world_mut());
    f(&mut controls);
    state.apply(app.world_mut());
}
