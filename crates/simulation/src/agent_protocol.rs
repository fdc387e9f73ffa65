//! Agent text protocol types for the `--agent` headless mode.
//!
//! Newline-delimited JSON on stdin/stdout lets scripts drive the storm
//! without a window: step it, flip the same switches the debug panel has,
//! and read back a `StormObservation`.
//!
//! The I/O loop lives in `crates/app/src/agent_mode.rs`; these types stay
//! here so they can be unit-tested without the binary.

use serde::{Deserialize, Serialize};

use crate::observation::StormObservation;

// ---------------------------------------------------------------------------
// Commands (stdin → simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent over stdin.
///
/// The `cmd` field is the discriminator tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Request the current storm snapshot.
    #[serde(rename = "observe")]
    Observe,

    /// Advance the storm by `ticks` frames.
    #[serde(rename = "step")]
    Step { ticks: u64 },

    #[serde(rename = "set_rain")]
    SetRain { level: u8 },

    #[serde(rename = "set_muted")]
    SetMuted { muted: bool },

    #[serde(rename = "set_thunder")]
    SetThunder { enabled: bool },

    #[serde(rename = "set_cloud_transparency")]
    SetCloudTransparency { value: f32 },

    /// Background color as a hex string, e.g. `"#11111f"`.
    #[serde(rename = "set_background")]
    SetBackground { color: String },

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (simulation → stdout)
// ---------------------------------------------------------------------------

/// Every response carries the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "observation")]
    Observation { observation: StormObservation },

    /// Reports the storm clock's tick count after stepping.
    #[serde(rename = "step_complete")]
    StepComplete { tick: u64 },

    #[serde(rename = "ok")]
    Ok,

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_observe_command() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"observe"}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::Observe));
    }

    #[test]
    fn deserialize_step_command() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"step","ticks":120}"#).unwrap();
        if let AgentCommand::Step { ticks } = cmd {
            assert_eq!(ticks, 120);
        } else {
            panic!("expected Step");
        }
    }

    #[test]
    fn deserialize_set_rain_command() {
        let cmd: AgentCommand = serde_json::from_str(r#"{"cmd":"set_rain","level":7}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::SetRain { level: 7 }));
    }

    #[test]
    fn deserialize_toggle_commands() {
        let cmd: AgentCommand =
            serde_json::from_str(r#"{"cmd":"set_muted","muted":false}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::SetMuted { muted: false }));

        let cmd: AgentCommand =
            serde_json::from_str(r#"{"cmd":"set_thunder","enabled":true}"#).unwrap();
        assert!(matches!(cmd, AgentCommand::SetThunder { enabled: true }));
    }

    #[test]
    fn deserialize_set_cloud_transparency_command() {
        let cmd: AgentCommand =
            serde_json::from_str(r#"{"cmd":"set_cloud_transparency","value":0.5}"#).unwrap();
        if let AgentCommand::SetCloudTransparency { value } = cmd {
            assert!((value - 0.5).abs() < f32::EPSILON);
        } else {
            panic!("expected SetCloudTransparency");
        }
    }

    #[test]
    fn deserialize_set_background_command() {
        let cmd: AgentCommand =
            serde_json::from_str(r##"{"cmd":"set_background","color":"#202030"}"##).unwrap();
        if let AgentCommand::SetBackground { color } = cmd {
            assert_eq!(color, "#202030");
        } else {
            panic!("expected SetBackground");
        }
    }

    #[test]
    fn deserialize_rain_level_out_of_u8_range_fails() {
        let result: Result<AgentCommand, _> =
            serde_json::from_str(r#"{"cmd":"set_rain","level":300}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_unknown_command_fails() {
        let result: Result<AgentCommand, _> = serde_json::from_str(r#"{"cmd":"explode"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_ready_response() {
        let json = serde_json::to_string(&make_response(ResponsePayload::Ready)).unwrap();
        assert!(json.contains("\"protocol_version\":1"));
        assert!(json.contains("\"type\":\"ready\""));
    }

    #[test]
    fn serialize_observation_response() {
        let resp = make_response(ResponsePayload::Observation {
            observation: StormObservation::default(),
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"type\":\"observation\""));
        assert!(json.contains("\"tick\":0"));
        assert!(json.contains("\"phase\":\"Idle\""));
    }

    #[test]
    fn serialize_step_complete_response() {
        let json =
            serde_json::to_string(&make_response(ResponsePayload::StepComplete { tick: 9 }))
                .unwrap();
        assert!(json.contains("\"type\":\"step_complete\""));
        assert!(json.contains("\"tick\":9"));
    }

    #[test]
    fn serialize_error_response() {
        let resp = make_response(ResponsePayload::Error {
            message: "bad color".to_string(),
        });
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"type\":\"error\""));
        assert!(json.contains("\"message\":\"bad color\""));
    }
}
