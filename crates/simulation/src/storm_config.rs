//! Storm configuration owned by the debug panel.
//!
//! `StormConfig` replaces a free-floating settings object: the panel (and the
//! headless agent) mutate it only through `StormControls`, everything else
//! reads it with `Res<StormConfig>`.

use bevy::prelude::*;

use crate::config::{DEFAULT_RAIN_LEVEL, THUNDER_VOLUME_SCALE};

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct StormConfig {
    /// Clear color, also used as the fog color.
    pub background_color: Srgba,
    /// Cloud sprite opacity in `[0, 1]`; also scales thunder volume.
    pub cloud_transparency: f32,
    /// The user's own thunder toggle.
    pub thunder_requested: bool,
    /// Effective thunder state: the toggle, forced off while the clouds are invisible.
    pub thunder_enabled: bool,
    /// Water color in the troughs.
    pub depth_color: Srgba,
    /// Water color on the crests.
    pub surface_color: Srgba,
    pub rain_color: Srgba,
    /// Rain level 0-9, shared by the rain field and the rain audio mix.
    pub rain_level: u8,
    pub muted: bool,
}

impl Default for StormConfig {
    fn default() -> Self {
        let cloud_transparency = 0.9;
        Self {
            background_color: Srgba::rgb_u8(0x11, 0x11, 0x1f),
            cloud_transparency,
            thunder_requested: true,
            thunder_enabled: true,
            depth_color: Srgba::rgb_u8(0x18, 0x66, 0x91),
            surface_color: Srgba::rgb_u8(0x9b, 0xd8, 0xff),
            rain_color: Srgba::rgb_u8(0x69, 0x76, 0x8a),
            rain_level: DEFAULT_RAIN_LEVEL,
            muted: true,
        }
    }
}

impl StormConfig {
    /// Volume applied to every thunder voice.
    pub fn thunder_volume(&self) -> f32 {
        self.cloud_transparency * THUNDER_VOLUME_SCALE
    }
}

/// Parse a `#rrggbb` / `rrggbb` / `#rgb` string, logging and returning `None`
/// on malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Srgba> {
    match Srgba::hex(hex) {
        Ok(color) => Some(color),
        Err(e) => {
            warn!("Ignoring malformed color {:?}: {:?}", hex, e);
            None
        }
    }
}

/// sRGB bytes for color widgets.
pub fn srgb_bytes(color: Srgba) -> [u8; 3] {
    [
        (color.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (color.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

/// `#rrggbb` form of a color.
pub fn hex_string(color: Srgba) -> String {
    let [r, g, b] = srgb_bytes(color);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
