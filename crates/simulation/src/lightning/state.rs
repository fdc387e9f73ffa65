use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

use crate::config::{
    LIGHTNING_POWER_BASE, LIGHTNING_POWER_SPAN, LIGHTNING_START_POSITION,
    LIGHTNING_STRIKE_THRESHOLD, LIGHTNING_SUSTAIN_POWER, LIGHTNING_X_MAX, LIGHTNING_Y_MIN,
    LIGHTNING_Y_SPAN, LIGHTNING_Z_MAX,
};

/// Loudness class of a thunder clap, chosen from strike power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ThunderTier {
    /// Loud, close clap (power above 243).
    Near,
    /// Mid-distance rumble (power in (200, 243]).
    Mid,
    /// Far rumble (power in (100, 200]).
    Far,
}

impl ThunderTier {
    pub const ALL: [ThunderTier; 3] = [ThunderTier::Near, ThunderTier::Mid, ThunderTier::Far];

    /// Pure classification of a strike's power. Returns `None` at or below
    /// the sustain threshold: the light may still flash but no clap plays.
    pub fn from_power(power: f32) -> Option<Self> {
        if power > 243.0 {
            Some(ThunderTier::Near)
        } else if power > 200.0 {
            Some(ThunderTier::Mid)
        } else if power > LIGHTNING_SUSTAIN_POWER {
            Some(ThunderTier::Far)
        } else {
            None
        }
    }

    /// Index into per-tier arrays (0 = near).
    pub fn index(self) -> usize {
        match self {
            ThunderTier::Near => 0,
            ThunderTier::Mid => 1,
            ThunderTier::Far => 2,
        }
    }

    /// Sample path relative to the asset root.
    pub fn asset_path(self) -> &'static str {
        match self {
            ThunderTier::Near => "sounds/thunder-1.ogg",
            ThunderTier::Mid => "sounds/thunder-2.ogg",
            ThunderTier::Far => "sounds/thunder-3.ogg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LightningPhase {
    #[default]
    Idle,
    Striking,
}

/// Result of a tick in which a strike happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeOutcome {
    /// The strike moved to a new random point.
    pub repositioned: bool,
    /// Freshly drawn power, in `[60, 245)`.
    pub power: f32,
    /// Thunder clap to play, if any.
    pub tier: Option<ThunderTier>,
}

/// The lightning light source and its trigger state.
#[derive(Resource, Debug, Clone)]
pub struct LightningState {
    pub power: f32,
    pub position: Vec3,
    pub phase: LightningPhase,
    /// User toggle: when false the light is hidden and thunder is silent.
    pub enabled: bool,
    /// Total strikes since startup.
    pub strikes: u64,
}

impl Default for LightningState {
    fn default() -> Self {
        Self {
            power: 0.0,
            position: Vec3::from_array(LIGHTNING_START_POSITION),
            phase: LightningPhase::Idle,
            enabled: true,
            strikes: 0,
        }
    }
}

impl LightningState {
    /// Advance the trigger by one tick.
    ///
    /// A uniform draw is always taken first; a strike happens when it exceeds
    /// the threshold or when the previous strike was strong enough to sustain.
    /// There is no cooldown: a sustained phase continues for as long as each
    /// new draw lands above the sustain power.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<StrikeOutcome> {
        let roll: f32 = rng.gen();
        let sustained = self.power > LIGHTNING_SUSTAIN_POWER;
        if !(roll > LIGHTNING_STRIKE_THRESHOLD || sustained) {
            self.phase = LightningPhase::Idle;
            return None;
        }

        let repositioned = self.power < LIGHTNING_SUSTAIN_POWER;
        if repositioned {
            self.position = Vec3::new(
                rng.gen::<f32>() * LIGHTNING_X_MAX,
                LIGHTNING_Y_MIN + rng.gen::<f32>() * LIGHTNING_Y_SPAN,
                rng.gen::<f32>() * LIGHTNING_Z_MAX,
            );
        }

        self.power = LIGHTNING_POWER_BASE + rng.gen::<f32>() * LIGHTNING_POWER_SPAN;
        self.phase = if self.power > LIGHTNING_SUSTAIN_POWER {
            LightningPhase::Striking
        } else {
            LightningPhase::Idle
        };
        self.strikes += 1;

        Some(StrikeOutcome {
            repositioned,
            power: self.power,
            tier: ThunderTier::from_power(self.power),
        })
    }

    /// Capability query polled by the renderer.
    pub fn is_visible(&self) -> bool {
        self.enabled
    }
}
