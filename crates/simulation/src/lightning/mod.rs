//! Stochastic lightning trigger.
//!
//! Each tick the trigger decides whether a strike happens, draws its power,
//! and classifies that power into one of three thunder tiers. A strike with
//! power above the sustain threshold keeps the trigger in the striking phase,
//! so strong strikes chain into a flicker until a weak draw ends them.
//!
//! Whether thunder is allowed at all is a separate, user-controlled flag
//! (`LightningState::enabled`); the renderer polls `is_visible()` instead of
//! adding or removing the light itself.

mod state;
mod systems;


pub use state::{LightningPhase, LightningState, StrikeOutcome, ThunderTier};
pub use systems::{tick_lightning, LightningPlugin};
