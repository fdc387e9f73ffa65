//! Particle-based rain.
//!
//! Two independently parameterized layers share one rain level: a dense
//! inner layer close to the camera and a sparse outer layer that falls faster
//! to read as distance. Each layer owns a flat buffer of drop positions that
//! is rebuilt wholesale when the level changes and advanced in place once per
//! tick otherwise.
//!
//! The rendering crate mirrors each buffer into a point mesh. A bumped
//! `generation` tells it to release the old mesh and build a new one; the
//! `dirty` flag tells it to re-upload positions.

mod field;
mod systems;


pub use field::{RainField, RainLayerKind, RainLayers};
pub use systems::{advance_rain, RainFieldPlugin};
