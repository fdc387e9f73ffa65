use bevy::prelude::*;
use rand::Rng;

use crate::config::{
    DROPS_PER_LEVEL, RAIN_RESPAWN_Y_MAX, RAIN_RESPAWN_Y_MIN, RAIN_SPAWN_Y_MAX, RAIN_SPAWN_Y_MIN,
};

/// Which of the two rain populations a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RainLayerKind {
    /// Dense column of drops right around the camera.
    Inner,
    /// Sparse curtain spread over a wide area.
    Outer,
}

impl RainLayerKind {
    pub const ALL: [RainLayerKind; 2] = [RainLayerKind::Inner, RainLayerKind::Outer];

    /// Share of `level * DROPS_PER_LEVEL` that goes to this layer, in quarters.
    fn quarters(self) -> usize {
        match self {
            RainLayerKind::Inner => 3,
            RainLayerKind::Outer => 1,
        }
    }

    /// Number of drops for a rain level: `floor(level * 1000 * share)`.
    pub fn drop_count(self, level: u8) -> usize {
        level as usize * DROPS_PER_LEVEL * self.quarters() / 4
    }

    /// Half width of the square spawn footprint on the x/z plane.
    pub fn spawn_half_extent(self) -> f32 {
        match self {
            RainLayerKind::Inner => 5.0,
            RainLayerKind::Outer => 50.0,
        }
    }

    /// Vertical distance covered per tick.
    pub fn fall_speed(self) -> f32 {
        match self {
            RainLayerKind::Inner => 0.2,
            RainLayerKind::Outer => 1.5,
        }
    }

    /// Drops are recycled instead of falling below this height.
    pub fn recycle_floor(self) -> f32 {
        match self {
            RainLayerKind::Inner => -15.0,
            RainLayerKind::Outer => -50.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RainLayerKind::Inner => "inner",
            RainLayerKind::Outer => "outer",
        }
    }
}

/// One rain layer: a fixed-size buffer of drop positions.
#[derive(Debug, Clone)]
pub struct RainField {
    kind: RainLayerKind,
    positions: Vec<Vec3>,
    generation: u32,
    dirty: bool,
}

impl RainField {
    /// An empty field that has never been generated.
    pub fn empty(kind: RainLayerKind) -> Self {
        Self {
            kind,
            positions: Vec::new(),
            generation: 0,
            dirty: false,
        }
    }

    /// Build a fresh field for `level`, scattering drops uniformly over the
    /// layer's spawn volume.
    pub fn generate(kind: RainLayerKind, level: u8, rng: &mut impl Rng) -> Self {
        let mut field = Self::empty(kind);
        field.regenerate(level, rng);
        field
    }

    /// Replace the whole buffer with a new one sized for `level`.
    ///
    /// The previous buffer is dropped before the new one is filled, and the
    /// generation counter is bumped so the renderer rebuilds its mesh.
    pub fn regenerate(&mut self, level: u8, rng: &mut impl Rng) {
        let count = self.kind.drop_count(level);
        let half = self.kind.spawn_half_extent();

        self.positions = Vec::new();
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            let x = rng.gen_range(-half..=half);
            let y = rng.gen_range(RAIN_SPAWN_Y_MIN..=RAIN_SPAWN_Y_MAX);
            let z = rng.gen_range(-half..=half);
            positions.push(Vec3::new(x, y, z));
        }
        self.positions = positions;
        self.generation = self.generation.wrapping_add(1);
        self.dirty = true;
    }

    /// Move every drop down by one fixed step, recycling the ones that are
    /// below the floor or would cross it. Returns how many drops were recycled.
    pub fn advance(&mut self, rng: &mut impl Rng) -> usize {
        let floor = self.kind.recycle_floor();
        let speed = self.kind.fall_speed();
        let mut recycled = 0;

        for drop in self.positions.iter_mut() {
            let next = drop.y - speed;
            // Recycle before the step lands below the floor so y never leaves its band.
            if drop.y < floor || next < floor {
                drop.y = rng.gen_range(RAIN_RESPAWN_Y_MIN..RAIN_RESPAWN_Y_MAX);
                recycled += 1;
            } else {
                drop.y = next;
            }
        }

        self.dirty = true;
        recycled
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bumped on every `regenerate`; the renderer compares it to decide
    /// whether its mesh is stale.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Overwrite the buffer directly. Used by tests and benches to place
    /// drops at known heights.
    pub fn set_positions(&mut self, positions: Vec<Vec3>) {
        self.positions = positions;
        self.dirty = true;
    }
}

/// Both rain layers, sized from the same rain level.
#[derive(Resource, Debug, Clone)]
pub struct RainLayers {
    pub inner: RainField,
    pub outer: RainField,
}

impl Default for RainLayers {
    fn default() -> Self {
        Self {
            inner: RainField::empty(RainLayerKind::Inner),
            outer: RainField::empty(RainLayerKind::Outer),
        }
    }
}

impl RainLayers {
    pub fn get(&self, kind: RainLayerKind) -> &RainField {
        match kind {
            RainLayerKind::Inner => &self.inner,
            RainLayerKind::Outer => &self.outer,
        }
    }

    pub fn get_mut(&mut self, kind: RainLayerKind) -> &mut RainField {
        match kind {
            RainLayerKind::Inner => &mut self.inner,
            RainLayerKind::Outer => &mut self.outer,
        }
    }

    /// Rebuild both layers for a new rain level.
    pub fn regenerate(&mut self, level: u8, rng: &mut impl Rng) {
        self.inner.regenerate(level, rng);
        self.outer.regenerate(level, rng);
        debug!(
            "Rain regenerated at level {}: {} inner, {} outer drops",
            level,
            self.inner.len(),
            self.outer.len()
        );
    }

    /// Advance both layers by one tick.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        self.inner.advance(rng);
        self.outer.advance(rng);
    }

    pub fn total_drops(&self) -> usize {
        self.inner.len() + self.outer.len()
    }
}
