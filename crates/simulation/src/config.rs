/// Drops spawned per rain level, before the per-layer share is applied.
pub const DROPS_PER_LEVEL: usize = 1000;
/// Highest selectable rain level.
pub const MAX_RAIN_LEVEL: u8 = 9;
/// Rain level the scene starts with.
pub const DEFAULT_RAIN_LEVEL: u8 = 4;

/// Initial vertical spawn band shared by both rain layers.
pub const RAIN_SPAWN_Y_MIN: f32 = -25.0;
pub const RAIN_SPAWN_Y_MAX: f32 = 25.0;

/// Band a recycled drop is re-seeded into. Both layers use the same band.
pub const RAIN_RESPAWN_Y_MIN: f32 = -5.0;
pub const RAIN_RESPAWN_Y_MAX: f32 = 45.0;

/// Probability threshold for a fresh strike: `random() > LIGHTNING_STRIKE_THRESHOLD`.
pub const LIGHTNING_STRIKE_THRESHOLD: f32 = 0.9;
/// Power above which a strike keeps going on the next tick.
pub const LIGHTNING_SUSTAIN_POWER: f32 = 100.0;
/// Base of the power draw; the drawn value lies in `[BASE, BASE + SPAN)`.
pub const LIGHTNING_POWER_BASE: f32 = 60.0;
pub const LIGHTNING_POWER_SPAN: f32 = 185.0;
/// Strike position bounds.
pub const LIGHTNING_X_MAX: f32 = 400.0;
pub const LIGHTNING_Z_MAX: f32 = 400.0;
pub const LIGHTNING_Y_MIN: f32 = 30.0;
pub const LIGHTNING_Y_SPAN: f32 = 20.0;
/// Where the light sits before the first repositioning (just in front of the cloud).
pub const LIGHTNING_START_POSITION: [f32; 3] = [200.0, 45.0, 100.0];

/// Thunder volume is derived from cloud transparency times this factor.
pub const THUNDER_VOLUME_SCALE: f32 = 0.2;

/// Cloud spin applied once per tick, in radians.
pub const CLOUD_SPIN_PER_TICK: f32 = -0.002;
/// Cloud sprite placement and size.
pub const CLOUD_POSITION: [f32; 3] = [1.0, 50.0, 1.0];
pub const CLOUD_SIZE: f32 = 500.0;

/// Water plane dimensions: 10 x 10 world units split into 512 x 512 quads.
pub const WATER_SIZE: f32 = 10.0;
pub const WATER_SEGMENTS: u32 = 512;

/// Linear fog range used by the water shader and the camera.
pub const FOG_NEAR: f32 = 0.1;
pub const FOG_FAR: f32 = 4.0;
