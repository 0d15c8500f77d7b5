//! Interaction and decay tuning constants.
//!
//! All per-frame rates are applied once per animation frame, not per second,
//! so visual behavior tracks the display refresh rate exactly as the shader
//! tuning expects.

// Combo streaks
pub const COMBO_WINDOW_MS: f64 = 500.0; // max gap between clicks in one streak
pub const COMBO_TIMEOUT_MS: f64 = 1000.0; // streak is dropped after this much quiet
pub const COMBO_STEP: f32 = 0.3; // combo level gained per streak click
pub const COMBO_MAX: f32 = 2.0;
pub const COMBO_DECAY: f32 = 0.997;
pub const COMBO_SNAP: f32 = 0.05;

// Click impulse
pub const CLICK_EFFECT_BASE: f32 = 1.0; // impulse = base + combo
pub const CLICK_DECAY: f32 = 0.93;
pub const CLICK_DECAY_HELD: f32 = 0.98; // slower while the pointer stays down

// One-shot impulses
pub const PULSE_IMPULSE: f32 = 1.0;
pub const PULSE_DECAY: f32 = 0.92;
pub const COLOR_BOOST_IMPULSE: f32 = 1.0;
pub const COLOR_BOOST_DECAY: f32 = 0.96;

// Snap-to-zero threshold shared by the fast impulses
pub const IMPULSE_SNAP: f32 = 0.01;

// Hover smoothing
pub const HOVER_SMOOTHING: f32 = 0.08;
pub const HOVER_TARGET: f32 = 1.0;
pub const HOVER_ENERGY_GAIN: f32 = 0.5; // extra hover target per unit of energy

// Interaction energy
pub const ENERGY_CLICK_BASE: f32 = 0.2;
pub const ENERGY_CLICK_COMBO: f32 = 0.1; // extra energy per unit of combo
pub const ENERGY_GROWTH_PER_FRAME: f32 = 0.01;
pub const ENERGY_DECAY: f32 = 0.995;
pub const ENERGY_MAX: f32 = 1.0;

// Pointer rest position (canvas center)
pub const POINTER_REST: [f32; 2] = [0.5, 0.5];

// Initial uniform resolution before the first resize
pub const DEFAULT_RESOLUTION: [f32; 2] = [800.0, 600.0];
pub const MAX_RESOLUTION: f32 = 16384.0;
