//! Per-frame decay laws and the integrator that applies them.

use crate::constants::*;
use crate::interaction::{InteractionLevels, InteractionTracker};
use crate::params::ParameterStore;
use crate::signal::SignalId;

/// Multiplicative decay with snap-to-zero below `snap`.
#[inline]
pub fn decay_toward_zero(value: f32, rate: f32, snap: f32) -> f32 {
    let v = value * rate;
    if v < snap {
        0.0
    } else {
        v
    }
}

/// One step of first-order smoothing toward `target`.
#[inline]
pub fn approach(value: f32, target: f32, factor: f32) -> f32 {
    value + (target - value) * factor
}

/// Additive growth up to `cap` while active, slow multiplicative decay
/// otherwise (no snap).
#[inline]
pub fn grow_or_decay(value: f32, active: bool, step: f32, cap: f32, rate: f32) -> f32 {
    if active {
        (value + step).min(cap)
    } else {
        value * rate
    }
}

/// Every rate, threshold and impulse used by the tracker and integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicsConfig {
    pub combo_window_ms: f64,
    pub combo_timeout_ms: f64,
    pub combo_step: f32,
    pub combo_max: f32,
    pub combo_decay: f32,
    pub combo_snap: f32,
    pub click_effect_base: f32,
    pub click_decay: f32,
    pub click_decay_held: f32,
    pub pulse_impulse: f32,
    pub pulse_decay: f32,
    pub color_boost_impulse: f32,
    pub color_boost_decay: f32,
    pub impulse_snap: f32,
    pub hover_smoothing: f32,
    pub hover_target: f32,
    pub hover_energy_gain: f32,
    pub energy_click_base: f32,
    pub energy_click_combo: f32,
    pub energy_growth: f32,
    pub energy_decay: f32,
    pub energy_max: f32,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            combo_window_ms: COMBO_WINDOW_MS,
            combo_timeout_ms: COMBO_TIMEOUT_MS,
            combo_step: COMBO_STEP,
            combo_max: COMBO_MAX,
            combo_decay: COMBO_DECAY,
            combo_snap: COMBO_SNAP,
            click_effect_base: CLICK_EFFECT_BASE,
            click_decay: CLICK_DECAY,
            click_decay_held: CLICK_DECAY_HELD,
            pulse_impulse: PULSE_IMPULSE,
            pulse_decay: PULSE_DECAY,
            color_boost_impulse: COLOR_BOOST_IMPULSE,
            color_boost_decay: COLOR_BOOST_DECAY,
            impulse_snap: IMPULSE_SNAP,
            hover_smoothing: HOVER_SMOOTHING,
            hover_target: HOVER_TARGET,
            hover_energy_gain: HOVER_ENERGY_GAIN,
            energy_click_base: ENERGY_CLICK_BASE,
            energy_click_combo: ENERGY_CLICK_COMBO,
            energy_growth: ENERGY_GROWTH_PER_FRAME,
            energy_decay: ENERGY_DECAY,
            energy_max: ENERGY_MAX,
        }
    }
}

/// Advances the derived interaction signals once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integrator {
    pub config: DynamicsConfig,
}

impl Integrator {
    pub fn new(config: DynamicsConfig) -> Self {
        Self { config }
    }

    /// Must run exactly once per frame, before uniforms are sampled.
    pub fn step(&self, tracker: &mut InteractionTracker, now_ms: f64) {
        let c = &self.config;
        let active = tracker.is_active();
        let pointer = &mut tracker.pointer;
        let l = &mut tracker.levels;

        let hover_target = if pointer.over {
            c.hover_target + l.energy * c.hover_energy_gain
        } else {
            0.0
        };
        l.hover = approach(l.hover, hover_target, c.hover_smoothing);

        let click_rate = if pointer.down { c.click_decay_held } else { c.click_decay };
        l.click_effect = decay_toward_zero(l.click_effect, click_rate, c.impulse_snap);

        l.energy = grow_or_decay(
            l.energy,
            active,
            c.energy_growth,
            c.energy_max,
            c.energy_decay,
        );

        let timed_out = pointer
            .last_click_ms
            .is_some_and(|last| now_ms - last >= c.combo_timeout_ms);
        if timed_out {
            l.combo = 0.0;
            pointer.click_count = 0;
        } else {
            l.combo = decay_toward_zero(l.combo, c.combo_decay, c.combo_snap);
            if l.combo == 0.0 {
                pointer.click_count = 0;
            }
        }

        l.pulse = decay_toward_zero(l.pulse, c.pulse_decay, c.impulse_snap);
        l.color_boost = decay_toward_zero(l.color_boost, c.color_boost_decay, c.impulse_snap);
    }
}

impl InteractionLevels {
    /// Copy the levels into the store. Variants without interaction signals
    /// simply have no slots for them.
    pub fn publish(&self, store: &mut ParameterStore) {
        let pairs = [
            (SignalId::ClickEffect, self.click_effect),
            (SignalId::HoverIntensity, self.hover),
            (SignalId::ClickCombo, self.combo),
            (SignalId::EnergyLevel, self.energy),
            (SignalId::PulseIntensity, self.pulse),
            (SignalId::ColorBoost, self.color_boost),
        ];
        for (id, v) in pairs {
            if store.contains(id) {
                store.set(id, v);
            }
        }
    }
}
