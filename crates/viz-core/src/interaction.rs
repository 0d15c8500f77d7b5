use glam::Vec2;

use crate::constants::POINTER_REST;
use crate::decay::DynamicsConfig;

/// Pointer and touch input, already normalized to canvas-relative [0,1]
/// coordinates with y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Move(Vec2),
    Down(Vec2),
    Up,
    Enter,
    Leave,
    TouchStart(Vec2),
    TouchMove(Vec2),
    TouchEnd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub down: bool,
    pub over: bool,
    /// Timestamp of the last accepted click, in clock milliseconds.
    pub last_click_ms: Option<f64>,
    pub click_count: u32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::from(POINTER_REST),
            down: false,
            over: false,
            last_click_ms: None,
            click_count: 0,
        }
    }
}

/// Derived interaction signals. Written by click registration (impulses) and
/// by the integrator (everything, once per frame).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionLevels {
    pub click_effect: f32,
    pub hover: f32,
    pub combo: f32,
    pub energy: f32,
    pub pulse: f32,
    pub color_boost: f32,
}

#[derive(Clone, Debug, Default)]
pub struct InteractionTracker {
    pub pointer: PointerState,
    pub levels: InteractionLevels,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input event. Runs to completion; returns true when the event
    /// registered a click.
    pub fn handle(&mut self, event: InputEvent, now_ms: f64, cfg: &DynamicsConfig) -> bool {
        match event {
            InputEvent::Move(p) | InputEvent::TouchMove(p) => {
                self.move_to(p);
                false
            }
            InputEvent::Down(p) => {
                self.move_to(p);
                self.pointer.down = true;
                self.register_click(now_ms, cfg);
                true
            }
            InputEvent::TouchStart(p) => {
                self.move_to(p);
                self.pointer.over = true;
                self.pointer.down = true;
                self.register_click(now_ms, cfg);
                true
            }
            InputEvent::Up => {
                self.pointer.down = false;
                false
            }
            InputEvent::Enter => {
                self.pointer.over = true;
                false
            }
            InputEvent::Leave | InputEvent::TouchEnd => {
                self.pointer.over = false;
                self.pointer.down = false;
                false
            }
        }
    }

    fn move_to(&mut self, p: Vec2) {
        self.pointer.pos = p.clamp(Vec2::ZERO, Vec2::ONE);
    }

    /// Combo bookkeeping and impulses for one accepted click.
    pub fn register_click(&mut self, now_ms: f64, cfg: &DynamicsConfig) {
        let in_window = self
            .pointer
            .last_click_ms
            .is_some_and(|last| now_ms - last < cfg.combo_window_ms);
        if in_window {
            self.pointer.click_count += 1;
            self.levels.combo = (self.pointer.click_count as f32 * cfg.combo_step).min(cfg.combo_max);
        } else {
            self.pointer.click_count = 1;
            self.levels.combo = cfg.combo_step;
        }
        self.pointer.last_click_ms = Some(now_ms);

        let l = &mut self.levels;
        l.click_effect = cfg.click_effect_base + l.combo;
        l.energy = (l.energy + cfg.energy_click_base + l.combo * cfg.energy_click_combo)
            .min(cfg.energy_max);
        l.pulse = cfg.pulse_impulse;
        l.color_boost = cfg.color_boost_impulse;
        log::debug!(
            "[interaction] click #{} combo={:.2} energy={:.2}",
            self.pointer.click_count,
            l.combo,
            l.energy
        );
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.pointer.over || self.pointer.down
    }
}
