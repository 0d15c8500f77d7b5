//! Application context shared by the front ends.
//!
//! `VizApp` owns every piece of mutable state a visualization needs. Front
//! ends hold one instance behind `Rc<RefCell<_>>` and route DOM/winit events
//! and frame ticks into it; nothing here touches a platform API.

use glam::Vec2;
use rand::prelude::*;

use crate::clock::{FrameClock, FrameTime};
use crate::decay::{DynamicsConfig, Integrator};
use crate::interaction::{InputEvent, InteractionTracker};
use crate::params::ParameterStore;
use crate::presets::{Pattern, Preset};
use crate::signal::SignalId;
use crate::uniforms::UniformSink;
use crate::variant::Variant;

/// Discrete actions triggered by buttons or keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Preset(Preset),
    Pattern(Pattern),
    /// Cycle through the variant's presets in order.
    NextPreset,
    Reset,
    Randomize,
}

pub struct VizApp {
    variant: Variant,
    params: ParameterStore,
    tracker: InteractionTracker,
    integrator: Integrator,
    clock: FrameClock,
    rng: StdRng,
    /// Index of the last applied preset, if any.
    preset_cursor: Option<usize>,
}

impl VizApp {
    pub fn new(variant: Variant, seed: u64) -> Self {
        Self::with_dynamics(variant, seed, DynamicsConfig::default())
    }

    pub fn with_dynamics(variant: Variant, seed: u64, dynamics: DynamicsConfig) -> Self {
        log::info!("[app] starting {} visualization", variant);
        Self {
            variant,
            params: ParameterStore::new(variant),
            tracker: InteractionTracker::new(),
            integrator: Integrator::new(dynamics),
            clock: FrameClock::new(),
            rng: StdRng::seed_from_u64(seed),
            preset_cursor: None,
        }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    #[inline]
    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Route one input event using the wall clock.
    pub fn handle_input(&mut self, event: InputEvent) {
        let now = self.clock.now_ms();
        self.handle_input_at(event, now);
    }

    pub fn handle_input_at(&mut self, event: InputEvent, now_ms: f64) {
        let clicked = self.tracker.handle(event, now_ms, &self.integrator.config);
        self.params.set_vec2(SignalId::Mouse, self.tracker.pointer.pos);
        if clicked {
            self.tracker.levels.publish(&mut self.params);
        }
    }

    /// Slider input. Returns the stored (clamped) value so the caller can
    /// refresh its display.
    pub fn set_control(&mut self, id: SignalId, value: f32) -> Option<f32> {
        self.params.set(id, value)
    }

    pub fn set_resolution(&mut self, width: u32, height: u32) {
        self.params
            .set_vec2(SignalId::Resolution, Vec2::new(width as f32, height as f32));
    }

    /// Apply a preset by name. Unknown names are a no-op.
    pub fn apply_preset_named(&mut self, name: &str) -> Option<Preset> {
        match self.variant.preset(name) {
            Ok(preset) => {
                self.run(Command::Preset(preset));
                Some(preset)
            }
            Err(e) => {
                log::debug!("[app] {}; ignoring", e);
                None
            }
        }
    }

    /// Select a geometric pattern by name. Unknown names are a no-op.
    pub fn select_pattern_named(&mut self, name: &str) -> Option<Pattern> {
        match name.parse::<Pattern>() {
            Ok(pattern) => {
                self.run(Command::Pattern(pattern));
                Some(pattern)
            }
            Err(e) => {
                log::debug!("[app] {}; ignoring", e);
                None
            }
        }
    }

    pub fn run(&mut self, cmd: Command) {
        match cmd {
            Command::Preset(preset) => {
                self.params.apply(preset.values());
                if let Some(i) = self.variant.presets().iter().position(|p| *p == preset) {
                    self.preset_cursor = Some(i);
                }
                log::info!("[app] preset {}", preset);
            }
            Command::Pattern(pattern) => {
                if self.params.set(SignalId::PatternType, pattern.uniform_value()).is_some() {
                    log::info!("[app] pattern {}", pattern);
                }
            }
            Command::NextPreset => {
                let presets = self.variant.presets();
                if presets.is_empty() {
                    return;
                }
                let next = self.preset_cursor.map_or(0, |i| (i + 1) % presets.len());
                self.run(Command::Preset(presets[next]));
            }
            Command::Reset => {
                self.params.reset_controls();
                log::info!("[app] controls reset");
            }
            Command::Randomize => {
                self.params.randomize(&mut self.rng);
                log::info!("[app] controls randomized");
            }
        }
    }

    /// Advance one frame on the wall clock.
    pub fn frame(&mut self) -> FrameTime {
        let now = self.clock.now_ms();
        self.frame_at(now)
    }

    /// Advance one frame at `now_ms`: clock, integrator, then publish, so the
    /// store always holds the post-integration state.
    pub fn frame_at(&mut self, now_ms: f64) -> FrameTime {
        let t = self.clock.tick_at(now_ms);
        self.integrator.step(&mut self.tracker, self.clock.last_ms());
        self.tracker.levels.publish(&mut self.params);
        self.params.set(SignalId::Time, t.elapsed_sec);
        t
    }

    pub fn upload<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        self.params.upload(sink);
    }
}
