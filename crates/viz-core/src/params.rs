use glam::Vec2;
use rand::Rng;

use crate::presets::{Pattern, PresetValues};
use crate::signal::{SignalId, SignalSource, SignalSpec, SignalValue};
use crate::uniforms::UniformSink;
use crate::variant::Variant;

/// Current value of every signal a variant declares.
///
/// Values are kept inside their declared range at all times: every write path
/// clamps, so readers never have to re-validate.
#[derive(Clone, Debug)]
pub struct ParameterStore {
    variant: Variant,
    values: [Option<SignalValue>; SignalId::COUNT],
}

impl ParameterStore {
    pub fn new(variant: Variant) -> Self {
        let mut values = [None; SignalId::COUNT];
        for spec in variant.signals() {
            values[spec.id.index()] = Some(spec.default);
        }
        Self { variant, values }
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[inline]
    pub fn contains(&self, id: SignalId) -> bool {
        self.values[id.index()].is_some()
    }

    pub fn get(&self, id: SignalId) -> Option<SignalValue> {
        self.values[id.index()]
    }

    /// Scalar value, or 0.0 for signals this variant does not carry.
    pub fn scalar(&self, id: SignalId) -> f32 {
        self.get(id).and_then(SignalValue::as_scalar).unwrap_or(0.0)
    }

    pub fn vec2(&self, id: SignalId) -> Vec2 {
        self.get(id).and_then(SignalValue::as_vec2).unwrap_or(Vec2::ZERO)
    }

    /// Clamp and store a scalar. Returns the stored value, or `None` when the
    /// signal is not part of this variant or is not scalar.
    pub fn set(&mut self, id: SignalId, value: f32) -> Option<f32> {
        let spec = self.spec_for(id)?;
        if !matches!(spec.default, SignalValue::Scalar(_)) {
            log::debug!("[params] {} is not scalar; ignoring", id.control_id());
            return None;
        }
        let v = if value.is_finite() { spec.clamp(value) } else { spec.min };
        self.values[id.index()] = Some(SignalValue::Scalar(v));
        Some(v)
    }

    /// Clamp both components and store a 2-vector.
    pub fn set_vec2(&mut self, id: SignalId, value: Vec2) -> Option<Vec2> {
        let spec = self.spec_for(id)?;
        if !matches!(spec.default, SignalValue::Vec2(_)) {
            log::debug!("[params] {} is not a vec2; ignoring", id.control_id());
            return None;
        }
        let v = Vec2::new(spec.clamp(value.x), spec.clamp(value.y));
        self.values[id.index()] = Some(SignalValue::Vec2(v));
        Some(v)
    }

    /// Bulk assignment of a preset record.
    pub fn apply(&mut self, values: PresetValues) {
        for &(id, v) in values {
            self.set(id, v);
        }
    }

    /// Restore every slider to its declared default. The pattern selector,
    /// interaction, clock and viewport signals are left untouched.
    pub fn reset_controls(&mut self) {
        for spec in self.variant.controls() {
            if spec.source == SignalSource::Slider {
                self.values[spec.id.index()] = Some(spec.default);
            }
        }
    }

    /// Draw a fresh value for every randomizable slider, snapped to the slider
    /// step. The geometric variant also rolls a new pattern.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for &id in self.variant.randomized() {
            if let Some(spec) = self.variant.spec(id) {
                let raw = rng.gen_range(spec.min..=spec.max);
                self.set(id, spec.quantize(raw));
            }
        }
        if self.variant.has_patterns() {
            let pattern = Pattern::ALL[rng.gen_range(0..Pattern::ALL.len())];
            self.set(SignalId::PatternType, pattern.uniform_value());
        }
    }

    pub fn pattern(&self) -> Option<Pattern> {
        self.contains(SignalId::PatternType)
            .then(|| Pattern::from_uniform(self.scalar(SignalId::PatternType)))
    }

    /// Entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static SignalSpec, SignalValue)> + '_ {
        self.variant
            .signals()
            .iter()
            .filter_map(move |spec| self.values[spec.id.index()].map(|v| (spec, v)))
    }

    /// Push every entry to a uniform sink, dispatching on value shape.
    pub fn upload<S: UniformSink + ?Sized>(&self, sink: &mut S) {
        for (spec, value) in self.iter() {
            match value {
                SignalValue::Scalar(v) => sink.scalar(spec.id, v),
                SignalValue::Vec2(v) => sink.vec2(spec.id, v),
            }
        }
    }

    fn spec_for(&self, id: SignalId) -> Option<&'static SignalSpec> {
        let spec = self.variant.spec(id);
        if spec.is_none() {
            log::debug!(
                "[params] {} is not a {} signal; ignoring",
                id.control_id(),
                self.variant
            );
        }
        spec
    }
}
