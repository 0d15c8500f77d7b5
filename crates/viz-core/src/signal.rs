//! Declarative signal tables.
//!
//! Every uniform fed to a shader is a [`SignalId`]. Each variant declares the
//! signals it uses in a fixed table; the table order is also the field order
//! of the WGSL `Params` struct, which is what [`crate::UniformBlock`] relies on.

use glam::Vec2;

use crate::constants::{DEFAULT_RESOLUTION, MAX_RESOLUTION, POINTER_REST};
use crate::VizError;

/// Closed set of signal identifiers across all variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalId {
    Resolution,
    Mouse,
    Time,
    // flow sliders
    TimeSpeed,
    Distortion,
    Complexity,
    ColorIntensity,
    RotationSpeed,
    ScaleFactor,
    // flow interaction
    ClickEffect,
    HoverIntensity,
    ClickCombo,
    EnergyLevel,
    PulseIntensity,
    ColorBoost,
    // geometric sliders
    PatternScale,
    PatternDensity,
    TransformIntensity,
    AnimationSpeed,
    GeometricBlend,
    PatternType,
    GlitchIntensity,
    PixelCorruption,
    DataShift,
}

impl SignalId {
    pub const COUNT: usize = 24;

    pub const ALL: [SignalId; Self::COUNT] = [
        SignalId::Resolution,
        SignalId::Mouse,
        SignalId::Time,
        SignalId::TimeSpeed,
        SignalId::Distortion,
        SignalId::Complexity,
        SignalId::ColorIntensity,
        SignalId::RotationSpeed,
        SignalId::ScaleFactor,
        SignalId::ClickEffect,
        SignalId::HoverIntensity,
        SignalId::ClickCombo,
        SignalId::EnergyLevel,
        SignalId::PulseIntensity,
        SignalId::ColorBoost,
        SignalId::PatternScale,
        SignalId::PatternDensity,
        SignalId::TransformIntensity,
        SignalId::AnimationSpeed,
        SignalId::GeometricBlend,
        SignalId::PatternType,
        SignalId::GlitchIntensity,
        SignalId::PixelCorruption,
        SignalId::DataShift,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field name inside the WGSL `Params` struct.
    pub fn uniform_name(self) -> &'static str {
        match self {
            SignalId::Resolution => "resolution",
            SignalId::Mouse => "mouse",
            SignalId::Time => "time",
            SignalId::TimeSpeed => "time_speed",
            SignalId::Distortion => "distortion",
            SignalId::Complexity => "complexity",
            SignalId::ColorIntensity => "color_intensity",
            SignalId::RotationSpeed => "rotation_speed",
            SignalId::ScaleFactor => "scale_factor",
            SignalId::ClickEffect => "click_effect",
            SignalId::HoverIntensity => "hover_intensity",
            SignalId::ClickCombo => "click_combo",
            SignalId::EnergyLevel => "energy_level",
            SignalId::PulseIntensity => "pulse_intensity",
            SignalId::ColorBoost => "color_boost",
            SignalId::PatternScale => "pattern_scale",
            SignalId::PatternDensity => "pattern_density",
            SignalId::TransformIntensity => "transform_intensity",
            SignalId::AnimationSpeed => "animation_speed",
            SignalId::GeometricBlend => "geometric_blend",
            SignalId::PatternType => "pattern_type",
            SignalId::GlitchIntensity => "glitch_intensity",
            SignalId::PixelCorruption => "pixel_corruption",
            SignalId::DataShift => "data_shift",
        }
    }

    /// DOM id of the slider driving this signal. The value display next to
    /// it uses the same id with a `Value` suffix.
    pub fn control_id(self) -> &'static str {
        match self {
            SignalId::Resolution => "resolution",
            SignalId::Mouse => "mouse",
            SignalId::Time => "time",
            SignalId::TimeSpeed => "timeSpeed",
            SignalId::Distortion => "distortion",
            SignalId::Complexity => "complexity",
            SignalId::ColorIntensity => "colorIntensity",
            SignalId::RotationSpeed => "rotationSpeed",
            SignalId::ScaleFactor => "scaleFactor",
            SignalId::ClickEffect => "clickEffect",
            SignalId::HoverIntensity => "hoverIntensity",
            SignalId::ClickCombo => "clickCombo",
            SignalId::EnergyLevel => "energyLevel",
            SignalId::PulseIntensity => "pulseIntensity",
            SignalId::ColorBoost => "colorBoost",
            SignalId::PatternScale => "patternScale",
            SignalId::PatternDensity => "patternDensity",
            SignalId::TransformIntensity => "transformIntensity",
            SignalId::AnimationSpeed => "animationSpeed",
            SignalId::GeometricBlend => "geometricBlend",
            SignalId::PatternType => "patternType",
            SignalId::GlitchIntensity => "glitchIntensity",
            SignalId::PixelCorruption => "pixelCorruption",
            SignalId::DataShift => "dataShift",
        }
    }

    /// Resolve a DOM control id back to its signal.
    pub fn from_control_id(id: &str) -> Result<SignalId, VizError> {
        SignalId::ALL
            .iter()
            .copied()
            .find(|s| s.control_id() == id)
            .ok_or_else(|| VizError::UnknownControl(id.to_string()))
    }
}

/// Who is allowed to write a signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalSource {
    Clock,
    Viewport,
    Pointer,
    Slider,
    /// Integer-valued control set by buttons rather than a slider.
    Selector,
    /// Written by the decay integrator every frame.
    Derived,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SignalValue {
    Scalar(f32),
    Vec2(Vec2),
}

impl SignalValue {
    pub fn as_scalar(self) -> Option<f32> {
        match self {
            SignalValue::Scalar(v) => Some(v),
            SignalValue::Vec2(_) => None,
        }
    }

    pub fn as_vec2(self) -> Option<Vec2> {
        match self {
            SignalValue::Vec2(v) => Some(v),
            SignalValue::Scalar(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignalSpec {
    pub id: SignalId,
    pub default: SignalValue,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub source: SignalSource,
    /// Digits shown in the value display.
    pub decimals: usize,
}

impl SignalSpec {
    const fn scalar(
        id: SignalId,
        default: f32,
        min: f32,
        max: f32,
        step: f32,
        source: SignalSource,
        decimals: usize,
    ) -> Self {
        Self {
            id,
            default: SignalValue::Scalar(default),
            min,
            max,
            step,
            source,
            decimals,
        }
    }

    const fn slider(id: SignalId, default: f32, min: f32, max: f32, step: f32) -> Self {
        Self::scalar(id, default, min, max, step, SignalSource::Slider, 1)
    }

    const fn fine_slider(id: SignalId, default: f32, min: f32, max: f32) -> Self {
        Self::scalar(id, default, min, max, 0.01, SignalSource::Slider, 2)
    }

    const fn derived(id: SignalId, max: f32) -> Self {
        Self::scalar(id, 0.0, 0.0, max, 0.0, SignalSource::Derived, 2)
    }

    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn is_control(&self) -> bool {
        matches!(self.source, SignalSource::Slider | SignalSource::Selector)
    }

    /// Snap to the control's step grid, the way a range input would.
    pub fn quantize(&self, v: f32) -> f32 {
        if self.step <= 0.0 {
            return self.clamp(v);
        }
        let steps = ((v - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }

    pub fn format(&self, v: f32) -> String {
        format!("{:.*}", self.decimals, v)
    }
}

const RESOLUTION: SignalSpec = SignalSpec {
    id: SignalId::Resolution,
    default: SignalValue::Vec2(Vec2::new(DEFAULT_RESOLUTION[0], DEFAULT_RESOLUTION[1])),
    min: 1.0,
    max: MAX_RESOLUTION,
    step: 1.0,
    source: SignalSource::Viewport,
    decimals: 0,
};

const MOUSE: SignalSpec = SignalSpec {
    id: SignalId::Mouse,
    default: SignalValue::Vec2(Vec2::new(POINTER_REST[0], POINTER_REST[1])),
    min: 0.0,
    max: 1.0,
    step: 0.0,
    source: SignalSource::Pointer,
    decimals: 2,
};

const TIME: SignalSpec =
    SignalSpec::scalar(SignalId::Time, 0.0, 0.0, f32::MAX, 0.0, SignalSource::Clock, 2);

/// Flowing-pattern variant. Vec2 entries come first so the packed layout has
/// no padding holes.
pub const FLOW_SIGNALS: &[SignalSpec] = &[
    RESOLUTION,
    MOUSE,
    TIME,
    SignalSpec::slider(SignalId::TimeSpeed, 1.0, 0.1, 3.0, 0.1),
    SignalSpec::slider(SignalId::Distortion, 1.0, 0.0, 5.0, 0.1),
    SignalSpec::slider(SignalId::Complexity, 3.0, 1.0, 10.0, 1.0),
    SignalSpec::slider(SignalId::ColorIntensity, 1.0, 0.1, 3.0, 0.1),
    SignalSpec::slider(SignalId::RotationSpeed, 0.5, -2.0, 2.0, 0.1),
    SignalSpec::slider(SignalId::ScaleFactor, 1.0, 0.5, 3.0, 0.1),
    SignalSpec::derived(SignalId::ClickEffect, 3.0),
    SignalSpec::derived(SignalId::HoverIntensity, 1.5),
    SignalSpec::derived(SignalId::ClickCombo, 2.0),
    SignalSpec::derived(SignalId::EnergyLevel, 1.0),
    SignalSpec::derived(SignalId::PulseIntensity, 1.0),
    SignalSpec::derived(SignalId::ColorBoost, 1.0),
];

/// Geometric black-and-white variant.
pub const GEOMETRIC_SIGNALS: &[SignalSpec] = &[
    RESOLUTION,
    MOUSE,
    TIME,
    SignalSpec::slider(SignalId::PatternScale, 1.0, 0.1, 5.0, 0.1),
    SignalSpec::slider(SignalId::RotationSpeed, 0.3, -2.0, 2.0, 0.1),
    SignalSpec::slider(SignalId::PatternDensity, 8.0, 1.0, 20.0, 1.0),
    SignalSpec::slider(SignalId::TransformIntensity, 1.0, 0.0, 3.0, 0.1),
    SignalSpec::slider(SignalId::AnimationSpeed, 1.0, 0.0, 3.0, 0.1),
    SignalSpec::fine_slider(SignalId::GeometricBlend, 0.5, 0.0, 1.0),
    SignalSpec::scalar(SignalId::PatternType, 0.0, 0.0, 7.0, 1.0, SignalSource::Selector, 0),
    SignalSpec::fine_slider(SignalId::GlitchIntensity, 0.0, 0.0, 1.0),
    SignalSpec::fine_slider(SignalId::PixelCorruption, 0.0, 0.0, 1.0),
    SignalSpec::fine_slider(SignalId::DataShift, 0.0, 0.0, 1.0),
];
