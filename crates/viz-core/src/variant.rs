use std::fmt;
use std::str::FromStr;

use crate::presets::{FlowPreset, GlitchPreset, Preset};
use crate::signal::{SignalId, SignalSpec, FLOW_SIGNALS, GEOMETRIC_SIGNALS};
use crate::{VizError, FLOW_WGSL, GEOMETRIC_WGSL, QUAD_WGSL};

/// The visualizations this crate knows how to drive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Flowing layered patterns with click/hover/energy feedback.
    #[default]
    Flow,
    /// Black-and-white geometric patterns with a glitch overlay.
    Geometric,
}

static FLOW_PRESETS: [Preset; 12] = [
    Preset::Flow(FlowPreset::Kaleidoscope),
    Preset::Flow(FlowPreset::Plasma),
    Preset::Flow(FlowPreset::Fractal),
    Preset::Flow(FlowPreset::Waves),
    Preset::Flow(FlowPreset::Hypnotic),
    Preset::Flow(FlowPreset::Electric),
    Preset::Flow(FlowPreset::Dreamscape),
    Preset::Flow(FlowPreset::Cosmic),
    Preset::Flow(FlowPreset::Meditation),
    Preset::Flow(FlowPreset::Cyberpunk),
    Preset::Flow(FlowPreset::Aurora),
    Preset::Flow(FlowPreset::Tornado),
];

static GLITCH_PRESETS: [Preset; 4] = [
    Preset::Glitch(GlitchPreset::Corruption),
    Preset::Glitch(GlitchPreset::PixelDeath),
    Preset::Glitch(GlitchPreset::Scanlines),
    Preset::Glitch(GlitchPreset::FullGlitch),
];

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Flow, Variant::Geometric];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Flow => "flow",
            Variant::Geometric => "geometric",
        }
    }

    /// Signal table; order matches the WGSL `Params` struct.
    pub fn signals(self) -> &'static [SignalSpec] {
        match self {
            Variant::Flow => FLOW_SIGNALS,
            Variant::Geometric => GEOMETRIC_SIGNALS,
        }
    }

    pub fn spec(self, id: SignalId) -> Option<&'static SignalSpec> {
        self.signals().iter().find(|s| s.id == id)
    }

    /// Slider and selector signals, i.e. everything the control panel shows.
    pub fn controls(self) -> impl Iterator<Item = &'static SignalSpec> {
        self.signals().iter().filter(|s| s.is_control())
    }

    /// Sliders touched by "randomize". The glitch intensities are left alone.
    pub fn randomized(self) -> &'static [SignalId] {
        match self {
            Variant::Flow => &[
                SignalId::TimeSpeed,
                SignalId::Distortion,
                SignalId::Complexity,
                SignalId::ColorIntensity,
                SignalId::RotationSpeed,
                SignalId::ScaleFactor,
            ],
            Variant::Geometric => &[
                SignalId::PatternScale,
                SignalId::RotationSpeed,
                SignalId::PatternDensity,
                SignalId::TransformIntensity,
                SignalId::AnimationSpeed,
                SignalId::GeometricBlend,
            ],
        }
    }

    pub fn presets(self) -> &'static [Preset] {
        match self {
            Variant::Flow => &FLOW_PRESETS,
            Variant::Geometric => &GLITCH_PRESETS,
        }
    }

    pub fn preset(self, name: &str) -> Result<Preset, VizError> {
        match self {
            Variant::Flow => name.parse::<FlowPreset>().map(Preset::Flow),
            Variant::Geometric => name.parse::<GlitchPreset>().map(Preset::Glitch),
        }
    }

    pub fn has_patterns(self) -> bool {
        matches!(self, Variant::Geometric)
    }

    pub fn fragment_source(self) -> &'static str {
        match self {
            Variant::Flow => FLOW_WGSL,
            Variant::Geometric => GEOMETRIC_WGSL,
        }
    }

    /// Complete shader module: shared full-screen quad plus the variant's
    /// uniform struct and fragment stage.
    pub fn shader_source(self) -> String {
        format!("{}\n{}", QUAD_WGSL, self.fragment_source())
    }
}

impl FromStr for Variant {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flow" | "shader" => Ok(Variant::Flow),
            "geometric" | "geo" => Ok(Variant::Geometric),
            other => Err(VizError::UnknownVariant(other.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
