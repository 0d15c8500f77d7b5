use std::fmt;
use std::str::FromStr;

use crate::signal::SignalId;
use crate::VizError;

/// A preset record: the signals it overwrites and their values.
pub type PresetValues = &'static [(SignalId, f32)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPreset {
    Kaleidoscope,
    Plasma,
    Fractal,
    Waves,
    Hypnotic,
    Electric,
    Dreamscape,
    Cosmic,
    Meditation,
    Cyberpunk,
    Aurora,
    Tornado,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlitchPreset {
    Corruption,
    PixelDeath,
    Scanlines,
    FullGlitch,
}

/// Any preset a variant can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Flow(FlowPreset),
    Glitch(GlitchPreset),
}

macro_rules! flow_record {
    ($ts:expr, $dist:expr, $cx:expr, $ci:expr, $rot:expr, $scale:expr) => {
        &[
            (SignalId::TimeSpeed, $ts),
            (SignalId::Distortion, $dist),
            (SignalId::Complexity, $cx),
            (SignalId::ColorIntensity, $ci),
            (SignalId::RotationSpeed, $rot),
            (SignalId::ScaleFactor, $scale),
        ]
    };
}

macro_rules! glitch_record {
    ($glitch:expr, $pixel:expr, $shift:expr) => {
        &[
            (SignalId::GlitchIntensity, $glitch),
            (SignalId::PixelCorruption, $pixel),
            (SignalId::DataShift, $shift),
        ]
    };
}

impl FlowPreset {
    pub const ALL: [FlowPreset; 12] = [
        FlowPreset::Kaleidoscope,
        FlowPreset::Plasma,
        FlowPreset::Fractal,
        FlowPreset::Waves,
        FlowPreset::Hypnotic,
        FlowPreset::Electric,
        FlowPreset::Dreamscape,
        FlowPreset::Cosmic,
        FlowPreset::Meditation,
        FlowPreset::Cyberpunk,
        FlowPreset::Aurora,
        FlowPreset::Tornado,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FlowPreset::Kaleidoscope => "kaleidoscope",
            FlowPreset::Plasma => "plasma",
            FlowPreset::Fractal => "fractal",
            FlowPreset::Waves => "waves",
            FlowPreset::Hypnotic => "hypnotic",
            FlowPreset::Electric => "electric",
            FlowPreset::Dreamscape => "dreamscape",
            FlowPreset::Cosmic => "cosmic",
            FlowPreset::Meditation => "meditation",
            FlowPreset::Cyberpunk => "cyberpunk",
            FlowPreset::Aurora => "aurora",
            FlowPreset::Tornado => "tornado",
        }
    }

    /// (timeSpeed, distortion, complexity, colorIntensity, rotationSpeed, scaleFactor)
    pub fn values(self) -> PresetValues {
        match self {
            FlowPreset::Kaleidoscope => flow_record!(0.5, 2.0, 6.0, 1.5, 1.0, 1.5),
            FlowPreset::Plasma => flow_record!(1.5, 3.0, 4.0, 2.0, 0.2, 0.8),
            FlowPreset::Fractal => flow_record!(0.3, 1.5, 8.0, 1.2, -0.5, 2.0),
            FlowPreset::Waves => flow_record!(2.0, 4.0, 3.0, 1.8, 0.8, 1.2),
            FlowPreset::Hypnotic => flow_record!(0.8, 2.5, 5.0, 2.5, 1.5, 1.8),
            FlowPreset::Electric => flow_record!(3.0, 5.0, 7.0, 3.0, -1.2, 0.6),
            FlowPreset::Dreamscape => flow_record!(0.2, 1.0, 4.0, 1.3, 0.3, 2.5),
            FlowPreset::Cosmic => flow_record!(1.2, 3.5, 9.0, 1.8, 0.7, 1.4),
            FlowPreset::Meditation => flow_record!(0.1, 0.5, 2.0, 0.8, 0.1, 3.0),
            FlowPreset::Cyberpunk => flow_record!(2.5, 4.5, 6.0, 2.8, -1.8, 0.9),
            FlowPreset::Aurora => flow_record!(0.6, 2.2, 4.0, 1.6, 0.4, 2.2),
            FlowPreset::Tornado => flow_record!(2.8, 4.8, 8.0, 2.2, 2.0, 1.1),
        }
    }
}

impl FromStr for FlowPreset {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowPreset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| VizError::UnknownPreset(s.to_string()))
    }
}

impl GlitchPreset {
    pub const ALL: [GlitchPreset; 4] = [
        GlitchPreset::Corruption,
        GlitchPreset::PixelDeath,
        GlitchPreset::Scanlines,
        GlitchPreset::FullGlitch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GlitchPreset::Corruption => "corruption",
            GlitchPreset::PixelDeath => "pixel_death",
            GlitchPreset::Scanlines => "scanlines",
            GlitchPreset::FullGlitch => "full_glitch",
        }
    }

    /// (glitchIntensity, pixelCorruption, dataShift)
    pub fn values(self) -> PresetValues {
        match self {
            GlitchPreset::Corruption => glitch_record!(0.3, 0.2, 0.4),
            GlitchPreset::PixelDeath => glitch_record!(0.1, 0.8, 0.1),
            GlitchPreset::Scanlines => glitch_record!(0.0, 0.0, 0.7),
            GlitchPreset::FullGlitch => glitch_record!(0.6, 0.5, 0.8),
        }
    }
}

impl FromStr for GlitchPreset {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GlitchPreset::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| VizError::UnknownPreset(s.to_string()))
    }
}

impl Preset {
    pub fn name(self) -> &'static str {
        match self {
            Preset::Flow(p) => p.name(),
            Preset::Glitch(p) => p.name(),
        }
    }

    pub fn values(self) -> PresetValues {
        match self {
            Preset::Flow(p) => p.values(),
            Preset::Glitch(p) => p.values(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometric pattern kinds, in `patternType` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    Checkerboard,
    Stripes,
    Mountains,
    Triangles,
    Diamonds,
    Hexagons,
    Maze,
    Waves,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Checkerboard,
        Pattern::Stripes,
        Pattern::Mountains,
        Pattern::Triangles,
        Pattern::Diamonds,
        Pattern::Hexagons,
        Pattern::Maze,
        Pattern::Waves,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Checkerboard => "checkerboard",
            Pattern::Stripes => "stripes",
            Pattern::Mountains => "mountains",
            Pattern::Triangles => "triangles",
            Pattern::Diamonds => "diamonds",
            Pattern::Hexagons => "hexagons",
            Pattern::Maze => "maze",
            Pattern::Waves => "waves",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Pattern> {
        Pattern::ALL.get(i).copied()
    }

    /// Same threshold ladder the fragment shader uses (`< k + 0.5`), so the
    /// host always agrees with what is on screen.
    pub fn from_uniform(v: f32) -> Pattern {
        Pattern::ALL
            .iter()
            .copied()
            .find(|p| v < p.index() as f32 + 0.5)
            .unwrap_or(Pattern::Waves)
    }

    /// The pattern blended in by `geometricBlend`: `(k + 1) mod 8`.
    pub fn secondary(self) -> Pattern {
        Pattern::ALL[(self.index() + 1) % Pattern::ALL.len()]
    }

    #[inline]
    pub fn uniform_value(self) -> f32 {
        self.index() as f32
    }
}

impl FromStr for Pattern {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| VizError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
