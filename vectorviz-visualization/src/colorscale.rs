//! Named color scales for scalar and categorical marker colors
//!
//! The names match the built-in palettes of the plotly.js renderer, so a
//! scale serializes as its name and the browser does the mapping. The stops
//! are also available here for backends that color points themselves.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use vectorviz_core::Error;

/// An RGB color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation between two colors
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb(channel(a.0, b.0), channel(a.1, b.1), channel(a.2, b.2))
    }
}

/// Built-in color scales
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ColorScale {
    #[default]
    Jet,
    Viridis,
    Hot,
    Greys,
    Rainbow,
    Bluered,
    Portland,
    Picnic,
    Electric,
    Blackbody,
    Earth,
    YlGnBu,
    YlOrRd,
    RdBu,
}

const JET: &[(f64, Rgb)] = &[
    (0.0, Rgb(0, 0, 131)),
    (0.125, Rgb(0, 60, 170)),
    (0.375, Rgb(5, 255, 255)),
    (0.625, Rgb(255, 255, 0)),
    (0.875, Rgb(250, 0, 0)),
    (1.0, Rgb(128, 0, 0)),
];

const VIRIDIS: &[(f64, Rgb)] = &[
    (0.0, Rgb(68, 1, 84)),
    (0.125, Rgb(71, 44, 122)),
    (0.25, Rgb(59, 81, 139)),
    (0.375, Rgb(44, 113, 142)),
    (0.5, Rgb(33, 144, 141)),
    (0.625, Rgb(39, 173, 129)),
    (0.75, Rgb(92, 200, 99)),
    (0.875, Rgb(170, 220, 50)),
    (1.0, Rgb(253, 231, 37)),
];

const HOT: &[(f64, Rgb)] = &[
    (0.0, Rgb(0, 0, 0)),
    (0.3, Rgb(230, 0, 0)),
    (0.6, Rgb(255, 210, 0)),
    (1.0, Rgb(255, 255, 255)),
];

const GREYS: &[(f64, Rgb)] = &[(0.0, Rgb(0, 0, 0)), (1.0, Rgb(255, 255, 255))];

const RAINBOW: &[(f64, Rgb)] = &[
    (0.0, Rgb(150, 0, 90)),
    (0.125, Rgb(0, 0, 200)),
    (0.25, Rgb(0, 25, 255)),
    (0.375, Rgb(0, 152, 255)),
    (0.5, Rgb(44, 255, 150)),
    (0.625, Rgb(151, 255, 0)),
    (0.75, Rgb(255, 234, 0)),
    (0.875, Rgb(255, 111, 0)),
    (1.0, Rgb(255, 0, 0)),
];

const BLUERED: &[(f64, Rgb)] = &[(0.0, Rgb(0, 0, 255)), (1.0, Rgb(255, 0, 0))];

const PORTLAND: &[(f64, Rgb)] = &[
    (0.0, Rgb(12, 51, 131)),
    (0.25, Rgb(10, 136, 186)),
    (0.5, Rgb(242, 211, 56)),
    (0.75, Rgb(242, 143, 56)),
    (1.0, Rgb(217, 30, 30)),
];

const PICNIC: &[(f64, Rgb)] = &[
    (0.0, Rgb(0, 0, 255)),
    (0.1, Rgb(51, 153, 255)),
    (0.2, Rgb(102, 204, 255)),
    (0.3, Rgb(153, 204, 255)),
    (0.4, Rgb(204, 204, 255)),
    (0.5, Rgb(255, 255, 255)),
    (0.6, Rgb(255, 204, 255)),
    (0.7, Rgb(255, 153, 255)),
    (0.8, Rgb(255, 102, 204)),
    (0.9, Rgb(255, 102, 102)),
    (1.0, Rgb(255, 0, 0)),
];

const ELECTRIC: &[(f64, Rgb)] = &[
    (0.0, Rgb(0, 0, 0)),
    (0.15, Rgb(30, 0, 100)),
    (0.4, Rgb(120, 0, 100)),
    (0.6, Rgb(160, 90, 0)),
    (0.8, Rgb(230, 200, 0)),
    (1.0, Rgb(255, 250, 220)),
];

const BLACKBODY: &[(f64, Rgb)] = &[
    (0.0, Rgb(0, 0, 0)),
    (0.2, Rgb(230, 0, 0)),
    (0.4, Rgb(230, 210, 0)),
    (0.7, Rgb(255, 255, 255)),
    (1.0, Rgb(160, 200, 255)),
];

const EARTH: &[(f64, Rgb)] = &[
    (0.0, Rgb(0, 0, 130)),
    (0.1, Rgb(0, 180, 180)),
    (0.2, Rgb(40, 210, 40)),
    (0.4, Rgb(230, 230, 50)),
    (0.6, Rgb(120, 70, 20)),
    (1.0, Rgb(255, 255, 255)),
];

const YLGNBU: &[(f64, Rgb)] = &[
    (0.0, Rgb(8, 29, 88)),
    (0.125, Rgb(37, 52, 148)),
    (0.25, Rgb(34, 94, 168)),
    (0.375, Rgb(29, 145, 192)),
    (0.5, Rgb(65, 182, 196)),
    (0.625, Rgb(127, 205, 187)),
    (0.75, Rgb(199, 233, 180)),
    (0.875, Rgb(237, 248, 217)),
    (1.0, Rgb(255, 255, 217)),
];

const YLORRD: &[(f64, Rgb)] = &[
    (0.0, Rgb(128, 0, 38)),
    (0.125, Rgb(189, 0, 38)),
    (0.25, Rgb(227, 26, 28)),
    (0.375, Rgb(252, 78, 42)),
    (0.5, Rgb(253, 141, 60)),
    (0.625, Rgb(254, 178, 76)),
    (0.75, Rgb(254, 217, 118)),
    (0.875, Rgb(255, 237, 160)),
    (1.0, Rgb(255, 255, 204)),
];

const RDBU: &[(f64, Rgb)] = &[
    (0.0, Rgb(5, 10, 172)),
    (0.35, Rgb(106, 137, 247)),
    (0.5, Rgb(190, 190, 190)),
    (0.6, Rgb(220, 170, 132)),
    (0.7, Rgb(230, 145, 90)),
    (1.0, Rgb(178, 10, 28)),
];

impl ColorScale {
    /// Every built-in scale
    pub const ALL: [ColorScale; 14] = [
        ColorScale::Jet,
        ColorScale::Viridis,
        ColorScale::Hot,
        ColorScale::Greys,
        ColorScale::Rainbow,
        ColorScale::Bluered,
        ColorScale::Portland,
        ColorScale::Picnic,
        ColorScale::Electric,
        ColorScale::Blackbody,
        ColorScale::Earth,
        ColorScale::YlGnBu,
        ColorScale::YlOrRd,
        ColorScale::RdBu,
    ];

    /// The renderer's name for this scale
    pub fn name(&self) -> &'static str {
        match self {
            ColorScale::Jet => "Jet",
            ColorScale::Viridis => "Viridis",
            ColorScale::Hot => "Hot",
            ColorScale::Greys => "Greys",
            ColorScale::Rainbow => "Rainbow",
            ColorScale::Bluered => "Bluered",
            ColorScale::Portland => "Portland",
            ColorScale::Picnic => "Picnic",
            ColorScale::Electric => "Electric",
            ColorScale::Blackbody => "Blackbody",
            ColorScale::Earth => "Earth",
            ColorScale::YlGnBu => "YlGnBu",
            ColorScale::YlOrRd => "YlOrRd",
            ColorScale::RdBu => "RdBu",
        }
    }

    /// Color stops as `(position, color)` with positions rising from 0 to 1
    pub fn stops(&self) -> &'static [(f64, Rgb)] {
        match self {
            ColorScale::Jet => JET,
            ColorScale::Viridis => VIRIDIS,
            ColorScale::Hot => HOT,
            ColorScale::Greys => GREYS,
            ColorScale::Rainbow => RAINBOW,
            ColorScale::Bluered => BLUERED,
            ColorScale::Portland => PORTLAND,
            ColorScale::Picnic => PICNIC,
            ColorScale::Electric => ELECTRIC,
            ColorScale::Blackbody => BLACKBODY,
            ColorScale::Earth => EARTH,
            ColorScale::YlGnBu => YLGNBU,
            ColorScale::YlOrRd => YLORRD,
            ColorScale::RdBu => RDBU,
        }
    }

    /// Map `t` (clamped to `[0, 1]`) to a color
    pub fn sample(&self, t: f64) -> Rgb {
        let stops = self.stops();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        for pair in stops.windows(2) {
            let (lo, lo_color) = pair[0];
            let (hi, hi_color) = pair[1];
            if t <= hi {
                let local = if hi > lo { (t - lo) / (hi - lo) } else { 0.0 };
                return Rgb::lerp(lo_color, hi_color, local);
            }
        }
        stops[stops.len() - 1].1
    }
}

impl fmt::Display for ColorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorScale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorScale::ALL
            .iter()
            .copied()
            .find(|scale| scale.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownColorScale(s.to_string()))
    }
}

impl Serialize for ColorScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorScale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
