//! Closed enumerations for provider category codes.

use crate::error::{Result, RouteplanError};
use std::fmt;

/// A category decoded from a provider integer code
pub trait Category: Copy + Ord + fmt::Debug + fmt::Display {
    /// Feature name used in error messages
    const FEATURE: &'static str;

    fn from_code(code: i32) -> Result<Self>;

    fn code(self) -> i32;

    /// Decode a summary value. Providers send these as floats, so anything
    /// with a fractional part is rejected.
    fn from_value(value: f64) -> Result<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(RouteplanError::UnknownCategory {
                feature: Self::FEATURE,
                code: value.to_string(),
            });
        }
        Self::from_code(value as i32)
    }
}

fn unknown(feature: &'static str, code: i32) -> RouteplanError {
    RouteplanError::UnknownCategory { feature, code: code.to_string() }
}

/// Way surface as reported by the routing provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceType {
    Unknown,
    Paved,
    Unpaved,
    Asphalt,
    Concrete,
    Cobblestone,
    Metal,
    Wood,
    CompactedGravel,
    FineGravel,
    Gravel,
    Dirt,
    Ground,
    Ice,
    PavingStones,
    Sand,
    Woodchips,
    Grass,
    GrassPaver,
}

impl SurfaceType {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceType::Unknown => "Unknown",
            SurfaceType::Paved => "Paved",
            SurfaceType::Unpaved => "Unpaved",
            SurfaceType::Asphalt => "Asphalt",
            SurfaceType::Concrete => "Concrete",
            SurfaceType::Cobblestone => "Cobblestone",
            SurfaceType::Metal => "Metal",
            SurfaceType::Wood => "Wood",
            SurfaceType::CompactedGravel => "Compacted Gravel",
            SurfaceType::FineGravel => "Fine Gravel",
            SurfaceType::Gravel => "Gravel",
            SurfaceType::Dirt => "Dirt",
            SurfaceType::Ground => "Ground",
            SurfaceType::Ice => "Ice",
            SurfaceType::PavingStones => "Paving Stones",
            SurfaceType::Sand => "Sand",
            SurfaceType::Woodchips => "Woodchips",
            SurfaceType::Grass => "Grass",
            SurfaceType::GrassPaver => "Grass Paver",
        }
    }
}

impl Category for SurfaceType {
    const FEATURE: &'static str = "surface";

    fn from_code(code: i32) -> Result<Self> {
        let surface = match code {
            0 => SurfaceType::Unknown,
            1 => SurfaceType::Paved,
            2 => SurfaceType::Unpaved,
            3 => SurfaceType::Asphalt,
            4 => SurfaceType::Concrete,
            5 => SurfaceType::Cobblestone,
            6 => SurfaceType::Metal,
            7 => SurfaceType::Wood,
            8 => SurfaceType::CompactedGravel,
            9 => SurfaceType::FineGravel,
            10 => SurfaceType::Gravel,
            11 => SurfaceType::Dirt,
            12 => SurfaceType::Ground,
            13 => SurfaceType::Ice,
            14 => SurfaceType::PavingStones,
            15 => SurfaceType::Sand,
            16 => SurfaceType::Woodchips,
            17 => SurfaceType::Grass,
            18 => SurfaceType::GrassPaver,
            other => return Err(unknown(Self::FEATURE, other)),
        };
        Ok(surface)
    }

    fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for SurfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Eleven-step grade scale, from very steep decline (-5) to very steep incline (5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SteepnessType {
    VerySteepDecline,
    SteepDecline,
    ModerateDecline,
    SlightDecline,
    VerySlightDecline,
    Flat,
    VerySlightIncline,
    SlightIncline,
    ModerateIncline,
    SteepIncline,
    VerySteepIncline,
}

impl SteepnessType {
    pub fn name(&self) -> &'static str {
        match self {
            SteepnessType::VerySteepDecline => "Very Steep Decline",
            SteepnessType::SteepDecline => "Steep Decline",
            SteepnessType::ModerateDecline => "Moderate Decline",
            SteepnessType::SlightDecline => "Slight Decline",
            SteepnessType::VerySlightDecline => "Very Slight Decline",
            SteepnessType::Flat => "Flat",
            SteepnessType::VerySlightIncline => "Very Slight Incline",
            SteepnessType::SlightIncline => "Slight Incline",
            SteepnessType::ModerateIncline => "Moderate Incline",
            SteepnessType::SteepIncline => "Steep Incline",
            SteepnessType::VerySteepIncline => "Very Steep Incline",
        }
    }

    /// Percent-grade range covered by this step
    pub fn grade_range(&self) -> &'static str {
        match self.code().abs() {
            5 => ">16%",
            4 => "12-15%",
            3 => "7-11%",
            2 => "4-6%",
            1 => "1-3%",
            _ => "0%",
        }
    }
}

impl Category for SteepnessType {
    const FEATURE: &'static str = "steepness";

    fn from_code(code: i32) -> Result<Self> {
        let steepness = match code {
            -5 => SteepnessType::VerySteepDecline,
            -4 => SteepnessType::SteepDecline,
            -3 => SteepnessType::ModerateDecline,
            -2 => SteepnessType::SlightDecline,
            -1 => SteepnessType::VerySlightDecline,
            0 => SteepnessType::Flat,
            1 => SteepnessType::VerySlightIncline,
            2 => SteepnessType::SlightIncline,
            3 => SteepnessType::ModerateIncline,
            4 => SteepnessType::SteepIncline,
            5 => SteepnessType::VerySteepIncline,
            other => return Err(unknown(Self::FEATURE, other)),
        };
        Ok(steepness)
    }

    fn code(self) -> i32 {
        self as i32 - 5
    }
}

impl fmt::Display for SteepnessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.grade_range())
    }
}

/// A 0-10 rating used by the gauge features (greenness, noise, shade)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GaugeLevel(u8);

impl GaugeLevel {
    pub const MAX: u8 = 10;
}

impl Category for GaugeLevel {
    const FEATURE: &'static str = "gauge";

    fn from_code(code: i32) -> Result<Self> {
        if (0..=Self::MAX as i32).contains(&code) {
            Ok(GaugeLevel(code as u8))
        } else {
            Err(unknown(Self::FEATURE, code))
        }
    }

    fn code(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for GaugeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
