//! The four rotation conventions used by grid and surface geometry.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::ConversionError;
use crate::trig::{FULL_TURN_DEG, FULL_TURN_RAD};

/// Angle convention. The discriminants are the legacy integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum AngleMode {
    /// Degrees, anticlockwise from X.
    DegNormal = 0,
    /// Radians, anticlockwise from X.
    RadNormal = 1,
    /// Degrees, clockwise from Y.
    DegAzimuth = 2,
    /// Radians, clockwise from Y.
    RadAzimuth = 3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Degrees,
    Radians,
}

impl AngleMode {
    pub const ALL: [AngleMode; 4] = [
        AngleMode::DegNormal,
        AngleMode::RadNormal,
        AngleMode::DegAzimuth,
        AngleMode::RadAzimuth,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn unit(self) -> Unit {
        match self {
            AngleMode::DegNormal | AngleMode::DegAzimuth => Unit::Degrees,
            AngleMode::RadNormal | AngleMode::RadAzimuth => Unit::Radians,
        }
    }

    pub fn is_azimuth(self) -> bool {
        matches!(self, AngleMode::DegAzimuth | AngleMode::RadAzimuth)
    }

    /// Largest magnitude an input angle may have in this mode. Inclusive.
    pub fn bound(self) -> f64 {
        self.unit().full_turn()
    }

    /// Domain check with the legacy comparisons: NaN is not outside the range.
    pub fn contains(self, angle: f64) -> bool {
        let bound = self.bound();
        !(angle < -bound || angle > bound)
    }
}

impl Unit {
    pub fn full_turn(self) -> f64 {
        match self {
            Unit::Degrees => FULL_TURN_DEG,
            Unit::Radians => FULL_TURN_RAD,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Degrees => write!(f, "degrees"),
            Unit::Radians => write!(f, "radians"),
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AngleMode::DegNormal => "deg-normal",
            AngleMode::RadNormal => "rad-normal",
            AngleMode::DegAzimuth => "deg-azimuth",
            AngleMode::RadAzimuth => "rad-azimuth",
        };
        write!(f, "{name}")
    }
}

impl TryFrom<i32> for AngleMode {
    type Error = ConversionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AngleMode::DegNormal),
            1 => Ok(AngleMode::RadNormal),
            2 => Ok(AngleMode::DegAzimuth),
            3 => Ok(AngleMode::RadAzimuth),
            other => Err(ConversionError::UnknownMode(other)),
        }
    }
}

// Accepts the CLI names and the bare legacy codes.
impl FromStr for AngleMode {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return AngleMode::try_from(code);
        }
        <AngleMode as ValueEnum>::from_str(s, true)
            .map_err(|_| ConversionError::ParseMode(s.to_string()))
    }
}
