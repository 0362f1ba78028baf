//! Conversion between rotation conventions.
//!
//! Only three pairs have a formula:
//!
//! | from | to | result |
//! |------|----|--------|
//! | `DegNormal` | `DegAzimuth` | `90 + a` |
//! | `DegAzimuth` | `DegNormal` | `450 - a` |
//! | `RadAzimuth` | `DegNormal` | `450 - deg(a)` |
//!
//! Each result above 360 has one turn subtracted, once. Every other pair,
//! identity included, is unsupported and yields `0.0` without a diagnostic.

use crate::error::{ConversionError, Result};
use crate::mode::AngleMode;
use crate::report::Reporter;
use crate::trig::{to_degrees, wrap_once};

/// Returned by [`rotation_conv`] when the input angle is outside its domain.
pub const OUT_OF_RANGE_SENTINEL: f64 = -9.0;

/// Value of a conversion between modes that have no formula.
pub const UNSUPPORTED_DEFAULT: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Conversion {
    Converted(f64),
    /// No rule for this pair. Carries [`UNSUPPORTED_DEFAULT`] as its value.
    Unsupported,
}

impl Conversion {
    pub fn value(self) -> f64 {
        match self {
            Conversion::Converted(v) => v,
            Conversion::Unsupported => UNSUPPORTED_DEFAULT,
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Conversion::Converted(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub angle: f64,
    pub input: AngleMode,
    pub output: AngleMode,
}

impl ConversionRequest {
    pub fn new(angle: f64, input: AngleMode, output: AngleMode) -> Self {
        Self { angle, input, output }
    }

    pub fn convert(&self, reporter: &dyn Reporter) -> Result<Conversion> {
        convert(self.angle, self.input, self.output, reporter)
    }
}

/// Convert `angle` from `input` to `output` convention.
///
/// The angle is checked against the domain of `input` first, whatever the
/// output. A violation is handed to `reporter` once and returned as
/// [`ConversionError::OutOfRange`].
pub fn convert(
    angle: f64,
    input: AngleMode,
    output: AngleMode,
    reporter: &dyn Reporter,
) -> Result<Conversion> {
    validate(angle, input, reporter)?;
    Ok(apply(angle, input, output))
}

/// Integer-coded entry point with the old sentinel returns: `-9` for an
/// out-of-range angle and `0.0` for a pair without a formula.
///
/// Codes outside `0..=3` are not rejected. An unknown input code skips the
/// domain check and, like an unknown output code, matches no formula.
pub fn rotation_conv(ain: f64, ainmode: i32, mode: i32, reporter: &dyn Reporter) -> f64 {
    let input = AngleMode::try_from(ainmode).ok();
    let output = AngleMode::try_from(mode).ok();

    if let Some(input) = input {
        if validate(ain, input, reporter).is_err() {
            return OUT_OF_RANGE_SENTINEL;
        }
    }

    match (input, output) {
        (Some(input), Some(output)) => apply(ain, input, output).value(),
        _ => UNSUPPORTED_DEFAULT,
    }
}

fn validate(angle: f64, input: AngleMode, reporter: &dyn Reporter) -> Result<()> {
    if input.contains(angle) {
        return Ok(());
    }
    let err = ConversionError::OutOfRange { angle, unit: input.unit() };
    reporter.report(&err);
    Err(err)
}

fn apply(angle: f64, input: AngleMode, output: AngleMode) -> Conversion {
    use AngleMode::*;

    let result = match (input, output) {
        (DegNormal, DegAzimuth) => 90.0 + angle,
        (DegAzimuth, DegNormal) => 450.0 - angle,
        (RadAzimuth, DegNormal) => 450.0 - to_degrees(angle),
        _ => return Conversion::Unsupported,
    };
    Conversion::Converted(wrap_once(result))
}
