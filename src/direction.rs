use crate::error::{ConversionError, Result};
use crate::mode::AngleMode;
use crate::report::Reporter;
use crate::trig::{cos, sin, to_radians};

use vecmath::{vec2_add, vec2_scale, vec2_sub, Vector2};

type Pt2 = Vector2<f64>;

/// Unit direction `[x, y]` of `angle` read in `mode`.
///
/// Unlike [`crate::convert::convert`] this covers all four modes, since a
/// direction does not depend on which convention it was written in.
pub fn unit_vector(angle: f64, mode: AngleMode, reporter: &dyn Reporter) -> Result<Pt2> {
    if !mode.contains(angle) {
        let err = ConversionError::OutOfRange { angle, unit: mode.unit() };
        reporter.report(&err);
        return Err(err);
    }
    let rad = match mode {
        AngleMode::DegNormal | AngleMode::DegAzimuth => to_radians(angle),
        AngleMode::RadNormal | AngleMode::RadAzimuth => angle,
    };
    // azimuth swaps the axes: 0 points up Y and grows clockwise
    Ok(if mode.is_azimuth() {
        [sin(rad), cos(rad)]
    } else {
        [cos(rad), sin(rad)]
    })
}

/// Rotate `p` about `origin` so that the X axis lands on the direction of
/// `angle`. This is how a rotated grid maps local offsets to world coordinates.
pub fn rotate(p: Pt2, origin: Pt2, angle: f64, mode: AngleMode, reporter: &dyn Reporter) -> Result<Pt2> {
    let [c, s] = unit_vector(angle, mode, reporter)?;
    let [dx, dy] = vec2_sub(p, origin);
    let along_x = vec2_scale([c, s], dx);
    let along_y = vec2_scale([-s, c], dy);
    Ok(vec2_add(origin, vec2_add(along_x, along_y)))
}
