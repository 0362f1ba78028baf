// Free-function spellings of the float methods, same as the rest of the crate reads them.
use std::f64::consts::PI;

pub const FULL_TURN_DEG: f64 = 360.0;
pub const FULL_TURN_RAD: f64 = 2.0 * PI;

pub fn cos(x: f64) -> f64 {
    x.cos()
}
pub fn sin(x: f64) -> f64 {
    x.sin()
}

// Multiply before dividing. `f64::to_degrees` folds the constant first and can
// differ in the last bit from what callers of the legacy routine got.
pub fn to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}
pub fn to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Subtract one full turn if `deg` is above 360. Never reduces twice and never
/// touches negative values.
pub fn wrap_once(deg: f64) -> f64 {
    if deg > FULL_TURN_DEG {
        deg - FULL_TURN_DEG
    } else {
        deg
    }
}
