//! Whole-column conversion for grid properties.

use rayon::prelude::*;

use crate::convert::{convert, rotation_conv, Conversion};
use crate::error::Result;
use crate::mode::AngleMode;
use crate::report::Reporter;

/// Convert every angle in parallel. Output order matches input order.
pub fn convert_all(
    angles: &[f64],
    input: AngleMode,
    output: AngleMode,
    reporter: &dyn Reporter,
) -> Vec<Result<Conversion>> {
    angles
        .par_iter()
        .map(|&angle| convert(angle, input, output, reporter))
        .collect()
}

/// [`rotation_conv`] over a slice.
pub fn rotation_conv_all(angles: &[f64], ainmode: i32, mode: i32, reporter: &dyn Reporter) -> Vec<f64> {
    angles
        .par_iter()
        .map(|&angle| rotation_conv(angle, ainmode, mode, reporter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{NullReporter, RecordingReporter};

    #[test]
    fn keeps_order_and_reports_each_failure() {
        let angles: Vec<f64> = (0..1000).map(|i| i as f64 - 500.0).collect();
        let reporter = RecordingReporter::new();
        let out = convert_all(&angles, AngleMode::DegNormal, AngleMode::DegAzimuth, &reporter);

        assert_eq!(out.len(), angles.len());
        for (angle, got) in angles.iter().zip(&out) {
            match got {
                Ok(c) => {
                    let single = convert(*angle, AngleMode::DegNormal, AngleMode::DegAzimuth, &NullReporter);
                    assert_eq!(Ok(*c), single);
                }
                Err(_) => assert!(angle.abs() > 360.0),
            }
        }
        // -500..=-361 and 361..=499
        assert_eq!(reporter.len(), 140 + 139);
    }

    #[test]
    fn legacy_batch_uses_sentinels() {
        let reporter = RecordingReporter::new();
        let out = rotation_conv_all(&[0.0, 400.0, 90.0], 2, 0, &reporter);
        assert_eq!(out, vec![90.0, -9.0, 360.0]);
        assert_eq!(reporter.len(), 1);
    }
}
