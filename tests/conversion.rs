use approx::assert_relative_eq;
use rotation_conv::{convert, AngleMode, Conversion, ConversionError, NullReporter, RecordingReporter, Unit};
use std::f64::consts::PI;

use AngleMode::*;

fn value(angle: f64, input: AngleMode, output: AngleMode) -> f64 {
    convert(angle, input, output, &NullReporter).unwrap().value()
}

#[test]
fn degree_inputs_outside_domain_fail_for_every_output() {
    for input in [DegNormal, DegAzimuth] {
        for output in AngleMode::ALL {
            for angle in [-360.5, 360.5, 720.0, -1e9, f64::INFINITY, f64::NEG_INFINITY] {
                let reporter = RecordingReporter::new();
                let err = convert(angle, input, output, &reporter).unwrap_err();
                assert_eq!(err, ConversionError::OutOfRange { angle, unit: Unit::Degrees });
                assert_eq!(reporter.len(), 1);
            }
        }
    }
}

#[test]
fn radian_inputs_outside_domain_fail_for_every_output() {
    for input in [RadNormal, RadAzimuth] {
        for output in AngleMode::ALL {
            for angle in [2.0 * PI + 1e-9, -2.0 * PI - 1e-9, 90.0] {
                let err = convert(angle, input, output, &NullReporter).unwrap_err();
                assert_eq!(err, ConversionError::OutOfRange { angle, unit: Unit::Radians });
            }
        }
    }
}

#[test]
fn documented_values() {
    assert_eq!(value(0.0, DegNormal, DegAzimuth), 90.0);
    assert_eq!(value(350.0, DegNormal, DegAzimuth), 80.0);
    assert_eq!(value(90.0, DegAzimuth, DegNormal), 360.0);
    assert_relative_eq!(value(PI, RadAzimuth, DegNormal), 270.0, epsilon = 1e-12);
    assert!(convert(460.0, DegAzimuth, DegNormal, &NullReporter).is_err());
}

#[test]
fn degrees_to_radians_is_not_implemented() {
    for x in [-360.0, -90.0, 0.0, 45.0, 180.0, 360.0] {
        assert_eq!(convert(x, DegNormal, RadNormal, &NullReporter), Ok(Conversion::Unsupported));
        assert_eq!(value(x, DegNormal, RadNormal), 0.0);
    }
}

#[test]
fn identity_pairs_are_unsupported() {
    for mode in AngleMode::ALL {
        assert_eq!(convert(1.0, mode, mode, &NullReporter), Ok(Conversion::Unsupported));
    }
}

#[test]
fn normal_azimuth_round_trip_mirrors_about_x() {
    // 450 - (90 + x) = 360 - x, so only x = 180 comes back unchanged
    assert_eq!(value(value(180.0, DegNormal, DegAzimuth), DegAzimuth, DegNormal), 180.0);
    // a full turn wraps on the way out and lands on 360 rather than 0
    assert_eq!(value(value(360.0, DegNormal, DegAzimuth), DegAzimuth, DegNormal), 360.0);
    for x in [-360.0, -100.0, 0.0, 12.5, 100.0, 270.0, 300.0, 350.0] {
        let az = value(x, DegNormal, DegAzimuth);
        let back = value(az, DegAzimuth, DegNormal);
        assert_relative_eq!(back, rotation_conv::trig::wrap_once(360.0 - x), epsilon = 1e-12);
    }
}

#[test]
fn wrap_happens_once_at_most() {
    // 450 - (-360) = 810, one turn off leaves 450
    assert_eq!(value(-360.0, DegAzimuth, DegNormal), 450.0);
    assert_eq!(value(270.0, DegNormal, DegAzimuth), 360.0);
    assert_eq!(value(270.5, DegNormal, DegAzimuth), 0.5);
    assert_eq!(value(-360.0, DegNormal, DegAzimuth), -270.0);
}
