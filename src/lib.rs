pub mod batch;
pub mod convert;
pub mod direction;
pub mod error;
pub mod logger;
pub mod mode;
pub mod report;
pub mod trig;

pub use convert::{
    convert, rotation_conv, Conversion, ConversionRequest, OUT_OF_RANGE_SENTINEL, UNSUPPORTED_DEFAULT,
};
pub use error::{ConversionError, Result};
pub use mode::{AngleMode, Unit};
pub use report::{NullReporter, RecordingReporter, Reporter, TracingReporter};
