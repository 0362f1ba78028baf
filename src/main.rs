use std::process::ExitCode;

use clap::Parser;
use rotation_conv::{logger, rotation_conv, AngleMode, Conversion, ConversionError, ConversionRequest, TracingReporter};

#[derive(Parser, Debug)]
#[clap(author = "Brian Kuhns", version, about)]
/// Convert a rotation angle between grid conventions
struct Args {
    /// whether to be verbose
    #[arg(short = 'v')]
    verbose: bool,

    #[arg(long = "angle", allow_negative_numbers = true)]
    angle: f64,

    /// deg-normal, rad-normal, deg-azimuth, rad-azimuth (or 0..3)
    #[arg(long = "from", value_parser = parse_mode)]
    from: AngleMode,

    #[arg(long = "to", value_parser = parse_mode)]
    to: AngleMode,

    /// print the raw value of the integer-coded routine, sentinels included
    #[arg(long = "legacy")]
    legacy: bool,
}

fn parse_mode(s: &str) -> Result<AngleMode, ConversionError> {
    s.parse()
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logger(args.verbose);
    tracing::debug!("{args:?}");

    if args.legacy {
        let v = rotation_conv(args.angle, args.from.code(), args.to.code(), &TracingReporter);
        println!("{v}");
        return ExitCode::SUCCESS;
    }

    let request = ConversionRequest::new(args.angle, args.from, args.to);
    match request.convert(&TracingReporter) {
        Ok(Conversion::Converted(v)) => {
            println!("{v}");
            ExitCode::SUCCESS
        }
        Ok(Conversion::Unsupported) => {
            eprintln!("no conversion from {} to {}", args.from, args.to);
            println!("{}", Conversion::Unsupported.value());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
