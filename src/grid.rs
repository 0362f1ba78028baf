use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use rotation_conv::{batch::rotation_conv_all, logger, AngleMode, ConversionError, TracingReporter};

#[derive(Parser, Debug)]
#[clap(author = "Brian Kuhns", version, about)]
/// Convert a column of rotation angles read from stdin
struct Args {
    #[arg(short = 'v')]
    verbose: bool,

    #[arg(long = "from", value_parser = parse_mode)]
    from: AngleMode,

    #[arg(long = "to", value_parser = parse_mode)]
    to: AngleMode,
}

fn parse_mode(s: &str) -> Result<AngleMode, ConversionError> {
    s.parse()
}

fn read_angles(input: &str) -> Result<Vec<f64>, String> {
    input
        .split_whitespace()
        .map(|tok| tok.parse::<f64>().map_err(|e| format!("bad angle {tok:?}: {e}")))
        .collect()
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_logger(args.verbose);

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }
    let angles = match read_angles(&input) {
        Ok(angles) => angles,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(count = angles.len(), from = %args.from, to = %args.to, "converting");

    for v in rotation_conv_all(&angles, args.from.code(), args.to.code(), &TracingReporter) {
        println!("{v}");
    }
    ExitCode::SUCCESS
}
