use anyhow::{anyhow, ensure, Result};
use clap::builder::ValueParser;
use clap::{arg, command, value_parser, ArgAction, Command};
use easer::{EasingCurve, Point};

use std::time::Duration;

const DURATION_LONG_HELP: &str = "Specify how long the animation runs. If \
not specified, defaults to 1 second.

A single number is parsed as SECONDS. Numbers can be specified as integers \
(e.g., 42) or floating point numbers (e.g., 0.42). The value must be \
positive.";

const CURVE_LONG_HELP: &str = "Easing curve shaping the progress over time. \
If not specified, defaults to ease-in-out.

Accepts one of the preset names 'linear', 'ease', 'ease-in', 'ease-out', \
'ease-in-out', or four comma-separated numbers 'X1,Y1,X2,Y2' giving the two \
interior control points of a custom cubic Bezier (endpoints are fixed at \
0,0 and 1,1). Custom control points are not validated; curves that are not \
monotonic in x produce author-defined results.";

const FPS_LONG_HELP: &str = "Number of progress updates per second. If not \
specified, defaults to 60.

Note that updates are paced against the wall clock, so the animation always \
finishes after DURATION seconds regardless of this value; fps only controls \
how smooth the rendered bar looks.";

pub fn build() -> Command {
    command!()
        .disable_help_flag(true)
        .disable_version_flag(true)
        .after_help("Use '--help' for detailed information")
        .after_long_help("Use '-h' for brief information")
        .arg(
            arg!([DURATION] "Animation duration in seconds (see '--help' for formatting)")
                .long_help(DURATION_LONG_HELP)
                .default_value("1")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_duration)),
        )
        .next_help_heading("Animation Options")
        .arg(
            arg!(-c --curve <CURVE> "Easing curve to apply (default: ease-in-out)")
                .long_help(CURVE_LONG_HELP)
                .default_value("ease-in-out")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_curve)),
        )
        .arg(
            arg!(-f --fps <FPS> "Number of progress updates per second (default: 60)")
                .long_help(FPS_LONG_HELP)
                .default_value("60")
                .hide_default_value(true)
                .value_parser(ValueParser::new(parse_fps)),
        )
        .arg(
            arg!(-w --width <COLS> "Width of the rendered bar in columns (default: 40)")
                .default_value("40")
                .hide_default_value(true)
                .value_parser(value_parser!(u16).range(1..)),
        )
        .next_help_heading("Options")
        .arg(arg!(-v --verbose "Enable debug logging"))
        .arg(arg!(-h --help "Print help information and quit").action(ArgAction::Help))
        .arg(arg!(-V --version "Print version information and quit").action(ArgAction::Version))
}

pub fn parse_duration(s: &str) -> Result<Duration> {
    if let Ok(result) = parse_sec_u64(s) {
        return Ok(result);
    }

    if let Ok(result) = parse_sec_f64(s) {
        return Ok(result);
    }

    Err(anyhow!("could not parse input as a duration"))
}

fn parse_sec_u64(s: &str) -> Result<Duration> {
    match s.parse::<u64>() {
        Ok(value) => {
            ensure!(value > 0, "duration must be a positive number");
            Ok(Duration::from_secs(value))
        }
        Err(e) => Err(anyhow!(e)),
    }
}

fn parse_sec_f64(s: &str) -> Result<Duration> {
    match s.parse::<f64>() {
        Ok(value) => {
            ensure!(value > 0., "duration must be a positive number");
            let ms = value * 1000.;
            Ok(Duration::from_millis(ms.round() as u64))
        }
        Err(e) => Err(anyhow!(e)),
    }
}

fn parse_fps(s: &str) -> Result<u32> {
    // parse first as i64 so we can report better error messages
    match s.parse::<i64>() {
        Ok(value) => {
            ensure!(value > 0, "fps must be a positive number");
            ensure!(
                value <= u32::MAX as i64,
                format!("fps must be between 1 and {}", u32::MAX)
            );
            Ok(value as u32)
        }
        Err(e) => Err(anyhow!(e)),
    }
}

pub fn parse_curve(s: &str) -> Result<EasingCurve> {
    match s.to_ascii_lowercase().as_str() {
        "linear" => Ok(EasingCurve::Linear),
        "ease" => Ok(EasingCurve::Ease),
        "ease-in" => Ok(EasingCurve::EaseIn),
        "ease-out" => Ok(EasingCurve::EaseOut),
        "ease-in-out" => Ok(EasingCurve::EaseInOut),
        other => parse_custom_curve(other),
    }
}

fn parse_custom_curve(s: &str) -> Result<EasingCurve> {
    let coords = s
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|_| anyhow!("could not parse input as an easing curve"))?;

    ensure!(
        coords.len() == 4,
        "custom curve requires four values: X1,Y1,X2,Y2"
    );
    ensure!(
        coords.iter().all(|v| v.is_finite()),
        "curve control points must be finite"
    );

    Ok(EasingCurve::Custom(
        Point::new(coords[0], coords[1]),
        Point::new(coords[2], coords[3]),
    ))
}
