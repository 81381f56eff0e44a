mod cli;
mod config;

use config::Config;

use anyhow::Result;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, execute};
use easer::{FrameClock, ProgressTimer};
use log::{warn, LevelFilter};

use std::io::stdout;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli::build().get_matches();
    let config = Config::from(&matches);

    if let Err(e) = setup_logger(config.verbose) {
        eprintln!("error: failed to initialize logging ({e})");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logger(verbose: bool) -> Result<(), fern::InitError> {
    let colors = fern::colors::ColoredLevelConfig::new();
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                colors.color(record.level()),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let mut timer = ProgressTimer::new(config.duration, config.curve)?;

    let width = config.width;
    timer.on_progress(move |progress| {
        if let Err(e) = draw_bar(width, progress) {
            warn!("failed to draw progress bar: {e}");
        }
    });

    let mut stdout = stdout();
    execute!(stdout, cursor::Hide)?;

    let mut clock = FrameClock::new(config.fps);
    let result = timer.run(&mut clock);

    execute!(stdout, Print("\n"), cursor::Show)?;
    result.map_err(Into::into)
}

// custom overshoot curves can report progress outside [0, 1]; the bar
// itself only has `width` cells, so pin the display to its ends
fn bar_cells(width: u16, progress: f64) -> (usize, usize) {
    let filled = (progress.clamp(0., 1.) * f64::from(width)).round() as usize;

    (filled, usize::from(width) - filled)
}

fn draw_bar(width: u16, progress: f64) -> Result<()> {
    let (filled, empty) = bar_cells(width, progress);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));

    let mut stdout = stdout();
    execute!(
        stdout,
        Clear(ClearType::CurrentLine),
        cursor::MoveToColumn(0),
        Print("Progress: ".bold()),
        Print("["),
        Print(bar.as_str().cyan()),
        Print("] "),
        Print(format!("{:>5.1}%", progress.clamp(0., 1.) * 100.)),
    )?;

    Ok(())
}
