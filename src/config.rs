use clap::ArgMatches;
use easer::EasingCurve;

use std::time::Duration;

pub struct Config {
    pub duration: Duration,
    pub curve: EasingCurve,
    pub fps: u32,
    pub width: u16,
    pub verbose: bool,
}

impl From<&ArgMatches> for Config {
    fn from(matches: &ArgMatches) -> Self {
        Self {
            duration: matches
                .get_one::<Duration>("DURATION")
                .copied()
                .expect("duration should be required by clap"),
            curve: matches
                .get_one::<EasingCurve>("curve")
                .copied()
                .expect("curve should be required by clap"),
            fps: matches
                .get_one::<u32>("fps")
                .copied()
                .expect("fps should be required by clap"),
            width: matches
                .get_one::<u16>("width")
                .copied()
                .expect("width should be required by clap"),
            verbose: matches.get_flag("verbose"),
        }
    }
}
