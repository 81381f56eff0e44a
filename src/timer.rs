use crate::bezier::UnitBezier;
use crate::curve::EasingCurve;

use log::{debug, trace};
use thiserror::Error;

use std::time::{Duration, Instant};

#[derive(Debug, Error)]
pub enum TimerError {
    #[error("duration must be greater than zero")]
    InvalidDuration,
    #[error("timer is already running")]
    AlreadyRunning,
}

/// Lifecycle of a single animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Completed,
}

/// Source of repeated per-frame ticks driving a [`ProgressTimer`].
///
/// `drive` keeps delivering ticks to `on_tick` until it returns `false`.
/// Real implementations pace the calls against a clock (see
/// [`FrameClock`]); tests can push synthetic ticks instead.
///
/// [`FrameClock`]: crate::clock::FrameClock
pub trait TickSource {
    fn drive(&mut self, on_tick: &mut dyn FnMut() -> bool);
}

type ProgressFn = Box<dyn FnMut(f64)>;

/// Animates a progress value from 0 to 1 over a fixed duration, reporting
/// the eased value to an observer once per tick.
///
/// One instance represents one animation run: Idle until [`start`], then
/// Running while ticks arrive, then Completed once the elapsed time covers
/// the duration. The tick that reaches the duration reports exactly 1.0;
/// the observer is never invoked after that.
///
/// [`start`]: ProgressTimer::start
pub struct ProgressTimer {
    duration: Duration,
    curve: EasingCurve,
    bezier: UnitBezier,
    start_time: Instant,
    phase: Phase,
    on_progress: Option<ProgressFn>,
}

impl ProgressTimer {
    /// Creates a timer for one run over `duration`, eased by `curve`.
    ///
    /// A zero duration makes the elapsed fraction undefined and is
    /// rejected with [`TimerError::InvalidDuration`].
    pub fn new(duration: Duration, curve: EasingCurve) -> Result<Self, TimerError> {
        if duration.is_zero() {
            return Err(TimerError::InvalidDuration);
        }

        Ok(Self {
            duration,
            curve,
            bezier: curve.into(),
            start_time: Instant::now(),
            phase: Phase::Idle,
            on_progress: None,
        })
    }

    /// Registers the observer invoked with the eased progress on each
    /// tick. Set this before starting; swapping it mid-run is unsupported.
    pub fn on_progress<F>(&mut self, observer: F)
    where
        F: FnMut(f64) + 'static,
    {
        self.on_progress = Some(Box::new(observer));
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn curve(&self) -> EasingCurve {
        self.curve
    }

    /// Starts the run at the current instant.
    pub fn start(&mut self) -> Result<(), TimerError> {
        self.start_at(Instant::now())
    }

    /// Starts the run, capturing `now` as the reference point for elapsed
    /// time. A completed timer may be started again for a fresh run;
    /// starting one that is still running is rejected.
    pub fn start_at(&mut self, now: Instant) -> Result<(), TimerError> {
        if self.phase == Phase::Running {
            return Err(TimerError::AlreadyRunning);
        }

        self.start_time = now;
        self.phase = Phase::Running;
        debug!(
            "run started: duration={:?}, curve={}",
            self.duration, self.curve
        );

        Ok(())
    }

    /// Cancels a running timer. The phase becomes Completed and no further
    /// observer calls are made.
    pub fn stop(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Completed;
            debug!("run stopped early");
        }
    }

    /// Advances the run to the current instant.
    pub fn tick(&mut self) -> Phase {
        self.tick_at(Instant::now())
    }

    /// Advances the run to `now` and reports the eased progress for the
    /// elapsed fraction to the observer. Does nothing unless the timer is
    /// running. Returns the phase after the tick so a driving loop knows
    /// when to stop.
    pub fn tick_at(&mut self, now: Instant) -> Phase {
        if self.phase != Phase::Running {
            return self.phase;
        }

        let elapsed = now.saturating_duration_since(self.start_time);
        let fraction = if elapsed > self.duration {
            1.
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };

        // the terminal tick reports exactly 1.0, not a solver approximation
        let progress = if fraction >= 1. {
            1.
        } else {
            self.bezier.solve(fraction)
        };
        trace!("tick: fraction={fraction:.4}, progress={progress:.4}");

        if let Some(observer) = self.on_progress.as_mut() {
            observer(progress);
        }

        if fraction >= 1. {
            self.phase = Phase::Completed;
            debug!("run completed");
        }

        self.phase
    }

    /// Starts the run and lets `source` drive it until it leaves the
    /// Running phase.
    pub fn run(&mut self, source: &mut impl TickSource) -> Result<(), TimerError> {
        self.start()?;
        source.drive(&mut || self.tick() == Phase::Running);

        Ok(())
    }
}
