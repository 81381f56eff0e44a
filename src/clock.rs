use crate::timer::TickSource;

use std::time::{Duration, Instant};

/// Fixed-rate tick source paced against the wall clock.
///
/// Stands in for a display refresh callback: each tick runs, then the
/// clock sleeps for whatever is left of the frame budget so ticks land at
/// roughly the target rate even when the callback's cost varies.
pub struct FrameClock {
    frame_time: Duration,
}

impl FrameClock {
    /// Creates a clock targeting `fps` ticks per second. An fps of zero is
    /// treated as one.
    pub fn new(fps: u32) -> Self {
        let frame_ms = 1000. / fps.max(1) as f64;

        Self {
            frame_time: Duration::from_millis(frame_ms.round() as u64),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

impl TickSource for FrameClock {
    fn drive(&mut self, on_tick: &mut dyn FnMut() -> bool) {
        loop {
            let f_start = Instant::now();
            if !on_tick() {
                break;
            }

            // pause for the remainder of frame time to hold the target fps
            let dt = f_start.elapsed();
            if dt < self.frame_time {
                spin_sleep::sleep(self.frame_time - dt);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::EasingCurve;
    use crate::timer::{Phase, ProgressTimer};

    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn frame_time_follows_fps() {
        assert_eq!(FrameClock::new(60).frame_time(), Duration::from_millis(17));
        assert_eq!(FrameClock::new(250).frame_time(), Duration::from_millis(4));
        assert_eq!(FrameClock::default().frame_time(), Duration::from_millis(17));
    }

    #[test]
    fn drives_a_timer_to_completion() {
        let mut timer =
            ProgressTimer::new(Duration::from_millis(30), EasingCurve::EaseInOut).unwrap();

        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&values);
        timer.on_progress(move |p| sink.borrow_mut().push(p));

        let mut clock = FrameClock::new(250);
        timer.run(&mut clock).unwrap();

        let values = values.borrow();
        assert_eq!(timer.phase(), Phase::Completed);
        assert!(values.len() >= 2, "expected several frames in 30ms");
        assert_eq!(*values.last().unwrap(), 1.);
        assert!(values.windows(2).all(|w| w[1] >= w[0] - 1e-6));
    }
}
