//! Eased progress animation: a cubic Bézier timing-function solver and a
//! frame-driven timer that reports eased progress in `[0, 1]` to an
//! observer once per tick.

pub mod bezier;
pub mod clock;
pub mod curve;
pub mod timer;

pub use bezier::{Point, UnitBezier};
pub use clock::FrameClock;
pub use curve::EasingCurve;
pub use timer::{Phase, ProgressTimer, TickSource, TimerError};
