use std::fmt;

/// Convergence threshold shared by both solver strategies.
const EPSILON: f64 = 1e-6;

/// Iteration budget for Newton's method before falling back to bisection.
const NEWTON_ITERATIONS: u32 = 8;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Self = Self { x: 0., y: 0. };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Solver for a cubic Bézier timing function with implicit endpoints at
/// (0, 0) and (1, 1).
///
/// The curve is parametric in an internal variable `u`; [`solve`] inverts
/// the x-polynomial numerically to find the `u` whose x equals the given
/// time fraction, then samples the y-polynomial there.
///
/// [`solve`]: UnitBezier::solve
#[derive(Debug, Clone, Copy)]
pub struct UnitBezier {
    a: Point,
    b: Point,
    c: Point,
}

impl UnitBezier {
    /// Pre-calculates the polynomial coefficients from the two interior
    /// control points.
    pub fn new(p1: Point, p2: Point) -> Self {
        let c = Point::new(3. * p1.x, 3. * p1.y);
        let b = Point::new(3. * (p2.x - p1.x) - c.x, 3. * (p2.y - p1.y) - c.y);
        let a = Point::new(1. - c.x - b.x, 1. - c.y - b.y);

        Self { a, b, c }
    }

    /// Returns the curve's y at the point where its x equals `t`.
    ///
    /// `t` is expected in `[0, 1]`; out-of-range input is only clamped on
    /// the bisection path, so callers should pre-clamp.
    pub fn solve(&self, t: f64) -> f64 {
        self.sample_y(self.solve_x(t))
    }

    #[inline]
    fn sample_x(&self, u: f64) -> f64 {
        ((self.a.x * u + self.b.x) * u + self.c.x) * u
    }

    #[inline]
    fn sample_y(&self, u: f64) -> f64 {
        ((self.a.y * u + self.b.y) * u + self.c.y) * u
    }

    #[inline]
    fn sample_x_derivative(&self, u: f64) -> f64 {
        (3. * self.a.x * u + 2. * self.b.x) * u + self.c.x
    }

    fn solve_x(&self, t: f64) -> f64 {
        self.solve_x_newton(t)
            .unwrap_or_else(|| self.solve_x_bisection(t))
    }

    /// A few iterations of Newton's method -- normally very fast. Returns
    /// `None` when the derivative gets too flat to trust or the iteration
    /// budget runs out.
    fn solve_x_newton(&self, t: f64) -> Option<f64> {
        let mut u = t;

        for _ in 0..NEWTON_ITERATIONS {
            let x = self.sample_x(u) - t;
            if x.abs() < EPSILON {
                return Some(u);
            }

            let d = self.sample_x_derivative(u);
            if d.abs() < EPSILON {
                break;
            }
            u -= x / d;
        }

        None
    }

    fn solve_x_bisection(&self, t: f64) -> f64 {
        let t = t.clamp(0., 1.);
        let mut t0 = 0.;
        let mut t1 = 1.;
        let mut u = t;

        while t0 < t1 {
            let x = self.sample_x(u);
            if (x - t).abs() < EPSILON {
                break;
            }
            if t > x {
                t0 = u;
            } else {
                t1 = u;
            }
            u = (t1 - t0) / 2. + t0;
        }

        u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: &[(Point, Point)] = &[
        (Point::ZERO, Point::new(1., 1.)),
        (Point::new(0.25, 0.1), Point::new(0.25, 1.)),
        (Point::new(0.42, 0.), Point::new(1., 1.)),
        (Point::ZERO, Point::new(0.58, 1.)),
        (Point::new(0.42, 0.), Point::new(0.58, 1.)),
        // overshoot: y control points outside [0, 1]
        (Point::new(0.5, -0.5), Point::new(0.5, 1.5)),
    ];

    #[test]
    fn endpoints_resolve_exactly() {
        for &(p1, p2) in CURVES {
            let bezier = UnitBezier::new(p1, p2);
            assert!(
                bezier.solve(0.).abs() < EPSILON,
                "solve(0) should be 0 for p1=({p1}), p2=({p2})"
            );
            assert!(
                (bezier.solve(1.) - 1.).abs() < EPSILON,
                "solve(1) should be 1 for p1=({p1}), p2=({p2})"
            );
        }
    }

    #[test]
    fn linear_control_points_give_identity() {
        let bezier = UnitBezier::new(Point::ZERO, Point::new(1., 1.));
        for i in 0..=100 {
            let t = i as f64 / 100.;
            assert!((bezier.solve(t) - t).abs() < EPSILON, "solve({t}) should be {t}");
        }
    }

    #[test]
    fn solved_parameter_round_trips() {
        let bezier = UnitBezier::new(Point::new(0.42, 0.), Point::new(0.58, 1.));
        let rng = fastrand::Rng::with_seed(0x5eed);

        for _ in 0..1000 {
            let t = rng.f64();
            let u = bezier.solve_x(t);
            let x = bezier.sample_x(u);
            assert!((x - t).abs() < EPSILON, "sample_x({u}) = {x}, expected {t}");
        }
    }

    #[test]
    fn flat_tangent_falls_back_to_bisection() {
        // x(u) = 4(u - 1/2)^3 + 1/2 for these control points: the x
        // derivative vanishes at u = 0.5, so Newton bails near the middle
        // and the bisection path must answer
        let bezier = UnitBezier::new(Point::new(1., 0.), Point::new(0., 1.));
        for t in [0.4999, 0.5001, 0.25, 0.75] {
            let u = bezier.solve_x(t);
            assert!((bezier.sample_x(u) - t).abs() < EPSILON);
        }
    }
}
