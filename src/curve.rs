use crate::bezier::{Point, UnitBezier};

/// Easing presets matching the CSS timing-function keywords, plus a
/// `Custom` variant carrying arbitrary interior control points.
///
/// Custom control points are not validated; a curve that is not monotonic
/// in x still solves, but the result is whatever the author drew.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingCurve {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    Custom(Point, Point),
}

impl EasingCurve {
    /// First interior control point.
    pub fn p1(&self) -> Point {
        match self {
            EasingCurve::Linear => Point::ZERO,
            EasingCurve::Ease => Point::new(0.25, 0.1),
            EasingCurve::EaseIn => Point::new(0.42, 0.),
            EasingCurve::EaseOut => Point::ZERO,
            EasingCurve::EaseInOut => Point::new(0.42, 0.),
            EasingCurve::Custom(p, _) => *p,
        }
    }

    /// Second interior control point.
    pub fn p2(&self) -> Point {
        match self {
            EasingCurve::Linear => Point::new(1., 1.),
            EasingCurve::Ease => Point::new(0.25, 1.),
            EasingCurve::EaseIn => Point::new(1., 1.),
            EasingCurve::EaseOut => Point::new(0.58, 1.),
            EasingCurve::EaseInOut => Point::new(0.58, 1.),
            EasingCurve::Custom(_, p) => *p,
        }
    }
}

impl std::fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EasingCurve::Linear => write!(f, "linear"),
            EasingCurve::Ease => write!(f, "ease"),
            EasingCurve::EaseIn => write!(f, "ease-in"),
            EasingCurve::EaseOut => write!(f, "ease-out"),
            EasingCurve::EaseInOut => write!(f, "ease-in-out"),
            EasingCurve::Custom(p1, p2) => {
                write!(f, "custom(p1=({p1}), p2=({p2}))")
            }
        }
    }
}

impl From<EasingCurve> for UnitBezier {
    fn from(curve: EasingCurve) -> Self {
        UnitBezier::new(curve.p1(), curve.p2())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_to_css_control_points() {
        let table = [
            (EasingCurve::Linear, Point::ZERO, Point::new(1., 1.)),
            (EasingCurve::Ease, Point::new(0.25, 0.1), Point::new(0.25, 1.)),
            (EasingCurve::EaseIn, Point::new(0.42, 0.), Point::new(1., 1.)),
            (EasingCurve::EaseOut, Point::ZERO, Point::new(0.58, 1.)),
            (
                EasingCurve::EaseInOut,
                Point::new(0.42, 0.),
                Point::new(0.58, 1.),
            ),
        ];

        for (curve, p1, p2) in table {
            assert_eq!(curve.p1(), p1, "{curve} p1");
            assert_eq!(curve.p2(), p2, "{curve} p2");
        }
    }

    #[test]
    fn custom_points_pass_through_unchanged() {
        let p1 = Point::new(-0.3, 2.);
        let p2 = Point::new(1.7, -1.);
        let curve = EasingCurve::Custom(p1, p2);

        assert_eq!(curve.p1(), p1);
        assert_eq!(curve.p2(), p2);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let bezier = UnitBezier::from(EasingCurve::EaseInOut);
        let mut prev = 0.;

        for i in 0..=100 {
            let t = i as f64 / 100.;
            let y = bezier.solve(t);
            // allow for solver tolerance between adjacent samples
            assert!(y >= prev - 1e-6, "solve({t}) = {y} went below {prev}");
            prev = y;
        }
    }
}
