use super::*;
use crate::point::Point;
use crate::spline::Spline;

/// A cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
///
/// The struct doubles as the control point set handed to a render pass:
/// exactly four points by construction, `Copy` so it is passed by value, and
/// immutable for the duration of the pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P> {
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end: P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// The four control points in curve order.
    pub fn control_points(&self) -> [P; 4] {
        [self.start, self.ctrl1, self.ctrl2, self.end]
    }

    /// Evaluate a CubicBezier curve at t by direct evaluation of the polynomial (not numerically stable).
    /// At t = 0 and t = 1 the weights collapse so the start and end points are returned exactly.
    pub fn eval(&self, t: NativeFloat) -> P {
        let one_t = 1.0 - t;
        self.start * (one_t * one_t * one_t)
            + self.ctrl1 * (3.0 * t * one_t * one_t)
            + self.ctrl2 * (3.0 * t * t * one_t)
            + self.end * (t * t * t)
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: NativeFloat) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start) * t;
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1) * t;
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2) * t;
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab) * t;
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc) * t;
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab) * t
    }
}

/// The closed-form strategy: sampling evaluates the Bernstein polynomial.
impl<P> Spline<P> for CubicBezier<P>
where
    P: Point,
{
    fn eval(&self, t: NativeFloat) -> P {
        self.eval(t)
    }
}

#[cfg(test)]
mod tests {
    use super::PointN;
    use super::*;

    #[test]
    fn circle_approximation_error() {
        // define closure for unit circle
        let circle = |p: PointN<f64, 2>| -> f64 { p.into_iter().map(|x| x * x).sum::<f64>().sqrt() - 1f64 };

        // define control points for 4 bezier segments
        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        let max_drift_perc = 0.019608; // radial drift percent
        let max_error = max_drift_perc * 0.01; // absolute max radial error

        let bezier_quadrant_1 = CubicBezier {
            start: PointN::new([0f64, 1f64]),
            ctrl1: PointN::new([c, 1f64]),
            ctrl2: PointN::new([1f64, c]),
            end: PointN::new([1f64, 0f64]),
        };
        let bezier_quadrant_2 = CubicBezier {
            start: PointN::new([1f64, 0f64]),
            ctrl1: PointN::new([1f64, -c]),
            ctrl2: PointN::new([c, -1f64]),
            end: PointN::new([0f64, -1f64]),
        };
        let bezier_quadrant_3 = CubicBezier {
            start: PointN::new([0f64, -1f64]),
            ctrl1: PointN::new([-c, -1f64]),
            ctrl2: PointN::new([-1f64, -c]),
            end: PointN::new([-1f64, 0f64]),
        };
        let bezier_quadrant_4 = CubicBezier {
            start: PointN::new([-1f64, 0f64]),
            ctrl1: PointN::new([-1f64, c]),
            ctrl2: PointN::new([-c, 1f64]),
            end: PointN::new([0f64, 1f64]),
        };
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);

            let point = bezier_quadrant_1.eval(t);
            let contour = circle(point);
            assert!(contour.abs() <= max_error);

            let point = bezier_quadrant_2.eval(t);
            let contour = circle(point);
            assert!(contour.abs() <= max_error);

            let point = bezier_quadrant_3.eval(t);
            let contour = circle(point);
            assert!(contour.abs() <= max_error);

            let point = bezier_quadrant_4.eval(t);
            let contour = circle(point);
            assert!(contour.abs() <= max_error);
        }
    }

    #[test]
    fn eval_equivalence_casteljau() {
        // all eval methods should be approximately equivalent for well defined test cases
        // and not equivalent where numerical stability becomes an issue for normal eval
        let bezier = CubicBezier::new(
            PointN::new([0f64, 1.77f64]),
            PointN::new([1.1f64, -1f64]),
            PointN::new([4.3f64, 3f64]),
            PointN::new([3.2f64, -4f64]),
        );

        let nsteps: usize = 1000;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let p1 = bezier.eval(t);
            let p2 = bezier.eval_casteljau(t);
            let err = p2 - p1;
            assert!(err.squared_length() < EPSILON);
        }
    }

    #[test]
    fn eval_endpoints_exact() {
        let bezier = CubicBezier::new(
            PointN::new([100.0, 100.0]),
            PointN::new([100.0, 300.0]),
            PointN::new([300.0, 300.0]),
            PointN::new([300.0, 100.0]),
        );

        // the endpoint weights collapse to 1, no approximation error allowed
        assert_eq!(bezier.eval(0.0), PointN::new([100.0, 100.0]));
        assert_eq!(bezier.eval(1.0), PointN::new([300.0, 100.0]));
    }

    #[test]
    fn degenerate_curve_of_coincident_points() {
        let p = PointN::new([1.5f64, -3.25f64]);
        let bezier = CubicBezier::new(p, p, p, p);

        let nsteps: usize = 100;
        for t in 0..=nsteps {
            let t = t as f64 * 1f64 / (nsteps as f64);
            let err = bezier.eval(t) - p;
            assert!(err.squared_length() < EPSILON);
            let err = bezier.eval_casteljau(t) - p;
            assert!(err.squared_length() < EPSILON);
        }
    }
}
