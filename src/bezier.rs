use tinyvec::TinyVec;

use super::*;
use crate::error::Error;
use crate::point::Point;
use crate::spline::Spline;

/// Control point count up to which slice evaluation stays on the stack.
/// Longer sequences spill the scratch buffer to the heap.
const INLINE_POINTS: usize = 8;

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by an array of 'control_points'. The degree is defined as degree = control_points.len() - 1.
/// Points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1] using the eval() method.
/// Generic parameters:
/// P: Generic points 'P' as defined by the Point trait
/// const generic parameters:
/// N: Number of control points (N >= 1)
#[derive(Clone, Copy, Debug)]
pub struct Bezier<P, const N: usize>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: [P; N],
}

/// The point-reduction strategy: sampling runs iterative de Casteljau.
impl<P, const N: usize> Spline<P> for Bezier<P, N>
where
    P: Point,
{
    fn eval(&self, t: NativeFloat) -> P {
        self.eval(t)
    }
}

impl<P, const N: usize> Bezier<P, N>
where
    P: Point,
{
    /// Create a new Bezier curve that interpolates the `control_points`.
    /// The degree is defined as degree = control_points.len() - 1.
    pub fn new(control_points: [P; N]) -> Bezier<P, N> {
        Bezier { control_points }
    }

    pub fn control_points(&self) -> [P; N] {
        self.control_points
    }

    /// Evaluate a point on the curve at 't' which should be in the interval [0,1]
    /// (outside of it the curve is extrapolated).
    /// This is implemented using De Casteljau's algorithm, iteratively reducing
    /// a copy of the control points in place until one point remains.
    pub fn eval(&self, t: NativeFloat) -> P {
        // start with a copy of the original control points array and successively use it for the reduction
        let mut p: [P; N] = self.control_points;
        reduce_in_place(&mut p, t)
    }
}

/// Evaluate a Bezier curve given by a slice of control points at 't' using
/// De Casteljau's algorithm. The slice is copied once into a scratch buffer
/// which is then reduced in place, so no buffer is allocated per reduction
/// level and the input is left untouched.
///
/// This is the runtime-degree counterpart to [`Bezier::eval`] for callers
/// whose control point count is not known at compile time.
///
/// # Errors
///
/// [`Error::EmptyControlPoints`] if `points` is empty, which defines no curve.
pub fn de_casteljau<P: Point>(points: &[P], t: NativeFloat) -> Result<P, Error> {
    if points.is_empty() {
        return Err(Error::EmptyControlPoints);
    }
    let mut scratch: TinyVec<[P; INLINE_POINTS]> = TinyVec::default();
    scratch.extend_from_slice(points);
    Ok(reduce_in_place(&mut scratch, t))
}

/// One full de Casteljau reduction over `points`, in place. Level by level,
/// each point is replaced by its interpolation towards the next point until
/// only `points[0]` is left holding the curve point at `t`.
pub(crate) fn reduce_in_place<P: Point>(points: &mut [P], t: NativeFloat) -> P {
    debug_assert!(!points.is_empty());
    // loop up to degree = points.len() - 1
    for i in 1..=points.len() {
        for j in 0..points.len() - i {
            points[j] = points[j] + (points[j + 1] - points[j]) * t;
        }
    }
    points[0]
}
