use super::NativeFloat;
use super::Point;

/// spline.rs
/// Trait for common abstractions over curve types that can be sampled by a
/// parameter `t`. The render pass is written against this seam, so each
/// rasterization strategy plugs in its own evaluator: [`crate::CubicBezier`]
/// evaluates the closed-form Bernstein polynomial, [`crate::Bezier`] runs
/// iterative de Casteljau point reduction.
pub trait Spline<P: Point> {
    fn eval(&self, t: NativeFloat) -> P;
}
