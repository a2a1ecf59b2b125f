//! Render cubic Bézier curves onto a raster canvas, two ways at once.
//!
//! The crate evaluates curves with two competing strategies and draws each
//! into its own channel of a [`Canvas`] so their output can be compared
//! directly:
//!
//! * the closed-form Bernstein polynomial ([`CubicBezier::eval`]), written
//!   as hard aliased pixels
//! * iterative de Casteljau point reduction ([`Bezier::eval`],
//!   [`de_casteljau`]), splatted over the four nearest pixels with
//!   distance-weighted anti-aliasing
//!
//! Evaluation is generic over the point type through the small [`Point`]
//! trait and const-generic over the number of control points, so foreign
//! point types only need a thin wrapper.
//!
//! ```
//! use daub::{render_curve, Canvas, CubicBezier, PointN, RenderOptions};
//!
//! let curve = CubicBezier::new(
//!     PointN::new([100.0, 100.0]),
//!     PointN::new([100.0, 300.0]),
//!     PointN::new([300.0, 300.0]),
//!     PointN::new([300.0, 100.0]),
//! );
//! let mut canvas: Canvas<3> = Canvas::new(700, 700);
//! render_curve(curve, &mut canvas, &RenderOptions::default()).unwrap();
//! // the aliased curve starts on the first control point
//! assert_eq!(canvas.get(100, 100, 0), 255);
//! ```

pub mod bezier;
pub mod canvas;
pub mod cubic_bezier;
pub mod error;
pub mod point;
pub mod point_generic;
pub mod raster;
pub mod render;
pub mod spline;

pub use bezier::{de_casteljau, Bezier};
pub use canvas::Canvas;
pub use cubic_bezier::CubicBezier;
pub use error::Error;
pub use point::Point;
pub use point_generic::PointN;
pub use raster::{hard_pixel, nearest_pixel, splat, splat_weights};
pub use render::{render_curve, samples, ChannelMap, CurveChannel, RenderOptions};
pub use spline::Spline;

/// The coordinate scalar used throughout the crate.
pub type NativeFloat = f64;

/// A 2d point on the canvas.
pub type Point2 = PointN<NativeFloat, 2>;

/// Tolerance used when comparing evaluated points.
pub const EPSILON: NativeFloat = 1e-10;
