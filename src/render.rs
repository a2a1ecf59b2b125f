use super::*;
use crate::bezier::Bezier;
use crate::canvas::Canvas;
use crate::cubic_bezier::CubicBezier;
use crate::error::Error;
use crate::point::Point;
use crate::raster;
use crate::spline::Spline;

/// Logical output channels of a render pass, one per rasterization strategy.
/// The crate itself never decides what color a channel is; [`ChannelMap`]
/// assigns buffer offsets to these names and display code maps them to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveChannel {
    /// Hard aliased pixels from the closed-form evaluator.
    Naive,
    /// Distance-weighted splats from the de Casteljau evaluator.
    AntiAliased,
}

/// Assignment of logical curve channels to canvas channel offsets.
#[derive(Debug, Clone, Copy)]
pub struct ChannelMap {
    naive: usize,
    anti_aliased: usize,
}

impl ChannelMap {
    pub fn new(naive: usize, anti_aliased: usize) -> Self {
        ChannelMap {
            naive,
            anti_aliased,
        }
    }

    /// The buffer channel offset assigned to `channel`.
    pub fn index(&self, channel: CurveChannel) -> usize {
        match channel {
            CurveChannel::Naive => self.naive,
            CurveChannel::AntiAliased => self.anti_aliased,
        }
    }
}

impl Default for ChannelMap {
    /// Channel 0 for the naive curve, channel 1 for the anti-aliased one.
    fn default() -> Self {
        ChannelMap::new(0, 1)
    }
}

/// Parameters of a render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Sampling step for `t`, in `(0, 1]`. The pass takes `ceil(1/step) + 1`
    /// samples, so the effective spacing is `1 / ceil(1/step)`. A smaller
    /// step trades render time for curve coverage.
    pub step: NativeFloat,
    /// Which canvas channel each strategy writes to.
    pub channels: ChannelMap,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            step: 1e-3,
            channels: ChannelMap::default(),
        }
    }
}

/// Iterator over `steps + 1` samples of a curve with `t` spaced `1/steps`
/// apart. `t` is derived by counting (`i / steps`) rather than by repeatedly
/// adding a float step, so the last sample lands exactly on `t = 1.0` and
/// the curve endpoint cannot be missed by accumulated rounding.
pub fn samples<P, S>(curve: &S, steps: usize) -> impl Iterator<Item = (NativeFloat, P)> + '_
where
    P: Point,
    S: Spline<P>,
{
    debug_assert!(steps > 0);
    (0..=steps).map(move |i| {
        let t = i as NativeFloat / steps as NativeFloat;
        (t, curve.eval(t))
    })
}

/// Render `curve` onto `canvas` with both strategies, each writing to its
/// own channel.
///
/// The naive pass evaluates the Bernstein polynomial and floors every sample
/// to a single hard pixel. The anti-aliased pass reduces the same four
/// control points with iterative de Casteljau and splats every sample over
/// its 2x2 pixel neighborhood. Both passes walk the same counted `t` values
/// over `[0, 1]` inclusive.
///
/// Sampling is uniform in `t`, not in arc length: where the curve moves fast
/// the samples spread out, and a step too coarse for the curve's size leaves
/// visible gaps in both channels. Pick the step to match the curve, or keep
/// the default.
///
/// # Errors
///
/// [`Error::StepOutOfRange`], [`Error::ChannelCollision`] and
/// [`Error::ChannelOutOfRange`] for invalid options.
/// [`Error::PixelOutOfBounds`] as soon as a sample (or one of its splat
/// candidates) leaves the canvas; pixels already written stay written.
pub fn render_curve<const C: usize>(
    curve: CubicBezier<Point2>,
    canvas: &mut Canvas<C>,
    options: &RenderOptions,
) -> Result<(), Error> {
    let naive = options.channels.index(CurveChannel::Naive);
    let anti_aliased = options.channels.index(CurveChannel::AntiAliased);
    if naive == anti_aliased {
        return Err(Error::ChannelCollision(naive));
    }
    for channel in [naive, anti_aliased] {
        if channel >= C {
            return Err(Error::ChannelOutOfRange {
                channel,
                channels: C,
            });
        }
    }
    let steps = sample_steps(options.step)?;
    log::debug!(
        "rendering cubic curve with {} samples (step {})",
        steps + 1,
        options.step
    );

    // aliased pass, closed-form evaluation
    for (_, p) in samples(&curve, steps) {
        raster::hard_pixel(p, canvas, naive)?;
    }

    // anti-aliased pass, point reduction over the same control points
    let casteljau = Bezier::new(curve.control_points());
    for (_, p) in samples(&casteljau, steps) {
        raster::splat(p, canvas, anti_aliased)?;
    }
    Ok(())
}

/// Number of counted steps for a sampling step size, erring on the side of
/// one sample too many when `1/step` is not integral.
fn sample_steps(step: NativeFloat) -> Result<usize, Error> {
    if !(step > 0.0 && step <= 1.0) {
        return Err(Error::StepOutOfRange(step));
    }
    Ok((1.0 / step).ceil() as usize)
}
