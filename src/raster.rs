use core::f64::consts::SQRT_2;

use super::*;
use crate::canvas::Canvas;
use crate::error::Error;

/// Highest intensity a canvas channel can hold.
pub const MAX_INTENSITY: u8 = u8::MAX;

/// Primary pixel index for one coordinate: `floor` while the fractional part
/// is below one half, `ceil` from one half up.
/// The splat neighborhood extends downward from this index, covering the two
/// pixels nearest to the coordinate on this axis.
pub fn nearest_pixel(coord: NativeFloat) -> i32 {
    let fract = coord - coord.floor();
    if fract < 0.5 {
        coord.floor() as i32
    } else {
        coord.ceil() as i32
    }
}

/// The 2x2 pixel neighborhood of a curve sample and its blend weights.
///
/// The candidates are the primary pixel `(px, py)` from [`nearest_pixel`]
/// and its lower neighbors `(px-1, py)`, `(px, py-1)`, `(px-1, py-1)`.
/// Each raw weight is `sqrt(2) - d` where `d` is the Euclidean distance from
/// the sample to the candidate's center (`index + 0.5` per axis) and
/// `sqrt(2)` is the diagonal of a unit pixel cell, so nearer candidates weigh
/// more. The returned weights are normalized to sum to one.
pub fn splat_weights(point: Point2) -> ([(i32, i32); 4], [NativeFloat; 4]) {
    let x = point.axis(0);
    let y = point.axis(1);
    let px = nearest_pixel(x);
    let py = nearest_pixel(y);
    let pixels = [(px, py), (px - 1, py), (px, py - 1), (px - 1, py - 1)];

    let mut weights = [0.0; 4];
    let mut sum = 0.0;
    for (i, (ix, iy)) in pixels.iter().enumerate() {
        let center_x = *ix as NativeFloat + 0.5;
        let center_y = *iy as NativeFloat + 0.5;
        let d = ((x - center_x) * (x - center_x) + (y - center_y) * (y - center_y)).sqrt();
        weights[i] = SQRT_2 - d;
        sum = sum + weights[i];
    }
    for w in weights.iter_mut() {
        *w = *w / sum;
    }
    (pixels, weights)
}

/// Write a curve sample as a single hard pixel (aliased).
///
/// The coordinates are floored to the containing pixel and the channel is
/// set to full intensity, so repeated writes to the same pixel are
/// idempotent.
///
/// # Errors
///
/// [`Error::PixelOutOfBounds`] if the pixel falls outside the canvas.
pub fn hard_pixel<const C: usize>(
    point: Point2,
    canvas: &mut Canvas<C>,
    channel: usize,
) -> Result<(), Error> {
    let x = point.axis(0).floor() as i32;
    let y = point.axis(1).floor() as i32;
    if !canvas.contains(x, y) {
        return Err(Error::PixelOutOfBounds {
            x,
            y,
            width: canvas.width(),
            height: canvas.height(),
        });
    }
    canvas.put(x as usize, y as usize, channel, MAX_INTENSITY);
    Ok(())
}

/// Distribute a curve sample over its 2x2 pixel neighborhood (anti-aliased).
///
/// Every candidate index is bounds-checked before anything is written, so a
/// sample whose neighborhood crosses the canvas edge fails as a whole and
/// leaves the canvas untouched.
///
/// Intensity accumulates: each candidate gains `255 * weight` on `channel`,
/// clamped at 255. Nearby samples therefore reinforce each other and a
/// well-covered pixel saturates instead of wrapping around.
///
/// # Errors
///
/// [`Error::PixelOutOfBounds`] if any of the four candidate pixels falls
/// outside the canvas.
pub fn splat<const C: usize>(
    point: Point2,
    canvas: &mut Canvas<C>,
    channel: usize,
) -> Result<(), Error> {
    let (pixels, weights) = splat_weights(point);
    for (x, y) in pixels {
        if !canvas.contains(x, y) {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: canvas.width(),
                height: canvas.height(),
            });
        }
    }
    for ((x, y), w) in pixels.into_iter().zip(weights) {
        let (x, y) = (x as usize, y as usize);
        let lit = canvas.get(x, y, channel) as NativeFloat + MAX_INTENSITY as NativeFloat * w;
        canvas.put(x, y, channel, lit.min(MAX_INTENSITY as NativeFloat) as u8);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::PointN;
    use super::*;

    #[test]
    fn nearest_pixel_floors_below_half_and_ceils_from_half() {
        assert_eq!(nearest_pixel(150.0), 150);
        assert_eq!(nearest_pixel(150.4), 150);
        assert_eq!(nearest_pixel(150.5), 151);
        assert_eq!(nearest_pixel(150.6), 151);
        // negative coordinates obey the same rule
        assert_eq!(nearest_pixel(-0.25), 0);
        assert_eq!(nearest_pixel(-0.75), -1);
    }

    #[test]
    fn neighborhood_extends_down_from_the_primary_pixel() {
        // x sits on a pixel boundary (fract 0 -> floor), y exactly on a half
        // (fract 0.5 -> ceil)
        let (pixels, _) = splat_weights(PointN::new([150.0, 150.5]));
        assert_eq!(pixels, [(150, 151), (149, 151), (150, 150), (149, 150)]);
    }

    #[test]
    fn weights_are_normalized() {
        for ix in 0..7 {
            for iy in 0..7 {
                let p = PointN::new([10.0 + ix as f64 * 0.143, 20.0 + iy as f64 * 0.143]);
                let (_, weights) = splat_weights(p);
                let sum: f64 = weights.iter().sum();
                assert!((sum - 1.0).abs() < 1e-12);
                for w in weights {
                    assert!((0.0..=1.0).contains(&w));
                }
            }
        }
    }

    #[test]
    fn corner_sample_spreads_evenly() {
        // a sample on the shared corner of four pixels is equidistant to all
        // four centers
        let (_, weights) = splat_weights(PointN::new([150.0, 150.0]));
        for w in weights {
            assert!((w - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn hard_pixel_floors_to_the_containing_pixel() {
        let mut canvas: Canvas<2> = Canvas::new(8, 8);
        hard_pixel(PointN::new([3.9, 2.1]), &mut canvas, 0).unwrap();
        assert_eq!(canvas.get(3, 2, 0), 255);
        // writing the same sample again changes nothing
        hard_pixel(PointN::new([3.9, 2.1]), &mut canvas, 0).unwrap();
        assert_eq!(canvas.get(3, 2, 0), 255);
        // the other channel is untouched
        assert_eq!(canvas.get(3, 2, 1), 0);
    }

    #[test]
    fn hard_pixel_rejects_out_of_bounds() {
        let mut canvas: Canvas<2> = Canvas::new(8, 8);
        assert_eq!(
            hard_pixel(PointN::new([8.0, 2.0]), &mut canvas, 0),
            Err(Error::PixelOutOfBounds {
                x: 8,
                y: 2,
                width: 8,
                height: 8
            })
        );
    }

    #[test]
    fn splat_gives_the_primary_pixel_the_largest_share() {
        let mut canvas: Canvas<2> = Canvas::new(16, 16);
        splat(PointN::new([5.25, 5.25]), &mut canvas, 1).unwrap();

        let primary = canvas.get(5, 5, 1);
        for (x, y) in [(4usize, 5usize), (5, 4), (4, 4)] {
            let neighbor = canvas.get(x, y, 1);
            assert!(neighbor > 0);
            assert!(primary > neighbor);
        }
        // the other channel is untouched
        assert_eq!(canvas.get(5, 5, 0), 0);
    }

    #[test]
    fn repeated_splats_saturate_at_full_intensity() {
        let mut canvas: Canvas<2> = Canvas::new(16, 16);
        for _ in 0..64 {
            splat(PointN::new([5.25, 5.25]), &mut canvas, 1).unwrap();
        }
        assert_eq!(canvas.get(5, 5, 1), 255);
        assert_eq!(canvas.get(4, 4, 1), 255);

        // one more write must clamp, not wrap
        splat(PointN::new([5.25, 5.25]), &mut canvas, 1).unwrap();
        assert_eq!(canvas.get(5, 5, 1), 255);
    }

    #[test]
    fn splat_near_the_edge_fails_without_partial_writes() {
        let mut canvas: Canvas<2> = Canvas::new(8, 8);
        // the neighborhood of x = 0.2 needs pixel -1
        let got = splat(PointN::new([0.2, 4.0]), &mut canvas, 1);
        assert!(matches!(got, Err(Error::PixelOutOfBounds { x: -1, .. })));
        assert!(canvas.data().iter().all(|&v| v == 0));
    }
}
