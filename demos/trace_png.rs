//! Headless render of a reference curve to a PNG.
//!
//! Draws the naive curve into the red channel and the anti-aliased curve
//! into the green channel of a 700x700 canvas, marks the four control points
//! with white dots and writes `bezier_curve.png` into the working directory.
//!
//! Run with `RUST_LOG=debug` to see the sampling stats.

extern crate daub;
use daub::{render_curve, Canvas, CubicBezier, Point, PointN, RenderOptions};

use image::{ImageBuffer, Rgb};

const WIDTH: usize = 700;
const HEIGHT: usize = 700;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let curve = CubicBezier::new(
        PointN::new([100.0, 100.0]),
        PointN::new([100.0, 300.0]),
        PointN::new([300.0, 300.0]),
        PointN::new([300.0, 100.0]),
    );

    let mut canvas: Canvas<3> = Canvas::new(WIDTH, HEIGHT);
    render_curve(curve, &mut canvas, &RenderOptions::default())?;
    for point in curve.control_points() {
        dot(&mut canvas, point.axis(0), point.axis(1), 3);
    }

    // the logical channels become RGB only here, at the edge
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(WIDTH as u32, HEIGHT as u32, |x, y| {
            let (x, y) = (x as usize, y as usize);
            Rgb([canvas.get(x, y, 0), canvas.get(x, y, 1), canvas.get(x, y, 2)])
        });
    image.save("bezier_curve.png")?;
    println!("wrote bezier_curve.png");
    Ok(())
}

/// White filled marker dot across all channels, clipped to the canvas.
fn dot(canvas: &mut Canvas<3>, cx: f64, cy: f64, radius: i32) {
    let px = cx.round() as i32;
    let py = cy.round() as i32;
    for y in py - radius..=py + radius {
        for x in px - radius..=px + radius {
            let (dx, dy) = (x - px, y - py);
            if dx * dx + dy * dy <= radius * radius && canvas.contains(x, y) {
                for channel in 0..3 {
                    canvas.put(x as usize, y as usize, channel, 255);
                }
            }
        }
    }
}
