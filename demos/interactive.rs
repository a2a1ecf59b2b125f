//! Click four control points, get the curve.
//!
//! Left-click places a control point (up to four) and draws a white marker.
//! The fourth click renders the naive curve to the red channel and the
//! anti-aliased curve to the green channel, then saves the frame as
//! `my_bezier_curve.png`. Escape or closing the window quits.

extern crate daub;
use daub::{render_curve, Canvas, CubicBezier, Point, Point2, PointN, RenderOptions};

use image::{ImageBuffer, Rgb};
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

const WIDTH: usize = 700;
const HEIGHT: usize = 700;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut window = Window::new(
        "bezier curve - click 4 control points",
        WIDTH,
        HEIGHT,
        WindowOptions::default(),
    )?;

    let mut canvas: Canvas<3> = Canvas::new(WIDTH, HEIGHT);
    let mut frame = vec![0u32; WIDTH * HEIGHT];
    let mut clicks: Vec<Point2> = Vec::with_capacity(4);
    let mut was_down = false;
    let mut rendered = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        // edge-detect the button so one click is one control point
        let down = window.get_mouse_down(MouseButton::Left);
        if down && !was_down && clicks.len() < 4 {
            if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Clamp) {
                println!("control point {} at ({:.0}, {:.0})", clicks.len(), mx, my);
                let point = PointN::new([mx as f64, my as f64]);
                clicks.push(point);
                dot(&mut canvas, point, 3);
            }
        }
        was_down = down;

        // the control point set is complete, hand it off by value
        if clicks.len() == 4 && !rendered {
            let curve = CubicBezier::new(clicks[0], clicks[1], clicks[2], clicks[3]);
            match render_curve(curve, &mut canvas, &RenderOptions::default()) {
                Ok(()) => {
                    save_png(&canvas)?;
                    println!("wrote my_bezier_curve.png");
                }
                Err(e) => eprintln!("render failed: {e}"),
            }
            rendered = true;
        }

        pack_frame(&canvas, &mut frame);
        window.update_with_buffer(&frame, WIDTH, HEIGHT)?;
    }
    Ok(())
}

/// Pack the canvas channels into minifb's 0x00RRGGBB pixel format.
fn pack_frame(canvas: &Canvas<3>, frame: &mut [u32]) {
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let r = canvas.get(x, y, 0) as u32;
            let g = canvas.get(x, y, 1) as u32;
            let b = canvas.get(x, y, 2) as u32;
            frame[y * WIDTH + x] = (r << 16) | (g << 8) | b;
        }
    }
}

/// White filled marker dot across all channels, clipped to the canvas.
fn dot(canvas: &mut Canvas<3>, point: Point2, radius: i32) {
    let px = point.axis(0).round() as i32;
    let py = point.axis(1).round() as i32;
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

fn save_png(canvas: &Canvas<3>) -> Result<(), image::ImageError> {
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(WIDTH as u32, HEIGHT as u32, |x, y| {
            let (x, y) = (x as usize, y as usize);
            Rgb([canvas.get(x, y, 0), canvas.get(x, y, 1), canvas.get(x, y, 2)])
        });
    image.save("my_bezier_curve.png")
}
