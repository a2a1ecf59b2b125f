/// canvas.rs
/// Fixed-size pixel buffer with `C` interleaved intensity channels per pixel.
/// The buffer itself knows nothing about curves or colors; the render layer
/// maps meaning (which strategy writes where) onto the channels and the demo
/// programs map the channels onto RGB at the very edge.
#[derive(Debug, Clone)]
pub struct Canvas<const C: usize> {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl<const C: usize> Canvas<C> {
    /// Creates a zero-filled (all black) canvas.
    /// The backing buffer is allocated once and never grows.
    pub fn new(width: usize, height: usize) -> Self {
        Canvas {
            width,
            height,
            data: vec![0; width * height * C],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of channels per pixel.
    pub const fn channels(&self) -> usize {
        C
    }

    /// Whether a candidate pixel index lies inside the canvas.
    /// Callers working with signed indices check this before converting.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn offset(&self, x: usize, y: usize, channel: usize) -> usize {
        assert!(
            x < self.width && y < self.height && channel < C,
            "pixel access ({}, {}, ch {}) outside canvas {}x{}x{}",
            x,
            y,
            channel,
            self.width,
            self.height,
            C
        );
        (y * self.width + x) * C + channel
    }

    /// Read one channel of one pixel.
    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[self.offset(x, y, channel)]
    }

    /// Write one channel of one pixel.
    pub fn put(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        let i = self.offset(x, y, channel);
        self.data[i] = value;
    }

    /// The raw interleaved bytes in row-major order, for display or export.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_then_get_roundtrip() {
        let mut canvas: Canvas<3> = Canvas::new(4, 2);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.channels(), 3);
        assert_eq!(canvas.data().len(), 4 * 2 * 3);

        canvas.put(3, 1, 2, 200);
        assert_eq!(canvas.get(3, 1, 2), 200);
        // interleaved layout puts that value in the very last byte
        assert_eq!(canvas.data()[4 * 2 * 3 - 1], 200);
    }

    #[test]
    fn starts_black() {
        let canvas: Canvas<2> = Canvas::new(3, 3);
        assert!(canvas.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn contains_covers_the_half_open_index_ranges() {
        let canvas: Canvas<1> = Canvas::new(8, 4);
        assert!(canvas.contains(0, 0));
        assert!(canvas.contains(7, 3));
        assert!(!canvas.contains(8, 3));
        assert!(!canvas.contains(7, 4));
        assert!(!canvas.contains(-1, 0));
        assert!(!canvas.contains(0, -1));
    }
}
