use thiserror::Error;

use super::NativeFloat;

/// Errors that can occur while evaluating or rendering a curve.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// An empty control point sequence was handed to the evaluator.
    /// Zero points define no curve, not even a degenerate one.
    #[error("empty control point sequence defines no curve")]
    EmptyControlPoints,

    /// A raster write, or one of the four candidate pixels of a splat,
    /// landed outside the canvas. Nothing is written for the failing sample.
    #[error("pixel ({x}, {y}) outside canvas bounds {width}x{height}")]
    PixelOutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// The sampling step must lie in `(0, 1]`.
    #[error("sampling step {0} outside (0, 1]")]
    StepOutOfRange(NativeFloat),

    /// Both rasterization strategies were mapped to the same buffer channel,
    /// which would let their output interfere.
    #[error("both curve channels map to buffer channel {0}")]
    ChannelCollision(usize),

    /// A curve channel was mapped past the canvas channel count.
    #[error("channel {channel} out of range for a canvas with {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },
}
