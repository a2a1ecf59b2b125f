use core::ops::{Add, Mul, Sub};

use super::NativeFloat;

/// Trait defined over generic N-dimensional points P.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<NativeFloat, Output = Self>
    + Copy
    + Default
    + PartialEq
{
    /// Number of coordinate axes of the point
    const DIM: usize;

    /// Returns the component of the Point on the axis corresponding to index e.g. [0, 1, 2] -> [x, y, z]
    fn axis(&self, index: usize) -> NativeFloat;

    /// Returns the squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> NativeFloat;
}
