mod arbitrary_polygon;
mod regular_polygon;

pub use arbitrary_polygon::ArbitraryPolygon;
pub use regular_polygon::RegularPolygon;

use crate::error::Result;

/// Trait for closed planar shapes that can be measured.
pub trait Shape {
    /// Returns the enclosed area.
    fn area(&self) -> f64;

    /// Returns the boundary length.
    ///
    /// # Errors
    ///
    /// Returns an error if the boundary is degenerate.
    fn perimeter(&self) -> Result<f64>;
}
