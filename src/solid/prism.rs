use crate::error::{GeometryError, Result};
use crate::shape::Shape;

/// A right prism: a planar base extruded straight up by `height`.
///
/// Only the base area is kept, copied out of the shape it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prism {
    base_area: f64,
    height: f64,
}

impl Prism {
    /// Creates a new prism.
    ///
    /// The base area is taken as given.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `height` is negative.
    pub fn new(base_area: f64, height: f64) -> Result<Self> {
        if height < 0.0 {
            return Err(GeometryError::invalid("Height cannot be negative"));
        }
        Ok(Self { base_area, height })
    }

    /// Creates a prism whose base is `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `height` is negative.
    pub fn from_shape(shape: &dyn Shape, height: f64) -> Result<Self> {
        Self::new(shape.area(), height)
    }

    /// Returns the base area.
    #[must_use]
    pub fn base_area(&self) -> f64 {
        self.base_area
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns `base_area * height`.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.base_area * self.height
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shape::{ArbitraryPolygon, RegularPolygon};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn square_base_volume() {
        let prism = Prism::new(16.0, 3.0).unwrap();
        assert_relative_eq!(prism.volume(), 48.0);
        assert_relative_eq!(prism.base_area(), 16.0);
        assert_relative_eq!(prism.height(), 3.0);
    }

    #[test]
    fn zero_height_is_flat() {
        assert!(Prism::new(10.0, 0.0).unwrap().volume().abs() < f64::EPSILON);
    }

    #[test]
    fn base_area_is_not_validated() {
        let prism = Prism::new(-2.0, 5.0).unwrap();
        assert_relative_eq!(prism.volume(), -10.0);
    }

    #[test]
    fn from_regular_polygon() {
        let square = RegularPolygon::new(4, 2.0).unwrap();
        let prism = Prism::from_shape(&square, 2.5).unwrap();
        assert_relative_eq!(prism.volume(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn from_arbitrary_polygon() {
        let square =
            ArbitraryPolygon::new(&[0.0, 4.0, 4.0, 0.0], &[0.0, 0.0, 4.0, 4.0]).unwrap();
        let prism = Prism::from_shape(&square, 3.0).unwrap();
        assert_relative_eq!(prism.volume(), 48.0);
    }

    proptest! {
        #[test]
        fn negative_height_always_rejected(base in any::<f64>(), height in -1.0e9..-1.0e-9_f64) {
            let err = Prism::new(base, height).unwrap_err();
            prop_assert_eq!(err.to_string(), "Height cannot be negative");
        }
    }
}
