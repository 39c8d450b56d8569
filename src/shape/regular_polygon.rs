use std::f64::consts::PI;

use crate::error::{GeometryError, Result};

use super::Shape;

/// A polygon with `n` equal sides of equal length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    sides: i32,
    side_length: f64,
}

impl RegularPolygon {
    /// Creates a new regular polygon.
    ///
    /// Violations of both constraints at once are reported with a combined
    /// message before either single-constraint message.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `sides < 3` or
    /// `side_length` is not positive.
    #[allow(clippy::float_cmp)]
    pub fn new(sides: i32, side_length: f64) -> Result<Self> {
        let too_few = sides < 3;
        if side_length == 0.0 && too_few {
            return Err(GeometryError::invalid(
                "Number of sides must be ≥ 3 and side length must be greater than zero",
            ));
        }
        if side_length < 0.0 && too_few {
            return Err(GeometryError::invalid(
                "Number of sides must be ≥ 3 and Side length can not be a negative number",
            ));
        }
        if too_few {
            return Err(GeometryError::invalid("Number of sides must be ≥ 3"));
        }
        if side_length < 0.0 {
            return Err(GeometryError::invalid(
                "Side length can not be a negative number",
            ));
        }
        if side_length == 0.0 {
            return Err(GeometryError::invalid("Side length must be greater than zero"));
        }

        Ok(Self { sides, side_length })
    }

    /// Returns the number of sides.
    #[must_use]
    pub fn sides(&self) -> i32 {
        self.sides
    }

    /// Returns the length of each side.
    #[must_use]
    pub fn side_length(&self) -> f64 {
        self.side_length
    }
}

impl Shape for RegularPolygon {
    /// `n * L^2 / (4 * tan(pi / n))`
    fn area(&self) -> f64 {
        let n = f64::from(self.sides);
        n * self.side_length.powi(2) / (4.0 * (PI / n).tan())
    }

    fn perimeter(&self) -> Result<f64> {
        Ok(f64::from(self.sides) * self.side_length)
    }
}
