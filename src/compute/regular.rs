use tracing::debug;

use crate::error::{ComputeError, ParseFailure};
use crate::shape::{RegularPolygon, Shape};
use crate::solid::Prism;

use super::{parse_field, Report};

/// Measures a regular polygon and its prism from raw text fields.
#[derive(Debug, Clone, Copy)]
pub struct ComputeRegular<'a> {
    sides: &'a str,
    side_length: &'a str,
    height: &'a str,
}

impl<'a> ComputeRegular<'a> {
    /// Creates a new `ComputeRegular` request.
    #[must_use]
    pub fn new(sides: &'a str, side_length: &'a str, height: &'a str) -> Self {
        Self {
            sides,
            side_length,
            height,
        }
    }

    /// Parses the fields, builds the polygon and prism, and measures them.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::Parse`] if a field is not a number, or
    /// [`ComputeError::Invalid`] if the polygon or prism is rejected.
    pub fn execute(&self) -> Result<Report, ComputeError> {
        let failure = ParseFailure::RegularInput;
        let sides: i32 = parse_field(self.sides, failure)?;
        let side_length: f64 = parse_field(self.side_length, failure)?;
        let height: f64 = parse_field(self.height, failure)?;
        debug!(sides, side_length, height, "computing regular polygon");

        let polygon = RegularPolygon::new(sides, side_length)?;
        let prism = Prism::from_shape(&polygon, height)?;

        Ok(Report {
            area: polygon.area(),
            perimeter: polygon.perimeter()?,
            volume: prism.volume(),
        })
    }
}
