use tracing::debug;

use crate::error::{ComputeError, ParseFailure};
use crate::shape::{ArbitraryPolygon, Shape};
use crate::solid::Prism;

use super::{parse_field, Report};

/// Measures an arbitrary polygon and its prism from raw text fields.
///
/// Each vertex is an `(x, y)` pair of text cells.
#[derive(Debug, Clone, Copy)]
pub struct ComputeArbitrary<'a> {
    height: &'a str,
    vertices: &'a [(&'a str, &'a str)],
}

impl<'a> ComputeArbitrary<'a> {
    /// Creates a new `ComputeArbitrary` request.
    #[must_use]
    pub fn new(height: &'a str, vertices: &'a [(&'a str, &'a str)]) -> Self {
        Self { height, vertices }
    }

    /// Parses the fields, builds the polygon and prism, and measures them.
    ///
    /// The height is parsed first, then the vertices in order.
    ///
    /// # Errors
    ///
    /// Returns [`ComputeError::Parse`] if any cell is not a number, or
    /// [`ComputeError::Invalid`] if the polygon or prism is rejected or the
    /// perimeter is degenerate.
    pub fn execute(&self) -> Result<Report, ComputeError> {
        let failure = ParseFailure::VertexInput;
        let height: f64 = parse_field(self.height, failure)?;

        let mut xs = Vec::with_capacity(self.vertices.len());
        let mut ys = Vec::with_capacity(self.vertices.len());
        for &(x, y) in self.vertices {
            xs.push(parse_field::<f64>(x, failure)?);
            ys.push(parse_field::<f64>(y, failure)?);
        }
        debug!(vertices = xs.len(), height, "computing arbitrary polygon");

        let polygon = ArbitraryPolygon::new(&xs, &ys)?;
        let prism = Prism::from_shape(&polygon, height)?;

        Ok(Report {
            area: polygon.area(),
            perimeter: polygon.perimeter()?,
            volume: prism.volume(),
        })
    }
}
