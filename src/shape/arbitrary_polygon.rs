use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{open_chain_length, signed_area, zip_points};
use crate::math::Point2;

use super::Shape;

/// A simple polygon given by its vertices in boundary order.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % n`. Self-intersection is
/// not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ArbitraryPolygon {
    vertices: Vec<Point2>,
}

impl ArbitraryPolygon {
    /// Creates a polygon from parallel x and y coordinate slices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if the slices differ in
    /// length or hold fewer than 3 coordinates.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(too_few_vertices());
        }
        Self::from_points(zip_points(xs, ys))
    }

    /// Creates a polygon from a list of vertices.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if fewer than 3 vertices
    /// are given.
    pub fn from_points(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(too_few_vertices());
        }
        Ok(Self { vertices })
    }

    /// Returns the vertices in boundary order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Returns the signed area: positive for counter-clockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }
}

fn too_few_vertices() -> GeometryError {
    GeometryError::invalid("Enter at least 3 vertices")
}

impl Shape for ArbitraryPolygon {
    fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Sums the edges from the first vertex to the last. The closing edge
    /// back to the first vertex is not included.
    fn perimeter(&self) -> Result<f64> {
        let perimeter = open_chain_length(&self.vertices);
        if perimeter <= 0.0 {
            return Err(GeometryError::invalid("Enter valid vertices"));
        }
        Ok(perimeter)
    }
}
