use super::{Point2, Vector2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Every vertex contributes, including the closing pair `(last, first)`.
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sums the Euclidean lengths of the segments joining consecutive points.
///
/// The chain is open: no segment from the last point back to the first.
#[must_use]
pub fn open_chain_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|pair| {
            let edge: Vector2 = pair[1] - pair[0];
            edge.norm()
        })
        .sum()
}

/// Builds points from parallel coordinate slices, pairing them by index.
///
/// Extra coordinates in the longer slice are ignored.
#[must_use]
pub fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<Point2> {
    xs.iter()
        .zip(ys)
        .map(|(&x, &y)| Point2::new(x, y))
        .collect()
}
