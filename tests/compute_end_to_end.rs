#![allow(clippy::unwrap_used)]

use polyprism::{
    compute, ArbitraryPolygon, ComputeArbitrary, ComputeRegular, Prism, RegularPolygon, Request,
    Shape,
};

fn regular(n: &str, l: &str, h: &str) -> String {
    match compute(&Request::Regular(ComputeRegular::new(n, l, h))) {
        Ok(report) => report.to_string(),
        Err(err) => err.to_string(),
    }
}

fn arbitrary(h: &str, vertices: &[(&str, &str)]) -> String {
    match compute(&Request::Arbitrary(ComputeArbitrary::new(h, vertices))) {
        Ok(report) => report.to_string(),
        Err(err) => err.to_string(),
    }
}

#[test]
fn regular_triangle_report_text() {
    let text = regular("3", "2", "10");
    assert_eq!(
        text,
        "Computed values:\n  Area (A):      1.732051\n  Perimeter (P): 6\n  Volume (V):    17.320508\n\nNotes:\n - Valid sides/height enforced."
    );
}

#[test]
fn arbitrary_square_report_text() {
    let text = arbitrary("3", &[("0", "0"), ("4", "0"), ("4", "4"), ("0", "4")]);
    assert_eq!(
        text,
        "Computed values:\n  Area (A):      16\n  Perimeter (P): 12\n  Volume (V):    48\n\nNotes:\n - Valid sides/height enforced."
    );
}

#[test]
fn large_values_are_grouped() {
    let text = arbitrary(
        "1000",
        &[("0", "0"), ("1000", "0"), ("1000", "1000"), ("0", "1000")],
    );
    assert!(text.contains("Area (A):      1,000,000\n"), "{text}");
    assert!(text.contains("Volume (V):    1,000,000,000\n"), "{text}");
}

#[test]
fn huge_area_prints_shortest_digits() {
    let text = regular("4", "1e12", "0");
    assert!(
        text.contains("Area (A):      1,000,000,000,000,000,100,000,000\n"),
        "{text}"
    );
}

#[test]
fn negative_zero_height_shows_signed_volume() {
    let text = arbitrary("-0", &[("0", "0"), ("4", "0"), ("4", "4"), ("0", "4")]);
    assert!(text.contains("Volume (V):    -0\n"), "{text}");
}

#[test]
fn regular_error_messages() {
    let cases = [
        ("2", "0", "Error: Number of sides must be ≥ 3 and side length must be greater than zero"),
        ("2", "-1", "Error: Number of sides must be ≥ 3 and Side length can not be a negative number"),
        ("2", "1", "Error: Number of sides must be ≥ 3"),
        ("3", "-1", "Error: Side length can not be a negative number"),
        ("3", "0", "Error: Side length must be greater than zero"),
        ("three", "1", "Error: Please enter numeric values"),
    ];
    for (n, l, expected) in cases {
        assert_eq!(regular(n, l, "1"), expected, "n={n} l={l}");
    }
}

#[test]
fn arbitrary_error_messages() {
    assert_eq!(
        arbitrary("1", &[("0", "0"), ("0", "0")]),
        "Error: Enter at least 3 vertices"
    );
    assert_eq!(
        arbitrary("1", &[("1", "1"); 3]),
        "Error: Enter valid vertices"
    );
    assert_eq!(
        arbitrary("1", &[("1", "1"), ("2", ""), ("3", "3")]),
        "Error: Check vertex coordinates and height"
    );
}

#[test]
fn core_types_compose_without_the_boundary() {
    let base = RegularPolygon::new(4, 2.0).unwrap();
    let prism = Prism::new(base.area(), 3.0).unwrap();
    assert!((prism.volume() - 12.0).abs() < 1e-12);

    let square = ArbitraryPolygon::new(&[0.0, 4.0, 4.0, 0.0], &[0.0, 0.0, 4.0, 4.0]).unwrap();
    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(base), Box::new(square)];
    let areas: Vec<f64> = shapes.iter().map(|s| s.area()).collect();
    assert!((areas[0] - 4.0).abs() < 1e-12);
    assert!((areas[1] - 16.0).abs() < 1e-12);
}
