//! Sample values shared by the integration tests.

use int_geometry::prelude::*;

/// Returns a grid of rectangles covering the interesting relative positions:
/// overlapping, nested, touching, disjoint, and empty in either dimension.
pub fn sample_rects() -> Vec<Rect> {
    let mut rects = Vec::new();
    for x in [-3, 0, 2] {
        for y in [-1, 0, 3] {
            for (w, h) in [(0, 0), (0, 2), (3, 0), (1, 1), (2, 3), (4, 4)] {
                rects.push(Rect::from_xywh(x, y, w, h));
            }
        }
    }
    rects
}

/// Returns a set of points around and inside the sample rectangles.
pub fn sample_points() -> Vec<Point> {
    let mut points = Vec::new();
    for x in -4..=7 {
        for y in -2..=8 {
            points.push(Point::new(x, y));
        }
    }
    points
}
