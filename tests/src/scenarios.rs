use int_geometry::prelude::*;
use test_log::test;

#[test]
fn overlapping_rects_intersect_in_a_square() {
    let r1 = Rect::from_xywh(0, 0, 4, 3);
    let r2 = Rect::from_xywh(2, 1, 4, 4);
    assert_eq!(r1.intersection(r2), Some(Rect::from_xywh(2, 1, 2, 2)));
    assert!(r1.intersects(r2));
}

#[test]
fn touching_rects_have_an_empty_intersection() {
    let r1 = Rect::from_xywh(0, 0, 2, 2);
    let r2 = Rect::from_xywh(2, 0, 2, 2);
    let i = r1.intersection(r2);
    assert_eq!(i, Some(Rect::from_xywh(2, 0, 0, 2)));
    assert!(i.is_some_and(|i| i.is_empty()));
    assert!(!r1.intersects(r2));
}

#[test]
fn inset_to_zero_and_past_zero() {
    let rect = Rect::from_xywh(0, 0, 2, 2);
    assert_eq!(rect.inset_by(1, 1), Some(Rect::from_xywh(1, 1, 0, 0)));
    assert_eq!(rect.inset_by(2, 2), None);
}

#[test]
fn contains_uses_inclusive_min_and_exclusive_max() {
    let rect = Rect::from_xywh(0, 0, 3, 2);
    assert!(rect.contains(&Point::new(2, 1)));
    assert!(!rect.contains(&Point::new(3, 1)));
    assert!(!rect.contains(&Point::new(0, 2)));
}

#[test]
fn bounding_box_of_mixed_shapes() {
    let shapes = (
        Rect::from_xywh(0, 0, 4, 3),
        Point::new(-2, 10),
        vec![Rect::from_xywh(5, 5, 1, 1), Rect::from_xywh(7, -1, 0, 0)],
    );
    assert_eq!(shapes.bbox(), Some(Rect::from_xywh(-2, -1, 9, 11)));
}

#[test]
fn translated_cells_follow_the_rect() {
    let rect = Rect::from_xywh(0, 0, 2, 2);
    let moved: Vec<Point> = rect.cells().map(|p| p.translate(Point::new(3, 4))).collect();
    let expected: Vec<Point> = rect.offset_by(3, 4).cells().collect();
    assert_eq!(moved, expected);
}
