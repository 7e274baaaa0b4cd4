use int_geometry::prelude::*;
use test_log::test;

use crate::shared::{sample_points, sample_rects};

#[test]
fn union_and_intersection_are_idempotent() {
    for r in sample_rects() {
        assert_eq!(r.union(r), r);
        assert_eq!(r.intersection(r), Some(r));
    }
}

#[test]
fn union_and_intersection_are_commutative() {
    let rects = sample_rects();
    for &r1 in &rects {
        for &r2 in &rects {
            assert_eq!(r1.union(r2), r2.union(r1));
            assert_eq!(r1.intersection(r2), r2.intersection(r1));
        }
    }
}

#[test]
fn union_contains_both_operands() {
    let rects = sample_rects();
    for &r1 in &rects {
        for &r2 in &rects {
            let u = r1.union(r2);
            assert!(u.contains(&r1), "{u:?} should contain {r1:?}");
            assert!(u.contains(&r2), "{u:?} should contain {r2:?}");
        }
    }
}

#[test]
fn contains_rect_is_union_equality() {
    let rects = sample_rects();
    for &r1 in &rects {
        for &r2 in &rects {
            assert_eq!(r1.contains(&r2), r1.union(r2) == r1);
        }
    }
}

#[test]
fn intersects_matches_non_empty_intersection() {
    let rects = sample_rects();
    for &r1 in &rects {
        for &r2 in &rects {
            let expected = match r1.intersection(r2) {
                Some(i) => !i.is_empty(),
                None => false,
            };
            assert_eq!(r1.intersects(r2), expected);
        }
    }
}

#[test]
fn intersection_holds_exactly_the_shared_points() {
    let rects = sample_rects();
    let points = sample_points();
    for &r1 in &rects {
        for &r2 in &rects {
            let i = r1.intersection(r2);
            for p in &points {
                let in_both = r1.contains(p) && r2.contains(p);
                let in_intersection = i.is_some_and(|i| i.contains(p));
                assert_eq!(in_both, in_intersection, "{r1:?} ∩ {r2:?} at {p:?}");
            }
        }
    }
}

#[test]
fn equal_corners_give_an_empty_rect() {
    for p in sample_points() {
        let rect = Rect::from_corners(p, p);
        assert_eq!(rect.size, Size::zero());
        assert!(rect.is_empty());
        assert!(!rect.contains(&p));
        assert_eq!(rect.cells().count(), 0);
    }
}

#[test]
fn iteration_matches_indexed_access() {
    for r in sample_rects() {
        let cells: Vec<Point> = r.cells().collect();
        assert_eq!(cells.len() as i64, r.width() * r.height());
        assert_eq!(cells.len(), r.cell_count());
        for (i, p) in cells.iter().enumerate() {
            assert_eq!(r.point_at(i), *p);
            assert!(r.contains(p));
        }
        let reversed: Vec<Point> = r.cells().rev().collect();
        assert!(reversed.iter().eq(cells.iter().rev()));
    }
}

#[test]
fn iteration_visits_every_contained_point_once() {
    let points = sample_points();
    for r in sample_rects() {
        let cells: Vec<Point> = r.cells().collect();
        for p in &points {
            let hits = cells.iter().filter(|c| *c == p).count();
            assert_eq!(hits, usize::from(r.contains(p)), "{r:?} at {p:?}");
        }
    }
}

#[test]
fn inset_then_outset_round_trips() {
    for r in sample_rects() {
        for dx in -2..=2 {
            for dy in -2..=2 {
                if let Some(inset) = r.inset_by(dx, dy) {
                    assert_eq!(inset.inset_by(-dx, -dy), Some(r));
                }
            }
        }
    }
}

#[test]
fn offset_preserves_size() {
    for r in sample_rects() {
        let moved = r.offset_by(5, -9);
        assert_eq!(moved.size, r.size);
        assert_eq!(moved.min_point(), r.min_point().offset_by(5, -9));
        assert_eq!(moved.max_point(), r.max_point().offset_by(5, -9));
    }
}
