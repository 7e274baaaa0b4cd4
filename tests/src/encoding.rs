use int_geometry::error::Error;
use int_geometry::prelude::*;
use serde::{Deserialize, Serialize};
use test_log::test;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Layout {
    name: String,
    bounds: Rect,
    anchors: Vec<Point>,
}

#[test]
fn values_round_trip_through_json() {
    let layout = Layout {
        name: "panel".to_string(),
        bounds: Rect::from_xywh(-3, 4, 10, 0),
        anchors: vec![Point::zero(), Point::new(i64::MIN, i64::MAX)],
    };
    let json = serde_json::to_string(&layout).unwrap();
    let decoded: Layout = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, layout);
}

#[test]
fn encoding_keeps_field_names() {
    let json = serde_json::to_value(Rect::from_xywh(1, 2, 3, 4)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "origin": { "x": 1, "y": 2 },
            "size": { "width": 3, "height": 4 }
        })
    );
}

#[test]
fn decoding_negative_sizes_fails() {
    let err = serde_json::from_value::<Size>(serde_json::json!({ "width": -1, "height": 0 }))
        .unwrap_err();
    assert_eq!(err.to_string(), Error::NegativeWidth(-1).to_string());

    let bad_rect = serde_json::json!({
        "origin": { "x": 0, "y": 0 },
        "size": { "width": 1, "height": -8 }
    });
    assert!(serde_json::from_value::<Rect>(bad_rect).is_err());
}
