//! Pre-create, pre-update and refresh flow

use crate::test_utils::{flags_of, hooks, with_flags, MODULE};
use drawflags::{FlipAxis, GridState, GridType, Payload};
use serde_json::json;

#[test]
fn create_then_update() {
    let hooks = hooks();

    let mut source = with_flags(json!({
        "textStyle": {"fill": "#ff0000", "stroke": null},
        "lineStyle": {"dash": null}
    }));
    source["x"] = json!(10);

    let update = hooks.pre_create(source).unwrap();
    assert_eq!(update["x"], 10);
    assert_eq!(
        flags_of(&update),
        &json!({
            "textStyle": {"fill": ["#ff0000"], "-=stroke": null},
            "lineStyle": {"-=dash": null}
        })
    );

    let mut changes = with_flags(json!({"textStyle": {"fill": "#00ff00"}}));
    hooks.pre_update(&mut changes).unwrap();
    assert_eq!(flags_of(&changes), &json!({"textStyle": {"fill": ["#00ff00"]}}));
    assert!(hooks.needs_refresh(true, &changes));
}

#[test]
fn module_flag_deletion_survives_update_and_refreshes() {
    let hooks = hooks();
    let mut changes = Payload::from_value(json!({"flags": {format!("-={}", MODULE): null}}));
    hooks.pre_update(&mut changes).unwrap();

    assert!(hooks.needs_refresh(true, &changes));
    assert_eq!(
        changes.into_inner(),
        json!({"flags": {format!("-={}", MODULE): null}})
    );
}

#[test]
fn unrelated_update_does_not_refresh() {
    let hooks = hooks();
    let changes = Payload::from_value(json!({"x": 10, "y": 20}));
    assert!(!hooks.needs_refresh(true, &changes));
    assert!(!hooks.needs_refresh(false, &with_flags(json!({"invisible": true}))));
}

#[test]
fn grid_precision_through_facade() {
    let hooks = hooks();
    let square = GridState {
        grid_type: GridType::Square,
        size: 100,
        force_snap: false,
    };
    assert_eq!(hooks.grid_precision(&square), 8);
    assert_eq!(
        hooks.grid_precision(&GridState {
            force_snap: true,
            grid_type: GridType::HexEvenQ,
            ..square
        }),
        5
    );
}

#[test]
fn flip_polygon_then_unlock_guard() {
    let hooks = hooks();
    let mut drawing = Payload::from_value(json!({
        "locked": true,
        "shape": {"type": "p", "width": 200, "height": 80, "points": [0, 0, 200, 40, 50, 80]}
    }));
    assert!(hooks.flip_points(&drawing, FlipAxis::Horizontal).is_none());

    drawing["locked"] = json!(false);
    let update = hooks.flip_points(&drawing, FlipAxis::Horizontal).unwrap();
    assert_eq!(update["shape"]["points"], json!([200, 0, 0, 40, 150, 80]));

    drawing["shape"]["points"] = update["shape"]["points"].clone();
    let update = hooks.flip_points(&drawing, FlipAxis::Vertical).unwrap();
    assert_eq!(update["shape"]["points"], json!([200, 80, 0, 40, 150, 0]));
}
