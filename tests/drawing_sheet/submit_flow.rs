//! Sheet submit flow

use crate::test_utils::{flags_of, hooks, with_flags};
use drawflags::{stringify_value, SubmitContext};
use serde_json::json;

#[test]
fn full_form_submit() {
    let hooks = hooks();
    let form = with_flags(json!({
        "invisible": false,
        "lineStyle": {"dash": ["6", "2"], "dashEnabled": true},
        "fillStyle": {
            "texture": {"width": " 50 % ", "height": "200px"},
            "transform": {
                "position": {"x": "0px", "y": "0px"},
                "pivot": {"x": "50%", "y": "50%"},
                "scale": {"x": 1, "y": 1},
                "rotation": 0
            }
        },
        "textStyle": {
            "fontStyle": "italic",
            "wordWrapWidth": "",
            "fill": ["#ffffff", "#000000"],
            "fillGradientStops": [null, 0.25]
        }
    }));

    let data = hooks
        .prepare_submit_data(&SubmitContext::drawing(true), form)
        .unwrap();
    let flags = flags_of(&data);

    assert_eq!(flags["invisible"], false);
    assert_eq!(flags["lineStyle"], json!({"dash": [6, 2], "dashEnabled": true}));
    assert_eq!(
        flags["fillStyle"],
        json!({
            "texture": {"width": "50%", "height": 200},
            "transform": {
                "position": {"x": 0, "y": 0},
                "pivot": {"x": "50%", "y": "50%"},
                "scale": {"x": 1, "y": 1},
                "rotation": 0
            }
        })
    );
    assert_eq!(
        flags["textStyle"],
        json!({
            "fontStyle": "italic",
            "-=wordWrapWidth": null,
            "fill": ["#ffffff", "#000000"],
            "fillGradientStops": [null, 0.25]
        })
    );
}

#[test]
fn submitted_measures_render_back_into_the_form() {
    let hooks = hooks();
    let form = with_flags(json!({"fillStyle": {"texture": {"width": "64", "height": "25%"}}}));
    let data = hooks
        .prepare_submit_data(&SubmitContext::drawing(false), form)
        .unwrap();
    let texture = &flags_of(&data)["fillStyle"]["texture"];

    assert_eq!(stringify_value(texture.get("width")).as_deref(), Some("64px"));
    assert_eq!(stringify_value(texture.get("height")).as_deref(), Some("25%"));
}

#[test]
fn resubmitting_is_stable() {
    let hooks = hooks();
    let form = with_flags(json!({
        "textStyle": {"fill": "#123456", "fillGradientStops": 0},
        "fillStyle": {"texture": {"width": "10px"}}
    }));
    let once = hooks
        .prepare_submit_data(&SubmitContext::drawing(true), form)
        .unwrap();
    let twice = hooks
        .prepare_submit_data(&SubmitContext::drawing(true), once.clone())
        .unwrap();

    assert_eq!(flags_of(&once)["textStyle"]["fill"], json!(["#123456"]));
    assert_eq!(flags_of(&once)["textStyle"]["fillGradientStops"], json!([0]));
    assert_eq!(once, twice);
}
