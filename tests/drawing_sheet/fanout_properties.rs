//! Property tests for the pre-save fan-out

use drawflags::{tracked_fields, Payload, PreSave};
use proptest::prelude::*;
use serde_json::{json, Value};

fn form_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        Just(json!("0")),
        Just(json!("15px")),
        Just(json!("33%")),
        Just(json!(["", "#abc"])),
        Just(json!([null, 1])),
        (0u32..4).prop_map(Value::from),
    ]
}

/// Payload with one generated value per tracked field
fn tracked_payload(values: &[Value]) -> Payload {
    let mut root = json!({});
    for (field, value) in tracked_fields().iter().zip(values) {
        let mut target = &mut root;
        let (parents, leaf) = field.path.split_leaf().unwrap();
        for segment in parents {
            target = target
                .as_object_mut()
                .unwrap()
                .entry(segment.as_str())
                .or_insert_with(|| json!({}));
        }
        target[leaf] = value.clone();
    }
    Payload::from_value(root)
}

proptest! {
    #[test]
    fn fanout_is_order_independent(
        values in prop::collection::vec(form_value(), 9),
        order in Just((0..9).collect::<Vec<usize>>()).prop_shuffle(),
    ) {
        let pre_save = PreSave::new();
        let fields = tracked_fields();

        let mut forward = tracked_payload(&values);
        pre_save.normalize_fields(&mut forward, fields).unwrap();

        let mut shuffled = tracked_payload(&values);
        pre_save
            .normalize_fields(&mut shuffled, order.iter().map(|&i| &fields[i]))
            .unwrap();

        prop_assert_eq!(forward, shuffled);
    }

    #[test]
    fn array_fields_are_arrays_or_null(values in prop::collection::vec(form_value(), 9)) {
        let mut payload = tracked_payload(&values);
        PreSave::new().normalize_fields(&mut payload, tracked_fields()).unwrap();

        for name in ["fill", "fillGradientStops"] {
            let leaf = &payload["textStyle"][name];
            prop_assert!(leaf.is_null() || leaf.is_array(), "{} = {}", name, leaf);
        }
    }

    #[test]
    fn apply_never_leaves_nulls(values in prop::collection::vec(form_value(), 9)) {
        let mut payload = tracked_payload(&values);
        PreSave::new().apply(&mut payload).unwrap();

        fn no_null_members(value: &Value) -> bool {
            match value {
                Value::Object(map) => map
                    .iter()
                    .all(|(k, v)| if k.starts_with("-=") { v.is_null() } else { !v.is_null() && no_null_members(v) }),
                _ => true,
            }
        }
        prop_assert!(no_null_members(&payload));
    }
}
