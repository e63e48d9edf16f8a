//! The dictionary-fragment merge scenario: first-encountered (by
//! natural-sorted filename) wins on key conflict.

use serde_json::{json, Map, Value};
use stenodict_core::merge::{merge_json_objects, natural_sort_key};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

#[test]
fn first_file_by_natural_sort_wins_on_conflict() {
    let mut files = vec![
        ("b.json".to_string(), object(json!({"K-T": "kitten", "TKOG": "dog"}))),
        ("a.json".to_string(), object(json!({"K-T": "cat"}))),
    ];
    files.sort_by_key(|(name, _)| natural_sort_key(name));

    let merged = merge_json_objects(files);

    assert_eq!(merged.get("K-T"), Some(&Value::String("cat".to_string())));
    assert_eq!(merged.get("TKOG"), Some(&Value::String("dog".to_string())));
    assert_eq!(merged.len(), 2);
}
