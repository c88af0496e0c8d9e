use crate::HistoryItem;

use serde_json::json;

#[test]
fn test_history_item_flattens_embedded_names() {
    let item: HistoryItem = serde_json::from_value(json!({
        "id": 7,
        "input_type": { "name": "CSV" },
        "output_format": { "name": "Excel" },
        "process_date": "2024-01-01T10:00:00+00:00",
        "processing_time": 1200,
        "is_success": true,
        "process_type": "convert"
    }))
    .unwrap();

    assert_eq!(item.id, 7);
    assert_eq!(item.input_type, "CSV");
    assert_eq!(item.output_format, "Excel");
    assert_eq!(item.processing_time, Some(1200));
    assert_eq!(item.is_success, Some(true));
}

#[test]
fn test_history_item_null_embed_becomes_empty_name() {
    let item: HistoryItem = serde_json::from_value(json!({
        "id": 8,
        "input_type": null
    }))
    .unwrap();

    assert_eq!(item.input_type, "");
    assert_eq!(item.output_format, "");
    assert!(item.process_date.is_none());
    assert!(item.is_success.is_none());
}

#[test]
fn test_history_item_null_process_type_becomes_empty() {
    let item: HistoryItem = serde_json::from_value(json!({
        "id": 9,
        "input_type": { "name": "PDF" },
        "output_format": { "name": null },
        "process_type": null
    }))
    .unwrap();

    assert_eq!(item.input_type, "PDF");
    assert_eq!(item.output_format, "");
    assert_eq!(item.process_type, "");
}
