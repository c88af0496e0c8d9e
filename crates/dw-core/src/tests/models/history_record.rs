use crate::HistoryRecord;

use serde_json::json;

#[test]
fn test_history_record_decodes_inserted_echo() {
    let record: HistoryRecord = serde_json::from_value(json!({
        "id": 77,
        "user_id": "00000000-0000-0000-0000-0000000000a1",
        "input_file_type_id": 2,
        "output_format_id": 1,
        "prompt_text": null,
        "process_type": "transform",
        "process_date": "2024-03-01T12:00:00+00:00",
        "processing_time": null,
        "is_success": null
    }))
    .unwrap();

    assert_eq!(record.id, 77);
    assert_eq!(record.prompt_text, "");
    assert_eq!(record.process_type, "transform");
    assert!(record.process_date.is_some());
    assert!(record.processing_time.is_none());
}
