use crate::{ChartDataPoint, Folder, OutputFile};

use serde_json::json;

#[test]
fn test_output_file_null_columns_become_defaults() {
    let file: OutputFile = serde_json::from_value(json!({
        "id": 3,
        "history_id": null,
        "name": "report.xlsx",
        "path": null,
        "size": null,
        "created_at": null
    }))
    .unwrap();

    assert_eq!(file.name, "report.xlsx");
    assert_eq!(file.path, "");
    assert_eq!(file.size, 0);
    assert!(file.history_id.is_none());
}

#[test]
fn test_folder_null_name_becomes_empty() {
    let folder: Folder = serde_json::from_value(json!({ "id": 1, "name": null })).unwrap();

    assert_eq!(folder.name, "");
}

#[test]
fn test_chart_point_null_value_becomes_zero() {
    let point: ChartDataPoint =
        serde_json::from_value(json!({ "label": null, "value": null })).unwrap();

    assert_eq!(point.label, "");
    assert_eq!(point.value, 0);
}
