#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

pub fn write_settings(rows: &[(&str, &str)]) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    let mut wtr = csv::Writer::from_path(file.path()).unwrap();
    wtr.write_record(["option", "value"]).unwrap();
    for (option, value) in rows {
        wtr.write_record([option, value]).unwrap();
    }
    wtr.flush().unwrap();
    file
}

pub fn write_json(value: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", value).unwrap();
    file.flush().unwrap();
    file
}

pub fn order(status: &str) -> NamedTempFile {
    write_json(serde_json::json!({
        "id": 7,
        "orderKey": "wc_order_abc",
        "billingEmail": "a@b.com",
        "status": status,
    }))
}
