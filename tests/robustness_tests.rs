mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_non_numeric_expiry_days_skip_augmentation() {
    let settings = common::write_settings(&[
        ("activate_expiry_days_setting", "yes"),
        ("order_dueDate", "not_a_number"),
    ]);
    let order = common::order("pending");
    let args = common::write_json(serde_json::json!({"payment": {"method": "banktransfer"}}));

    let mut cmd = Command::new(cargo_bin!("banktransfer"));
    cmd.arg("--settings")
        .arg(settings.path())
        .arg("--order")
        .arg(order.path())
        .arg("args")
        .arg("--args")
        .arg(args.path())
        .args(["--today", "2024-01-01"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::diff("{\"payment\":{\"method\":\"banktransfer\"}}\n"));
}

#[test]
fn test_nested_payment_receives_due_date() {
    let settings = common::write_settings(&[
        ("activate_expiry_days_setting", "yes"),
        ("order_dueDate", "10"),
    ]);
    let order = common::order("pending");
    let args = common::write_json(serde_json::json!({"payment": {"method": "banktransfer"}}));

    let mut cmd = Command::new(cargo_bin!("banktransfer"));
    cmd.arg("--settings")
        .arg(settings.path())
        .arg("--order")
        .arg(order.path())
        .arg("args")
        .arg("--args")
        .arg(args.path())
        .args(["--today", "2024-01-01"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "payment": {"method": "banktransfer", "dueDate": "2024-01-11"},
            "billingEmail": "a@b.com"
        })
    );
}

#[test]
fn test_malformed_payment_json_fails() {
    let order = common::order("pending");
    let payment = common::write_json(serde_json::json!({"expiresAt": "soon"}));

    let mut cmd = Command::new(cargo_bin!("banktransfer"));
    cmd.arg("--order")
        .arg(order.path())
        .arg("instructions")
        .arg("--payment")
        .arg(payment.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_missing_settings_file_fails() {
    let order = common::order("pending");

    let mut cmd = Command::new(cargo_bin!("banktransfer"));
    cmd.arg("--settings")
        .arg("does/not/exist.csv")
        .arg("--order")
        .arg(order.path())
        .arg("args");

    cmd.assert().failure();
}
