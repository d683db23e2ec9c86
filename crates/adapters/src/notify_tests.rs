// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    plain     = { "Running", "build",        "vr: Running: build" },
    no_body   = { "Copied",  "",             "vr: Copied" },
    multiline = { "Failed",  "line1\nline2", "vr: Failed: line1 line2" },
    crlf      = { "Done",    "a\r\nb",       "vr: Done: a  b" },
)]
fn notice_lines(title: &str, message: &str, expected: &str) {
    assert_eq!(format_notice(title, message), expected);
}

#[tokio::test]
async fn fake_records_calls_in_order() {
    let fake = FakeNotifyAdapter::new();
    fake.notify("first", "a").await.unwrap();
    fake.notify("second", "b").await.unwrap();

    let calls = fake.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].message, "b");
    assert_eq!(fake.titles(), vec!["first", "second"]);
}

#[tokio::test]
async fn terminal_notifier_writes_without_error() {
    let notifier = SystemNotifier::new(false);
    assert!(matches!(notifier, SystemNotifier::Terminal(_)));
    notifier.notify("Running", "echo").await.unwrap();
}
