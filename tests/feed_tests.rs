// Host-side tests for feed snapshot decoding and submission validation.

use void_core::{
    counter_label, draft_len, parse_snapshot, validate_submission, FeedError, MessageRecord,
    SubmitError, SUBMIT_MAX_CHARS,
};

#[test]
fn parse_snapshot_keeps_store_order() {
    let json = r#"[
        {"id": "k1", "text": "first", "createdAt": 1700000000000},
        {"id": "k2", "text": "second", "createdAt": null},
        {"id": "k3", "text": "third"}
    ]"#;
    let records = parse_snapshot(json).expect("valid snapshot");
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["k1", "k2", "k3"]);
    assert_eq!(records[0].created_at, Some(1_700_000_000_000.0));
    assert_eq!(records[1].created_at, None);
    assert_eq!(records[2].created_at, None);
}

#[test]
fn parse_snapshot_empty_array() {
    assert!(parse_snapshot("[]").expect("empty is fine").is_empty());
}

#[test]
fn parse_snapshot_rejects_garbage() {
    assert!(matches!(parse_snapshot("not json"), Err(FeedError::Malformed(_))));
    assert!(matches!(
        parse_snapshot(r#"[{"id": "k1"}]"#),
        Err(FeedError::Malformed(_))
    ));
    assert!(matches!(parse_snapshot(r#"{"id": "k1"}"#), Err(FeedError::Malformed(_))));
}

#[test]
fn seed_key_prefers_id() {
    let with_id = MessageRecord::new("abc", "t");
    assert_eq!(with_id.seed_key(7), "abc");
    let without = MessageRecord::new("", "t");
    assert_eq!(without.seed_key(7), "7");
}

#[test]
fn validate_submission_trims() {
    assert_eq!(validate_submission("  hello void \n"), Ok("hello void".to_owned()));
}

#[test]
fn validate_submission_rejects_blank() {
    assert_eq!(validate_submission(""), Err(SubmitError::Empty));
    assert_eq!(validate_submission(" \t\n "), Err(SubmitError::Empty));
}

#[test]
fn validate_submission_enforces_limit_on_raw_draft() {
    let at_limit = "v".repeat(SUBMIT_MAX_CHARS);
    assert!(validate_submission(&at_limit).is_ok());

    let over = "v".repeat(SUBMIT_MAX_CHARS + 1);
    assert_eq!(
        validate_submission(&over),
        Err(SubmitError::TooLong {
            len: SUBMIT_MAX_CHARS + 1,
            max: SUBMIT_MAX_CHARS
        })
    );

    // Counted in UTF-16 units, not bytes
    let accented = "é".repeat(SUBMIT_MAX_CHARS);
    assert!(validate_submission(&accented).is_ok());

    // Astral characters take two units each, as in the browser's maxLength
    let emoji = "\u{1F30C}".repeat(SUBMIT_MAX_CHARS / 2 + 1);
    assert_eq!(
        validate_submission(&emoji),
        Err(SubmitError::TooLong {
            len: SUBMIT_MAX_CHARS + 2,
            max: SUBMIT_MAX_CHARS
        })
    );
}

#[test]
fn counter_label_shows_length_over_limit() {
    assert_eq!(counter_label(""), "0/500");
    assert_eq!(counter_label("hello"), "5/500");
    assert_eq!(counter_label("héllo"), "5/500");
    assert_eq!(counter_label("\u{1F30C}"), "2/500");
    assert_eq!(draft_len("a\u{1F30C}b"), 4);
}

#[test]
fn errors_render_readably() {
    let e = SubmitError::TooLong { len: 501, max: 500 };
    assert_eq!(e.to_string(), "message is 501 characters; the limit is 500");
    let f = FeedError::Unavailable("permission denied".into());
    assert_eq!(f.to_string(), "message feed unavailable: permission denied");
}
