use common::{Memo, MemoContent, MemoCreate};
use serde_json::{json, Value};

fn to_value(payload: &MemoCreate) -> Value {
    serde_json::to_value(payload).expect("serialize")
}

#[test]
fn create_payload_with_blank_content_sends_null() {
    let payload = MemoCreate::from_form("B", "").expect("title is present");
    assert_eq!(to_value(&payload), json!({ "title": "B", "content": null }));
}

#[test]
fn create_payload_with_text_content() {
    let payload = MemoCreate::from_form("Shopping", " bread ").expect("title is present");
    assert_eq!(
        to_value(&payload),
        json!({ "title": "Shopping", "content": "bread" })
    );
}

#[test]
fn create_payload_omits_missing_content() {
    let payload = MemoCreate::new("Only a title", MemoContent::Missing).expect("valid");
    let value = to_value(&payload);
    assert_eq!(value, json!({ "title": "Only a title" }));
    assert!(value.get("content").is_none());
}

#[test]
fn memo_from_backend_response() {
    let body = r#"[
        {"id": 2, "title": "B", "content": null,
         "created_at": "2024-03-01T09:15:00.123456", "updated_at": "2024-03-01T09:15:00.123456"},
        {"id": 1, "title": "A", "content": "first",
         "created_at": "2024-02-28T18:00:00", "updated_at": "2024-02-29T08:00:00"}
    ]"#;
    let memos: Vec<Memo> = serde_json::from_str(body).expect("deserialize");

    assert_eq!(memos.len(), 2);
    assert_eq!(memos[0].id, 2);
    assert_eq!(memos[0].content, None);
    assert_eq!(memos[1].content.as_deref(), Some("first"));
    // timestamps are kept exactly as the backend sent them
    assert_eq!(memos[0].created_at, "2024-03-01T09:15:00.123456");
}

#[test]
fn memo_without_content_key_deserializes() {
    let memo: Memo = serde_json::from_value(json!({
        "id": 7,
        "title": "no body",
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }))
    .expect("deserialize");
    assert_eq!(memo.content, None);
}
