use super::*;

// =============================================================
// parse_channel_message
// =============================================================

#[test]
fn parse_channel_message_accepts_envelope() {
    let message = parse_channel_message(r#"{"event":"current-bands","data":[]}"#).expect("envelope");
    assert_eq!(message.event, "current-bands");
    assert_eq!(message.data, serde_json::json!([]));
}

#[test]
fn parse_channel_message_rejects_non_envelope_text() {
    assert!(parse_channel_message("not json").is_none());
    assert!(parse_channel_message(r#"{"name":"no event field"}"#).is_none());
    assert!(parse_channel_message(r#""just a string""#).is_none());
}

// =============================================================
// parse_bands
// =============================================================

#[test]
fn parse_bands_preserves_delivered_order() {
    let data = serde_json::json!([
        { "id": "b-2", "name": "Queen", "votes": 3 },
        { "id": "b-1", "name": "Metallica", "votes": 9 },
        { "id": "b-3", "name": "Heroes del Silencio", "votes": 0 }
    ]);
    let bands = parse_bands(&data).expect("snapshot");
    let ids: Vec<&str> = bands.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b-2", "b-1", "b-3"]);
}

#[test]
fn parse_bands_accepts_empty_snapshot() {
    let bands = parse_bands(&serde_json::json!([])).expect("empty snapshot");
    assert!(bands.is_empty());
}

#[test]
fn parse_bands_rejects_snapshot_wholesale_on_bad_row() {
    let data = serde_json::json!([
        { "id": "b-1", "name": "Metallica", "votes": 1 },
        { "id": "b-2", "votes": 2 }
    ]);
    assert!(parse_bands(&data).is_none());
}

#[test]
fn parse_bands_rejects_non_array_payload() {
    assert!(parse_bands(&serde_json::json!({ "bands": [] })).is_none());
    assert!(parse_bands(&serde_json::json!("b-1")).is_none());
}
