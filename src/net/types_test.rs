use super::*;

// =============================================================
// Band
// =============================================================

#[test]
fn band_deserializes_from_peer_row() {
    let band: Band = serde_json::from_value(serde_json::json!({
        "id": "b-1",
        "name": "Metallica",
        "votes": 5
    }))
    .expect("band row");
    assert_eq!(band.id, "b-1");
    assert_eq!(band.name, "Metallica");
    assert_eq!(band.votes, 5);
}

#[test]
fn band_rejects_negative_votes() {
    let result = serde_json::from_value::<Band>(serde_json::json!({
        "id": "b-1",
        "name": "Metallica",
        "votes": -1
    }));
    assert!(result.is_err());
}

// =============================================================
// ChannelMessage
// =============================================================

#[test]
fn channel_message_roundtrips_object_payload() {
    let message = ChannelMessage {
        event: "create-band".to_owned(),
        data: serde_json::json!({ "name": "Queen" }),
    };
    let json = serde_json::to_string(&message).expect("serialize");
    let back: ChannelMessage = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, message);
}

#[test]
fn channel_message_supports_bare_string_payload() {
    let parsed: ChannelMessage =
        serde_json::from_str(r#"{"event":"vote-band","data":"b-7"}"#).expect("envelope");
    assert_eq!(parsed.event, "vote-band");
    assert_eq!(parsed.data, serde_json::json!("b-7"));
}
