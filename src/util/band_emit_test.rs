use super::*;

#[test]
fn vote_band_message_carries_bare_id() {
    let message = vote_band_message("b-1");
    assert_eq!(message.event, "vote-band");
    assert_eq!(message.data, serde_json::json!("b-1"));
}

#[test]
fn delete_band_message_carries_bare_id() {
    let message = delete_band_message("b-2");
    assert_eq!(message.event, "delete-band");
    assert_eq!(message.data, serde_json::json!("b-2"));
}

#[test]
fn create_band_message_builds_expected_payload() {
    let message = create_band_message("Queen");
    assert_eq!(message.event, "create-band");
    assert_eq!(message.data, serde_json::json!({ "name": "Queen" }));
}

#[test]
fn change_band_name_message_builds_expected_payload() {
    let message = change_band_name_message("b-1", "Megadeth");
    assert_eq!(message.event, "change-band-name");
    assert_eq!(message.data, serde_json::json!({ "id": "b-1", "newName": "Megadeth" }));
}

#[test]
fn band_action_message_maps_create() {
    let action = BandAction::Create { name: "Ghost".to_owned() };
    let message = band_action_message(&action);
    assert_eq!(message.event, "create-band");
    assert_eq!(message.data, serde_json::json!({ "name": "Ghost" }));
}

#[test]
fn band_action_message_maps_rename() {
    let action = BandAction::Rename { id: "b-9".to_owned(), new_name: "Ghost".to_owned() };
    let message = band_action_message(&action);
    assert_eq!(message.event, "change-band-name");
    assert_eq!(message.data, serde_json::json!({ "id": "b-9", "newName": "Ghost" }));
}
