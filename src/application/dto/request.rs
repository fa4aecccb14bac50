//! Request DTOs
//!
//! Data structures for API request bodies. The wire format uses the
//! camelCase field names the frontend form submits (`lastName`,
//! `attendingWedding`, ...).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::NewGuest;

/// OSA submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[validate(
        length(min = 1, message = "At least one guest is required"),
        nested
    )]
    pub guests: Vec<GuestEntry>,
}

/// One guest entry within a submission.
///
/// The attendance flags default to `true` when the form omits them.
/// A non-boolean flag value is rejected as a malformed body before
/// validation runs.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuestEntry {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "Last name must not be empty"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default = "default_attending")]
    pub attending_wedding: bool,

    #[serde(default = "default_attending")]
    pub attending_dinner: bool,

    pub special_food: Option<String>,

    pub misc: Option<String>,
}

fn default_attending() -> bool {
    true
}

impl From<GuestEntry> for NewGuest {
    fn from(entry: GuestEntry) -> Self {
        Self {
            name: entry.name,
            last_name: entry.last_name,
            email: entry.email,
            attending_wedding: entry.attending_wedding,
            attending_dinner: entry.attending_dinner,
            special_food: entry.special_food,
            misc: entry.misc,
        }
    }
}

/// Song suggestion request: `{ "data": { "song": "..." } }`
#[derive(Debug, Deserialize)]
pub struct SongRequest {
    pub data: SongData,
}

/// Inner payload of a song suggestion
#[derive(Debug, Deserialize)]
pub struct SongData {
    pub song: String,
}

/// Admin login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn minimal_guest_json() -> serde_json::Value {
        serde_json::json!({
            "name": "A",
            "lastName": "B",
            "email": "a@b.com"
        })
    }

    #[test]
    fn attendance_flags_default_to_true() {
        let entry: GuestEntry = serde_json::from_value(minimal_guest_json()).unwrap();
        assert!(entry.attending_wedding);
        assert!(entry.attending_dinner);
        assert_eq!(entry.special_food, None);
        assert_eq!(entry.misc, None);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let entry: GuestEntry = serde_json::from_value(serde_json::json!({
            "name": "Jimmie",
            "lastName": "Rissanen",
            "email": "jimmies@me.com",
            "attendingWedding": true,
            "attendingDinner": false,
            "specialFood": "vegetarisk",
            "misc": "glutenfritt"
        }))
        .unwrap();

        assert_eq!(entry.last_name, "Rissanen");
        assert!(!entry.attending_dinner);
        assert_eq!(entry.special_food.as_deref(), Some("vegetarisk"));
    }

    #[test]
    fn non_boolean_attendance_flag_is_a_malformed_body() {
        let result: Result<GuestEntry, _> = serde_json::from_value(serde_json::json!({
            "name": "A",
            "lastName": "B",
            "email": "a@b.com",
            "attendingWedding": "Självklart"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn empty_guest_list_fails_validation() {
        let request = SubmitRequest { guests: vec![] };
        assert!(request.validate().is_err());
    }

    #[test_case("", "B", "a@b.com" ; "empty name")]
    #[test_case("A", "", "a@b.com" ; "empty last name")]
    #[test_case("A", "B", "not-an-email" ; "invalid email")]
    #[test_case("A", "B", "" ; "empty email")]
    fn invalid_guest_rejects_the_whole_submission(name: &str, last_name: &str, email: &str) {
        let valid: GuestEntry = serde_json::from_value(minimal_guest_json()).unwrap();
        let invalid = GuestEntry {
            name: name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..valid.clone()
        };
        let request = SubmitRequest {
            guests: vec![valid, invalid],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn valid_submission_passes() {
        let entry: GuestEntry = serde_json::from_value(minimal_guest_json()).unwrap();
        let request = SubmitRequest {
            guests: vec![entry],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn song_request_unwraps_nested_data() {
        let request: SongRequest = serde_json::from_value(serde_json::json!({
            "data": { "song": "Dancing Queen" }
        }))
        .unwrap();
        assert_eq!(request.data.song, "Dancing Queen");
    }
}
