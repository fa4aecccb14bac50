//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::domain::{Guest, Song};

/// Simple confirmation message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Admin login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// Admin guest listing with summary counts
#[derive(Debug, Serialize)]
pub struct GuestListResponse {
    pub guests: Vec<GuestRow>,
    pub attending_wedding: usize,
    pub attending_dinner: usize,
}

impl GuestListResponse {
    pub fn from_guests(guests: Vec<Guest>) -> Self {
        let attending_wedding = guests.iter().filter(|g| g.attending_wedding).count();
        let attending_dinner = guests.iter().filter(|g| g.attending_dinner).count();
        Self {
            guests: guests.into_iter().map(GuestRow::from).collect(),
            attending_wedding,
            attending_dinner,
        }
    }
}

/// One guest row with derived display fields
#[derive(Debug, Serialize)]
pub struct GuestRow {
    pub id: i64,
    pub party_id: i64,
    pub name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub attending_wedding: bool,
    pub attending_dinner: bool,
    pub attendance: String,
    pub special_food: Option<String>,
    pub misc: Option<String>,
    pub submitted_at: String,
}

impl From<Guest> for GuestRow {
    fn from(guest: Guest) -> Self {
        let full_name = format!("{} {}", guest.name, guest.last_name);
        let attendance = attendance_label(guest.attending_wedding, guest.attending_dinner);
        Self {
            id: guest.id,
            party_id: guest.party_id,
            full_name,
            attendance: attendance.to_string(),
            name: guest.name,
            last_name: guest.last_name,
            email: guest.email,
            attending_wedding: guest.attending_wedding,
            attending_dinner: guest.attending_dinner,
            special_food: guest.special_food,
            misc: guest.misc,
            submitted_at: guest.created_at.to_rfc3339(),
        }
    }
}

/// Human-readable attendance summary for the admin listing
fn attendance_label(wedding: bool, dinner: bool) -> &'static str {
    match (wedding, dinner) {
        (true, true) => "Vigsel och middag",
        (true, false) => "Endast vigsel",
        (false, true) => "Endast middag",
        (false, false) => "Kommer inte",
    }
}

/// Admin song suggestion listing
#[derive(Debug, Serialize)]
pub struct SongListResponse {
    pub songs: Vec<SongRow>,
}

/// One song suggestion row
#[derive(Debug, Serialize)]
pub struct SongRow {
    pub id: i64,
    pub song: String,
    pub submitted_at: String,
}

impl From<Song> for SongRow {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            song: song.song,
            submitted_at: song.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn guest(wedding: bool, dinner: bool) -> Guest {
        Guest {
            id: 1,
            party_id: 1,
            name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            attending_wedding: wedding,
            attending_dinner: dinner,
            special_food: None,
            misc: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn derives_full_name_and_attendance_label() {
        let row = GuestRow::from(guest(true, false));
        assert_eq!(row.full_name, "A B");
        assert_eq!(row.attendance, "Endast vigsel");
    }

    #[test]
    fn listing_counts_attendance_per_flag() {
        let response = GuestListResponse::from_guests(vec![
            guest(true, true),
            guest(true, false),
            guest(false, false),
        ]);
        assert_eq!(response.attending_wedding, 2);
        assert_eq!(response.attending_dinner, 1);
        assert_eq!(response.guests.len(), 3);
    }
}
