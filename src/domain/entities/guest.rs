//! Guest entity.
//!
//! Maps to the `guests` table. Every guest row belongs to exactly one
//! party; all guests of one submission are created atomically with it.

use chrono::{DateTime, Utc};

/// One attendee entry within a party's submission.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Guest {
    /// Surrogate key
    pub id: i64,
    /// The party this guest was submitted with
    pub party_id: i64,
    /// First name
    pub name: String,
    /// Last name
    pub last_name: String,
    /// Contact address for the confirmation mail
    pub email: String,
    /// Attending the wedding itself
    pub attending_wedding: bool,
    /// Attending the dinner the evening before
    pub attending_dinner: bool,
    /// Dietary requirements, free text
    pub special_food: Option<String>,
    /// Anything else the couple should know
    pub misc: Option<String>,
    /// When the guest row was created
    pub created_at: DateTime<Utc>,
}

/// A validated guest entry not yet persisted.
///
/// Produced by the request validator; carries the attendance defaults
/// already applied (both flags are true when the form omits them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGuest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub attending_wedding: bool,
    pub attending_dinner: bool,
    pub special_food: Option<String>,
    pub misc: Option<String>,
}
