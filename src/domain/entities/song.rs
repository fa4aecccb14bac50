//! Song suggestion entity.
//!
//! Maps to the `songs` table.

use chrono::{DateTime, Utc};

/// A free-text song suggestion left by a visitor.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Song {
    /// Surrogate key
    pub id: i64,
    /// The suggested song, free text
    pub song: String,
    /// When the suggestion was left
    pub created_at: DateTime<Utc>,
}
