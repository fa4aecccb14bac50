//! Party entity.
//!
//! Maps to the `parties` table. A party is created exactly once per
//! accepted OSA submission and is never updated or deleted.

use chrono::{DateTime, Utc};

/// A group of guests arriving together, created per accepted submission.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Party {
    /// Surrogate key
    pub id: i64,
    /// When the submission was accepted
    pub created_at: DateTime<Utc>,
}
