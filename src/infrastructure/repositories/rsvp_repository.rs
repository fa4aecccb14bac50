//! RSVP Repository Implementation
//!
//! PostgreSQL implementation of party and guest persistence.
//! The submission write is the one transactional operation in the
//! system: one party row plus all of its guest rows, or nothing.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{Guest, NewGuest, Party};
use crate::shared::error::AppError;

/// Trait defining RSVP persistence operations.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Persist one submission atomically.
    ///
    /// Creates a new party, then inserts every guest referencing it.
    /// If any guest insert fails the whole transaction is rolled back
    /// and no partial party remains visible.
    async fn create_party_with_guests(&self, guests: &[NewGuest]) -> Result<Party, AppError>;

    /// Fetch every guest across all parties, oldest submission first.
    async fn list_guests(&self) -> Result<Vec<Guest>, AppError>;
}

/// PostgreSQL implementation of the RsvpRepository.
pub struct PgRsvpRepository {
    pool: PgPool,
}

impl PgRsvpRepository {
    /// Creates a new PgRsvpRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PgRsvpRepository {
    async fn create_party_with_guests(&self, guests: &[NewGuest]) -> Result<Party, AppError> {
        // The transaction rolls back on drop if any insert errors out,
        // so an early `?` return leaves no partial state behind.
        let mut tx = self.pool.begin().await?;

        let party = sqlx::query_as::<_, Party>(
            r#"
            INSERT INTO parties DEFAULT VALUES
            RETURNING id, created_at
            "#,
        )
        .fetch_one(&mut *tx)
        .await?;

        for guest in guests {
            sqlx::query(
                r#"
                INSERT INTO guests
                    (party_id, name, last_name, email,
                     attending_wedding, attending_dinner, special_food, misc)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(party.id)
            .bind(&guest.name)
            .bind(&guest.last_name)
            .bind(&guest.email)
            .bind(guest.attending_wedding)
            .bind(guest.attending_dinner)
            .bind(&guest.special_food)
            .bind(&guest.misc)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(party)
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, AppError> {
        let guests = sqlx::query_as::<_, Guest>(
            r#"
            SELECT id, party_id, name, last_name, email,
                   attending_wedding, attending_dinner, special_food, misc,
                   created_at
            FROM guests
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(guests)
    }
}
