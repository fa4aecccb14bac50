//! Song Repository Implementation
//!
//! PostgreSQL implementation of song suggestion persistence.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Song;
use crate::shared::error::AppError;

/// Trait defining song suggestion operations.
#[async_trait]
pub trait SongRepository: Send + Sync {
    /// Store a free-text song suggestion.
    async fn add_song(&self, song: &str) -> Result<(), AppError>;

    /// Fetch all suggestions, newest first.
    async fn list_songs(&self) -> Result<Vec<Song>, AppError>;
}

/// PostgreSQL implementation of the SongRepository.
pub struct PgSongRepository {
    pool: PgPool,
}

impl PgSongRepository {
    /// Creates a new PgSongRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SongRepository for PgSongRepository {
    async fn add_song(&self, song: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO songs (song) VALUES ($1)")
            .bind(song)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_songs(&self) -> Result<Vec<Song>, AppError> {
        let songs = sqlx::query_as::<_, Song>(
            r#"
            SELECT id, song, created_at
            FROM songs
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(songs)
    }
}
