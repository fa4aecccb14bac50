//! Repository Implementations
//!
//! PostgreSQL-backed repositories. Each module defines the repository
//! trait next to its `Pg*` implementation.

pub mod rsvp_repository;
pub mod song_repository;

pub use rsvp_repository::{PgRsvpRepository, RsvpRepository};
pub use song_repository::{PgSongRepository, SongRepository};
