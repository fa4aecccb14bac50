//! # Domain Entities
//!
//! Core domain entities representing the wedding OSA data model.
//! All entities map directly to their corresponding database tables.
//!
//! - **Party**: The group-of-guests unit created per OSA submission
//! - **Guest**: One attendee entry within a party
//! - **Song**: A free-text song suggestion

mod guest;
mod party;
mod song;

pub use guest::{Guest, NewGuest};
pub use party::Party;
pub use song::Song;
