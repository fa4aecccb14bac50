//! # Domain Layer
//!
//! Core business entities for the wedding OSA flow. The layer is
//! independent of any framework or infrastructure concern; the
//! repository traits that persist these entities live in the
//! infrastructure layer.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
