//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database repositories (PostgreSQL)
//! - Outbound SMTP mail

pub mod database;
pub mod email;
pub mod repositories;
