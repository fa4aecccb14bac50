//! Application Layer
//!
//! Request/response DTOs and the services that coordinate domain
//! operations.

pub mod dto;
pub mod services;
