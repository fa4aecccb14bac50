//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: Admin password check and JWT tokens
//! - **RsvpService**: OSA submission persistence and admin listing
//! - **notification**: Per-guest confirmation mail dispatch

pub mod auth_service;
pub mod notification;
pub mod rsvp_service;

// Re-export auth service types
pub use auth_service::{AuthError, AuthService, AuthToken, Claims};

// Re-export rsvp service types
pub use rsvp_service::{RsvpError, RsvpService, RsvpServiceImpl, Submission};

// Re-export notification types
pub use notification::{dispatch_confirmations, DispatchFailure, DispatchReport};
