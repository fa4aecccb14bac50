//! HTTP Handlers

pub mod auth;
pub mod health;
pub mod rsvp;
pub mod song;
