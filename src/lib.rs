//! # OSA Server Library
//!
//! This crate provides the backend for a wedding website:
//! - OSA (RSVP) submissions persisted to PostgreSQL
//! - Confirmation emails sent per guest over SMTP
//! - Free-text song suggestions
//! - A password-gated admin listing of all guests
//!
//! ## Module Structure
//!
//! ```text
//! osa_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Database, repositories, and SMTP implementations
//! +-- presentation/  HTTP routes, handlers, and middleware
//! +-- shared/        Common utilities (errors, validation)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business entities
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
