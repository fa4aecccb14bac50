//! Integration Tests Entry Point
//!
//! Tests are organized by module:
//! - `api/` - REST API endpoint tests
//! - `common/` - Shared test utilities
//!
//! The suite drives the real router through `tower::ServiceExt` with a
//! lazily-connected pool pointing at a closed port, so every path that
//! must not touch storage (validation failures, auth failures) and the
//! persistence-failure path are exercised without a live database.

mod api;
mod common;
