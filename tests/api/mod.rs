//! REST API endpoint tests

mod auth_tests;
mod health_tests;
mod song_tests;
mod submit_tests;
