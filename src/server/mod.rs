//! Axum-based HTTP server for the cupola relay.
//!
//! This module sets up the HTTP server, configures routes, and handles the
//! one endpoint that matters: `POST /generate`, which relays a caller image
//! to the Generative Language API and returns the generated image.
//!
//! # Components
//!
//! - `handlers`: Implementation of the relay, preflight, and health endpoints.
//! - `routes`: The router configuration and shared application state.

mod handlers;
mod routes;

pub use routes::{create_router, AppState};
