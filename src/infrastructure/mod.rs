//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Configuration loading (config)
//! - Seed dataset (seed)
//! - Session store (session) and session/login extractors (auth)
//! - HTTP server setup (server)
//! - Application state (state)

pub mod auth;
pub mod config;
pub mod seed;
pub mod server;
pub mod session;
pub mod state;

pub use state::AppState;
