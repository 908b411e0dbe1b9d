//! Health module — liveness and build info

pub mod handlers;

pub use handlers::*;
