//! Dashboard access for the wallboard backend.
//!
//! Combines a thin REST client with an in-memory project store. Mutating
//! operations reach the backend first; only a successful round trip feeds
//! the store, which rebroadcasts the full project list to subscribers.
//! Failures propagate unchanged and never publish partial state.

pub mod client;
pub mod error;
pub mod service;
pub mod store;

pub use client::ProjectClient;
pub use error::{DashboardError, DashboardResult};
pub use service::DashboardService;
pub use store::ProjectStore;
