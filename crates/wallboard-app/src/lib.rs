//! Wallboard console application.
//!
//! Lists, shows, and watches dashboards from the command line, and
//! performs membership and widget mutations against the backend. The
//! `watch` command is the long-lived consumer: it subscribes to the
//! project store and re-renders whenever the list changes.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use app::Application;
pub use cli::{Args, Command};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use logging::init_logging;
