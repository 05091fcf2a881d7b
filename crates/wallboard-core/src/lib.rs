//! Core domain types for the wallboard dashboard client.
//!
//! This crate provides the entities exchanged with the wallboard backend:
//! - `Project`: a dashboard with placed widgets and authorized users
//! - `ProjectWidget`: a widget instance placed on a dashboard
//! - `ProjectUser`: a user authorized on a dashboard

pub mod project;
pub mod widget;

pub use project::{Project, ProjectId, ProjectUser, UserId};
pub use widget::{ProjectWidget, ProjectWidgetId, WidgetId, WidgetPosition};
