//! Project identification and entity types.
//!
//! A project is a dashboard: display metadata, an ordered list of placed
//! widgets, and the users authorized to see it. The backend speaks
//! camelCase JSON; all wire mapping lives on the types themselves.

use crate::widget::ProjectWidget;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned project identifier.
///
/// Identifiers are never synthesized client-side: a project composed
/// locally carries no id until the backend responds with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub i64);

impl ProjectId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user authorized on a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUser {
    pub id: UserId,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl ProjectUser {
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            firstname: None,
            lastname: None,
        }
    }
}

/// A dashboard entity.
///
/// Fetched and mutated through the REST access layer. The grid fields
/// (`widget_height`, `max_column`, `css_style`) drive the rendering
/// surface and are opaque to this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Absent only on a create request body; the server assigns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectId>,

    /// Display name.
    pub name: String,

    /// Opaque share token, used to open a dashboard by URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Grid row height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_height: Option<u32>,

    /// Number of grid columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_column: Option<u32>,

    /// Free-form CSS applied to the dashboard screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_style: Option<String>,

    /// Asset token of the latest dashboard preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_token: Option<String>,

    /// Widget placements, in display order.
    #[serde(default)]
    pub widgets: Vec<ProjectWidget>,

    /// Users authorized on this dashboard.
    #[serde(default)]
    pub users: Vec<ProjectUser>,
}

impl Project {
    /// Compose a project for creation. The server assigns the identifier
    /// and share token on save.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            token: None,
            widget_height: None,
            max_column: None,
            css_style: None,
            screenshot_token: None,
            widgets: Vec::new(),
            users: Vec::new(),
        }
    }
}
