//! Widget placement types.
//!
//! A `ProjectWidget` associates a widget instance with its owning project
//! and carries the grid placement. Instances are created server-side; the
//! client only composes the request body.

use crate::project::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a widget instance on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectWidgetId(pub i64);

impl ProjectWidgetId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProjectWidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a widget definition in the backend catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub i64);

impl WidgetId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid placement of a widget on a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub col: u32,
    pub row: u32,
    pub width: u32,
    pub height: u32,
}

/// Association between a project and a widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWidget {
    /// Absent until the server has created the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProjectWidgetId>,

    /// Owning project.
    pub project_id: ProjectId,

    /// Widget definition in the backend catalog.
    pub widget_id: WidgetId,

    /// Grid placement.
    pub widget_position: WidgetPosition,

    /// Widget instance settings, interpreted by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_config: Option<String>,
}

impl ProjectWidget {
    /// Compose a placement request for a widget on a project.
    pub fn new(project_id: ProjectId, widget_id: WidgetId, position: WidgetPosition) -> Self {
        Self {
            id: None,
            project_id,
            widget_id,
            widget_position: position,
            backend_config: None,
        }
    }
}
