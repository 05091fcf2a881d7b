//! HTTP client for the wallboard REST API.
//!
//! Translates typed project operations into calls against a fixed base
//! URL. No caching, no retries: a transport failure or non-success status
//! is returned unchanged to the caller.

use crate::error::{DashboardError, DashboardResult};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};
use wallboard_core::{Project, ProjectId, ProjectWidget, UserId};

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request body for adding a user to a project.
#[derive(Debug, Serialize)]
struct AddUserRequest {
    username: String,
}

/// Client for the wallboard REST API.
pub struct ProjectClient {
    /// HTTP client.
    client: Client,
    /// API base URL (e.g., "http://localhost:8080/api").
    base_url: String,
}

impl ProjectClient {
    /// Create a client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> DashboardResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::Http(format!("Failed to create HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    /// Fetch all projects.
    pub async fn list_projects(&self) -> DashboardResult<Vec<Project>> {
        let url = format!("{}/project", self.base_url);
        debug!(url = %url, "Fetching project list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Http(format!("HTTP request failed: {e}")))?;

        let projects: Vec<Project> = Self::decode(response).await?;
        info!(count = projects.len(), "Fetched project list");
        Ok(projects)
    }

    /// Fetch a single project by identifier.
    pub async fn get_project(&self, id: ProjectId) -> DashboardResult<Project> {
        let url = format!("{}/project/{id}", self.base_url);
        debug!(url = %url, "Fetching project");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Http(format!("HTTP request failed: {e}")))?;

        Self::decode(response).await
    }

    /// Create or replace a project. Returns the server's version of the
    /// entity, with identifier and token assigned.
    pub async fn save_project(&self, project: &Project) -> DashboardResult<Project> {
        let url = format!("{}/project", self.base_url);
        debug!(url = %url, name = %project.name, "Saving project");

        let response = self
            .client
            .put(&url)
            .json(project)
            .send()
            .await
            .map_err(|e| DashboardError::Http(format!("HTTP request failed: {e}")))?;

        let saved: Project = Self::decode(response).await?;
        info!(id = ?saved.id, name = %saved.name, "Project saved");
        Ok(saved)
    }

    /// Attach a widget instance to its project. Returns the updated
    /// project.
    pub async fn attach_widget(&self, widget: &ProjectWidget) -> DashboardResult<Project> {
        let url = format!("{}/project/{}", self.base_url, widget.project_id);
        debug!(url = %url, widget = %widget.widget_id, "Attaching widget");

        let response = self
            .client
            .put(&url)
            .json(widget)
            .send()
            .await
            .map_err(|e| DashboardError::Http(format!("HTTP request failed: {e}")))?;

        Self::decode(response).await
    }

    /// Add a user to a project by username. Returns the updated project.
    pub async fn add_user(&self, project: ProjectId, username: &str) -> DashboardResult<Project> {
        let url = format!("{}/project/{project}/users/", self.base_url);
        debug!(url = %url, username = %username, "Adding user to project");

        let request = AddUserRequest {
            username: username.to_string(),
        };

        let response = self
            .client
            .put(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DashboardError::Http(format!("HTTP request failed: {e}")))?;

        Self::decode(response).await
    }

    /// Remove a user from a project. Returns the updated project.
    pub async fn remove_user(&self, project: ProjectId, user: UserId) -> DashboardResult<Project> {
        let url = format!("{}/project/{project}/users/{user}", self.base_url);
        debug!(url = %url, "Removing user from project");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| DashboardError::Http(format!("HTTP request failed: {e}")))?;

        Self::decode(response).await
    }

    /// URL under which the backend serves an asset (dashboard preview
    /// images). Builds the URL only; no request is performed.
    pub fn asset_content_url(&self, token: &str) -> String {
        format!("{}/asset/{token}/content", self.base_url)
    }

    /// Check the status and decode a JSON body.
    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> DashboardResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Http(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            return Err(DashboardError::Status { status, body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
