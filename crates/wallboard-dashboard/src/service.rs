//! Service facade combining the REST client and the project store.
//!
//! Mutating operations reach the backend first; only a successful round
//! trip feeds the store, with the server's version of the entity. Errors
//! propagate unchanged and leave the cached list exactly as it was.

use crate::client::ProjectClient;
use crate::error::DashboardResult;
use crate::store::ProjectStore;
use std::sync::Arc;
use wallboard_core::{Project, ProjectId, ProjectWidget, UserId};

/// Dashboard operations over a shared project store.
///
/// Explicitly constructed and injected; consumers subscribe through
/// [`DashboardService::store`] and re-render when the list changes.
pub struct DashboardService {
    client: ProjectClient,
    store: Arc<ProjectStore>,
}

impl DashboardService {
    pub fn new(client: ProjectClient, store: Arc<ProjectStore>) -> Self {
        Self { client, store }
    }

    /// The store fed by this service.
    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    /// Fetch all projects and resynchronize the store with the result.
    pub async fn refresh(&self) -> DashboardResult<Vec<Project>> {
        let projects = self.client.list_projects().await?;
        self.store.replace_all(projects.clone());
        Ok(projects)
    }

    /// Fetch a single project. Does not touch the store.
    pub async fn project(&self, id: ProjectId) -> DashboardResult<Project> {
        self.client.get_project(id).await
    }

    /// Create or replace a project, folding the server's version into the
    /// store.
    pub async fn save_project(&self, project: &Project) -> DashboardResult<Project> {
        let saved = self.client.save_project(project).await?;
        self.store.upsert(saved.clone());
        Ok(saved)
    }

    /// Attach a widget to its project, folding the server's updated
    /// project into the store.
    pub async fn attach_widget(&self, widget: &ProjectWidget) -> DashboardResult<Project> {
        let updated = self.client.attach_widget(widget).await?;
        self.store.upsert(updated.clone());
        Ok(updated)
    }

    /// Add a user to a project by username. The server's updated project
    /// is what lands in the store, not the caller's view of it.
    pub async fn add_user(&self, project: ProjectId, username: &str) -> DashboardResult<Project> {
        let updated = self.client.add_user(project, username).await?;
        self.store.upsert(updated.clone());
        Ok(updated)
    }

    /// Remove a user from a project. The server's updated project is what
    /// lands in the store.
    pub async fn remove_user(&self, project: ProjectId, user: UserId) -> DashboardResult<Project> {
        let updated = self.client.remove_user(project, user).await?;
        self.store.upsert(updated.clone());
        Ok(updated)
    }

    /// URL of a served asset (dashboard preview images).
    pub fn asset_content_url(&self, token: &str) -> String {
        self.client.asset_content_url(token)
    }
}
