//! Command orchestration.
//!
//! Wires the REST client, the project store, and the service together,
//! then executes one CLI command. `watch` is the long-lived path: it
//! subscribes to the store, re-renders on every publication, and drives
//! periodic refreshes until interrupted.

use crate::cli::Command;
use crate::config::AppConfig;
use crate::error::AppResult;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use wallboard_core::{Project, ProjectId, ProjectWidget, UserId};
use wallboard_dashboard::{DashboardService, ProjectClient, ProjectStore};

/// Main application.
pub struct Application {
    config: AppConfig,
    service: DashboardService,
}

impl Application {
    /// Create a new application from configuration.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let client = ProjectClient::with_timeout(
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;
        let store = Arc::new(ProjectStore::new());
        let service = DashboardService::new(client, store);

        Ok(Self { config, service })
    }

    /// Execute one CLI command.
    pub async fn run(&self, command: Command) -> AppResult<()> {
        match command {
            Command::List => self.list().await,
            Command::Show { id } => self.show(ProjectId::new(id)).await,
            Command::Watch => self.watch().await,
            Command::Create { file } => self.create(&file).await,
            Command::AddUser { project, username } => {
                self.add_user(ProjectId::new(project), &username).await
            }
            Command::RemoveUser { project, user } => {
                self.remove_user(ProjectId::new(project), UserId::new(user))
                    .await
            }
            Command::AttachWidget { file } => self.attach_widget(&file).await,
        }
    }

    async fn list(&self) -> AppResult<()> {
        let projects = self.service.refresh().await?;
        println!(
            "{}",
            project_table(&projects, self.service.store().last_refresh())
        );
        Ok(())
    }

    async fn show(&self, id: ProjectId) -> AppResult<()> {
        let project = self.service.project(id).await?;
        println!("{}", project_detail(&project));
        if let Some(token) = &project.screenshot_token {
            println!("preview: {}", self.service.asset_content_url(token));
        }
        Ok(())
    }

    /// Subscribe to the store and re-render on every publication, with a
    /// background interval driving full refreshes. Ctrl-C ends the loop;
    /// the subscription handle is dropped on return.
    async fn watch(&self) -> AppResult<()> {
        let mut rx = self.service.store().subscribe();
        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.refresh_interval_ms));

        info!(
            interval_ms = self.config.refresh_interval_ms,
            "Watching dashboards"
        );

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Watch stopped");
                    return Ok(());
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        warn!("Project store closed, stopping watch");
                        return Ok(());
                    }
                    let projects = rx.borrow_and_update().clone();
                    println!(
                        "{}",
                        project_table(&projects, self.service.store().last_refresh())
                    );
                }
                _ = interval.tick() => {
                    if let Err(e) = self.service.refresh().await {
                        warn!(error = %e, "Refresh failed, keeping last known list");
                    }
                }
            }
        }
    }

    async fn create(&self, file: &Path) -> AppResult<()> {
        let content = std::fs::read_to_string(file)?;
        let project: Project = serde_json::from_str(&content)?;

        let saved = self.service.save_project(&project).await?;
        match saved.id {
            Some(id) => println!("Saved dashboard \"{}\" (id {id})", saved.name),
            None => println!("Saved dashboard \"{}\"", saved.name),
        }
        Ok(())
    }

    async fn add_user(&self, project: ProjectId, username: &str) -> AppResult<()> {
        let updated = self.service.add_user(project, username).await?;
        println!("Added {username} to \"{}\"", updated.name);
        Ok(())
    }

    async fn remove_user(&self, project: ProjectId, user: UserId) -> AppResult<()> {
        let updated = self.service.remove_user(project, user).await?;
        println!("Removed user {user} from \"{}\"", updated.name);
        Ok(())
    }

    async fn attach_widget(&self, file: &Path) -> AppResult<()> {
        let content = std::fs::read_to_string(file)?;
        let widget: ProjectWidget = serde_json::from_str(&content)?;

        let updated = self.service.attach_widget(&widget).await?;
        println!(
            "Attached widget {} to \"{}\" ({} widgets total)",
            widget.widget_id,
            updated.name,
            updated.widgets.len()
        );
        Ok(())
    }
}

/// One-line-per-dashboard table.
fn project_table(projects: &[Project], as_of: Option<DateTime<Utc>>) -> String {
    let mut out = String::new();

    if let Some(at) = as_of {
        out.push_str(&format!("dashboards as of {}\n", at.format("%H:%M:%S")));
    }
    out.push_str(&format!(
        "{:<24} {:>6} {:<14} {:>7} {:>5}\n",
        "NAME", "ID", "TOKEN", "WIDGETS", "USERS"
    ));

    for project in projects {
        let id = project
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<24} {:>6} {:<14} {:>7} {:>5}\n",
            project.name,
            id,
            project.token.as_deref().unwrap_or("-"),
            project.widgets.len(),
            project.users.len()
        ));
    }

    if projects.is_empty() {
        out.push_str("(no dashboards)\n");
    }
    out
}

/// Multi-line rendering of one dashboard.
fn project_detail(project: &Project) -> String {
    let mut out = String::new();

    let id = project
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&format!(
        "{} (id {id}, token {})\n",
        project.name,
        project.token.as_deref().unwrap_or("-")
    ));

    out.push_str("widgets:\n");
    if project.widgets.is_empty() {
        out.push_str("  (none)\n");
    }
    for widget in &project.widgets {
        let pos = &widget.widget_position;
        out.push_str(&format!(
            "  - widget {} at col {} row {} ({}x{})\n",
            widget.widget_id, pos.col, pos.row, pos.width, pos.height
        ));
    }

    out.push_str("users:\n");
    if project.users.is_empty() {
        out.push_str("  (none)\n");
    }
    for user in &project.users {
        out.push_str(&format!("  - {} (id {})\n", user.username, user.id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallboard_core::{ProjectUser, WidgetId, WidgetPosition};

    fn project(id: i64, name: &str) -> Project {
        let mut p = Project::new(name);
        p.id = Some(ProjectId::new(id));
        p
    }

    #[test]
    fn test_table_lists_every_dashboard() {
        let mut p = project(1, "Ops wall");
        p.token = Some("abc123".to_string());

        let table = project_table(&[p, project(2, "Team wall")], None);

        assert!(table.contains("Ops wall"));
        assert!(table.contains("abc123"));
        assert!(table.contains("Team wall"));
    }

    #[test]
    fn test_empty_table_has_placeholder() {
        let table = project_table(&[], None);
        assert!(table.contains("(no dashboards)"));
    }

    #[test]
    fn test_detail_renders_widgets_and_users() {
        let mut p = project(4, "Ops wall");
        p.widgets.push(ProjectWidget::new(
            ProjectId::new(4),
            WidgetId::new(18),
            WidgetPosition {
                col: 0,
                row: 2,
                width: 2,
                height: 1,
            },
        ));
        p.users.push(ProjectUser::new(UserId::new(7), "jdoe"));

        let detail = project_detail(&p);
        assert!(detail.contains("widget 18 at col 0 row 2 (2x1)"));
        assert!(detail.contains("jdoe (id 7)"));
    }
}
