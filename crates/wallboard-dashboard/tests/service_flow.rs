//! Integration tests for the dashboard service against an in-process
//! mock backend.
//!
//! The axum server stands in for the external REST API: canned project
//! data, server-assigned identifiers, and failure routes. Each test gets
//! its own backend on an ephemeral port.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{delete, get, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use wallboard_core::{
    Project, ProjectId, ProjectUser, ProjectWidget, ProjectWidgetId, UserId, WidgetId,
    WidgetPosition,
};
use wallboard_dashboard::{DashboardError, DashboardService, ProjectClient, ProjectStore};

fn project(id: i64, name: &str) -> Project {
    let mut p = Project::new(name);
    p.id = Some(ProjectId::new(id));
    p
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn service_for(base_url: &str) -> DashboardService {
    let client = ProjectClient::new(base_url).unwrap();
    DashboardService::new(client, Arc::new(ProjectStore::new()))
}

#[tokio::test]
async fn refresh_resynchronizes_the_store() {
    let router = Router::new().route(
        "/project",
        get(|| async { Json(vec![project(1, "Ops wall"), project(2, "Team wall")]) }),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    let rx = service.store().subscribe();
    let fetched = service.refresh().await.unwrap();

    assert_eq!(fetched.len(), 2);
    assert_eq!(service.store().snapshot(), fetched);
    assert_eq!(*rx.borrow(), fetched);
    assert!(service.store().last_refresh().is_some());
}

#[tokio::test]
async fn get_project_does_not_touch_the_store() {
    let router = Router::new().route(
        "/project/{id}",
        get(|Path(id): Path<i64>| async move { Json(project(id, "Solo")) }),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    let fetched = service.project(ProjectId::new(12)).await.unwrap();

    assert_eq!(fetched.id, Some(ProjectId::new(12)));
    assert!(service.store().is_empty());
}

#[tokio::test]
async fn save_project_stores_the_server_version() {
    let router = Router::new().route(
        "/project",
        put(|Json(mut body): Json<Project>| async move {
            body.id = Some(ProjectId::new(42));
            body.token = Some("srv-token".to_string());
            Json(body)
        }),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    let saved = service.save_project(&Project::new("Fresh")).await.unwrap();

    assert_eq!(saved.id, Some(ProjectId::new(42)));
    assert_eq!(saved.token.as_deref(), Some("srv-token"));
    assert_eq!(service.store().snapshot(), vec![saved]);
}

#[tokio::test]
async fn add_user_stores_the_server_response_not_the_input() {
    let seen: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));

    let router = Router::new().route(
        "/project/{id}/users/",
        put({
            let seen = seen.clone();
            move |Path(id): Path<i64>, Json(body): Json<serde_json::Value>| {
                let seen = seen.clone();
                async move {
                    *seen.lock() = Some(body);
                    let mut p = project(id, "Ops wall");
                    p.users.push(ProjectUser::new(UserId::new(7), "jdoe"));
                    Json(p)
                }
            }
        }),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    // The cached entry predates the mutation and has no users.
    service.store().replace_all(vec![project(1, "Ops wall")]);

    let updated = service.add_user(ProjectId::new(1), "jdoe").await.unwrap();
    assert_eq!(updated.users.len(), 1);

    // The wire body carries the username payload.
    assert_eq!(
        seen.lock().take().unwrap(),
        serde_json::json!({"username": "jdoe"})
    );

    // The store holds the server's version, users included.
    let cached = service.store().snapshot();
    assert_eq!(cached.len(), 1);
    assert_eq!(cached[0].users.len(), 1);
    assert_eq!(cached[0].users[0].username, "jdoe");
}

#[tokio::test]
async fn remove_user_updates_the_cache_from_the_response() {
    let router = Router::new().route(
        "/project/{id}/users/{user_id}",
        delete(|Path((id, _user_id)): Path<(i64, i64)>| async move {
            // The server's version no longer contains the user.
            Json(project(id, "Ops wall"))
        }),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    let mut seeded = project(1, "Ops wall");
    seeded.users.push(ProjectUser::new(UserId::new(7), "jdoe"));
    service.store().replace_all(vec![seeded]);

    service
        .remove_user(ProjectId::new(1), UserId::new(7))
        .await
        .unwrap();

    let cached = service.store().snapshot();
    assert_eq!(cached.len(), 1);
    assert!(cached[0].users.is_empty());
}

#[tokio::test]
async fn attach_widget_updates_the_cache() {
    let router = Router::new().route(
        "/project/{id}",
        put(
            |Path(id): Path<i64>, Json(mut widget): Json<ProjectWidget>| async move {
                widget.id = Some(ProjectWidgetId::new(99));
                let mut p = project(id, "Ops wall");
                p.widgets.push(widget);
                Json(p)
            },
        ),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    let widget = ProjectWidget::new(
        ProjectId::new(1),
        WidgetId::new(18),
        WidgetPosition {
            col: 0,
            row: 0,
            width: 1,
            height: 1,
        },
    );
    let updated = service.attach_widget(&widget).await.unwrap();

    assert_eq!(updated.widgets.len(), 1);
    assert_eq!(updated.widgets[0].id, Some(ProjectWidgetId::new(99)));
    assert_eq!(service.store().snapshot(), vec![updated]);
}

#[tokio::test]
async fn failed_save_leaves_the_store_untouched() {
    let router = Router::new().route(
        "/project",
        put(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn_backend(router).await;
    let service = service_for(&base);

    service.store().replace_all(vec![project(1, "A")]);
    let before = service.store().snapshot();
    let rx = service.store().subscribe();

    let err = service
        .save_project(&Project::new("Doomed"))
        .await
        .unwrap_err();

    match err {
        DashboardError::Status { status, body } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Status error, got {other:?}"),
    }

    assert_eq!(service.store().snapshot(), before);
    assert!(!rx.has_changed().unwrap());
}

#[tokio::test]
async fn transport_failure_surfaces_and_leaves_the_store_untouched() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client =
        ProjectClient::with_timeout(format!("http://{addr}"), Duration::from_secs(2)).unwrap();
    let service = DashboardService::new(client, Arc::new(ProjectStore::new()));

    service.store().replace_all(vec![project(1, "A")]);
    let rx = service.store().subscribe();

    let err = service.refresh().await.unwrap_err();
    assert!(matches!(err, DashboardError::Http(_)));

    assert_eq!(service.store().snapshot(), vec![project(1, "A")]);
    assert!(!rx.has_changed().unwrap());
}
