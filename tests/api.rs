//! Data-layer integration tests against a live mock API.
//!
//! Starts an axum mock of the TaskFlow API on a random port (shared by the
//! whole suite), then drives the real services over HTTP: typed decoding,
//! query-parameter filtering, bearer handling and the error normalization
//! funnel, end to end.

use std::collections::HashMap;
use std::sync::OnceLock;

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use taskflow_ui::error::{format_api_error, is_auth_error, is_not_found_error, ApiError};
use taskflow_ui::models::{
    CategoryFilterDto, CreateCategoryDto, CreateTaskDto, TaskFilterDto, TaskLevel, TaskStatus,
    UpdateTaskDto, UserResponseDto,
};
use taskflow_ui::services::{auth, category, task};
use taskflow_ui::{api, token};

fn task_json(id: &str, title: &str, status: &str, level: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": null,
        "status": status,
        "level": level,
        "createdAt": "2024-01-01T10:00:00Z",
        "updatedAt": "2024-01-01T10:00:00Z",
    })
}

fn user_json() -> Value {
    json!({
        "id": "1",
        "username": "a",
        "email": "a@b.com",
        "createdAt": "2024-01-01T10:00:00Z",
        "updatedAt": "2024-01-01T10:00:00Z",
    })
}

async fn list_tasks(Query(params): Query<HashMap<String, String>>) -> Response {
    // Two magic search values let the suite provoke raw status codes.
    match params.get("search").map(String::as_str) {
        Some("boom") => return (StatusCode::INTERNAL_SERVER_ERROR, "").into_response(),
        Some("teapot") => return (StatusCode::IM_A_TEAPOT, "").into_response(),
        _ => {}
    }
    let all = vec![
        task_json("t1", "Préparer la démo", "IN_PROGRESS", "HIGH"),
        task_json("t2", "Relire le rapport", "IN_PROGRESS", "MEDIUM"),
        task_json("t3", "Archiver les notes", "COMPLETED", "LOW"),
    ];
    let filtered: Vec<Value> = all
        .into_iter()
        .filter(|t| params.get("status").map_or(true, |s| t["status"] == s.as_str()))
        .filter(|t| params.get("level").map_or(true, |l| t["level"] == l.as_str()))
        .collect();
    Json(filtered).into_response()
}

async fn create_task(Json(body): Json<Value>) -> Response {
    let title = body["title"].as_str().unwrap_or_default();
    if title.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": [{ "field": "title", "rule": "required" }] })),
        )
            .into_response();
    }
    let mut created = task_json("t-new", title, "NOT_STARTED", "MEDIUM");
    if let Some(status) = body["status"].as_str() {
        created["status"] = json!(status);
    }
    if let Some(level) = body["level"].as_str() {
        created["level"] = json!(level);
    }
    if let Some(description) = body["description"].as_str() {
        created["description"] = json!(description);
    }
    if let Some(category_id) = body["categoryId"].as_str() {
        created["categoryId"] = json!(category_id);
    }
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn get_task(Path(id): Path<String>) -> Response {
    if id == "t1" {
        Json(task_json("t1", "Préparer la démo", "IN_PROGRESS", "HIGH")).into_response()
    } else {
        (StatusCode::NOT_FOUND, "").into_response()
    }
}

async fn update_task(Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    if id != "t1" {
        return (StatusCode::NOT_FOUND, "").into_response();
    }
    let mut updated = task_json("t1", "Préparer la démo", "IN_PROGRESS", "HIGH");
    if let Some(title) = body["title"].as_str() {
        updated["title"] = json!(title);
    }
    if let Some(status) = body["status"].as_str() {
        updated["status"] = json!(status);
    }
    updated["updatedAt"] = json!("2024-01-02T09:00:00Z");
    Json(updated).into_response()
}

async fn delete_task(Path(id): Path<String>) -> Response {
    if id == "t1" {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "").into_response()
    }
}

fn category_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "createdAt": "2024-01-01T10:00:00Z",
        "updatedAt": "2024-01-01T10:00:00Z",
    })
}

async fn list_categories(Query(params): Query<HashMap<String, String>>) -> Response {
    let all = vec![category_json("c1", "Travail"), category_json("c2", "Maison")];
    let filtered: Vec<Value> = all
        .into_iter()
        .filter(|c| params.get("name").map_or(true, |n| c["name"] == n.as_str()))
        .collect();
    Json(filtered).into_response()
}

async fn create_category(Json(body): Json<Value>) -> Response {
    let name = body["name"].as_str().unwrap_or_default();
    if name.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": [{ "field": "name", "rule": "required" }] })),
        )
            .into_response();
    }
    (StatusCode::CREATED, Json(category_json("c-new", name))).into_response()
}

async fn delete_category(Path(id): Path<String>) -> Response {
    if id == "c1" {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "").into_response()
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "a@b.com" && body["password"] == "x" {
        Json(json!({ "user": user_json(), "token": "tok" })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Identifiants invalides" })),
        )
            .into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"].as_str().unwrap_or_default().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": [{ "field": "username", "rule": "required" }] })),
        )
            .into_response();
    }
    Json(json!({ "user": user_json(), "token": "tok-new" })).into_response()
}

async fn me(headers: HeaderMap) -> Response {
    match headers.get("authorization").and_then(|value| value.to_str().ok()) {
        Some("Bearer tok") => Json(user_json()).into_response(),
        _ => (StatusCode::UNAUTHORIZED, "").into_response(),
    }
}

fn app() -> Router {
    Router::new()
        .route("/api/v1/auth/login", axum::routing::post(login))
        .route("/api/v1/auth/register", axum::routing::post(register))
        .route("/api/v1/auth/me", get(me))
        .route("/api/v1/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/v1/tasks/{id}",
            get(get_task).patch(update_task).delete(delete_task),
        )
        .route("/api/v1/categories", get(list_categories).post(create_category))
        .route("/api/v1/categories/{id}", axum::routing::delete(delete_category))
}

static SERVER: OnceLock<()> = OnceLock::new();

/// Bind the mock server once for the whole binary and point the client's
/// base URL at it before any request goes out.
fn ensure_server() {
    SERVER.get_or_init(|| {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();
        std::env::set_var("TASKFLOW_API_URL", format!("http://{addr}/api/v1"));

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app()).await
            })
            .unwrap();
        });
    });
}

#[tokio::test]
async fn list_without_filter_returns_every_task() {
    ensure_server();
    let tasks = task::get_all_tasks(None).await.unwrap();
    assert_eq!(tasks.len(), 3);
    assert_eq!(tasks[0].id, "t1");
}

#[tokio::test]
async fn list_with_status_filter_returns_exactly_the_matching_tasks() {
    ensure_server();
    let filter = TaskFilterDto {
        status: Some(TaskStatus::InProgress),
        ..Default::default()
    };
    let tasks = task::get_all_tasks(Some(&filter)).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert!(tasks.iter().all(|t| t.status == TaskStatus::InProgress));
}

#[tokio::test]
async fn list_with_combined_filters_intersects_them() {
    ensure_server();
    let filter = TaskFilterDto {
        status: Some(TaskStatus::InProgress),
        level: Some(TaskLevel::High),
        ..Default::default()
    };
    let tasks = task::get_all_tasks(Some(&filter)).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, "t1");
}

#[tokio::test]
async fn get_task_by_id_decodes_the_entity() {
    ensure_server();
    let found = task::get_task_by_id("t1").await.unwrap();
    assert_eq!(found.title, "Préparer la démo");
    assert_eq!(found.status, TaskStatus::InProgress);
    assert_eq!(found.level, TaskLevel::High);
}

#[tokio::test]
async fn missing_task_surfaces_as_a_formatted_not_found() {
    ensure_server();
    let err = task::get_task_by_id("nope").await.unwrap_err();
    assert!(is_not_found_error(&err));
    assert_eq!(format_api_error(&err), "La ressource demandée est introuvable.");
}

#[tokio::test]
async fn create_task_echoes_the_created_entity() {
    ensure_server();
    let created = task::create_task(&CreateTaskDto {
        title: "Nouvelle tâche".to_string(),
        description: Some("Détails".to_string()),
        status: TaskStatus::NotStarted,
        level: TaskLevel::High,
        category_id: None,
    })
    .await
    .unwrap();
    assert_eq!(created.id, "t-new");
    assert_eq!(created.title, "Nouvelle tâche");
    assert_eq!(created.level, TaskLevel::High);
}

#[tokio::test]
async fn create_task_without_title_surfaces_the_validation_message() {
    ensure_server();
    let err = task::create_task(&CreateTaskDto {
        title: String::new(),
        description: None,
        status: TaskStatus::NotStarted,
        level: TaskLevel::Medium,
        category_id: None,
    })
    .await
    .unwrap_err();
    assert!(matches!(err, ApiError::Validation { status: 422, .. }));
    assert_eq!(format_api_error(&err), "Titre : Ce champ est obligatoire");
}

#[tokio::test]
async fn update_task_applies_the_partial_patch() {
    ensure_server();
    let update = UpdateTaskDto {
        title: Some("Titre revu".to_string()),
        status: Some(TaskStatus::Completed),
        ..Default::default()
    };
    let updated = task::update_task("t1", &update).await.unwrap();
    assert_eq!(updated.title, "Titre revu");
    assert_eq!(updated.status, TaskStatus::Completed);
    assert!(updated.updated_at > updated.created_at);
}

#[tokio::test]
async fn delete_task_succeeds_once_and_then_reports_not_found() {
    ensure_server();
    task::delete_task("t1").await.unwrap();
    let err = task::delete_task("gone").await.unwrap_err();
    assert!(is_not_found_error(&err));
    assert_eq!(format_api_error(&err), "La ressource demandée est introuvable.");
}

#[tokio::test]
async fn server_failure_maps_to_the_five_hundred_sentence() {
    ensure_server();
    let filter = TaskFilterDto {
        search: Some("boom".to_string()),
        ..Default::default()
    };
    let err = task::get_all_tasks(Some(&filter)).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        format_api_error(&err),
        "Une erreur serveur est survenue. Veuillez réessayer dans quelques instants."
    );
}

#[tokio::test]
async fn unmapped_status_falls_back_to_the_numeric_sentence() {
    ensure_server();
    let filter = TaskFilterDto {
        search: Some("teapot".to_string()),
        ..Default::default()
    };
    let err = task::get_all_tasks(Some(&filter)).await.unwrap_err();
    assert_eq!(format_api_error(&err), "Erreur 418 : Une erreur est survenue.");
}

#[tokio::test]
async fn categories_filter_by_name() {
    ensure_server();
    let all = category::get_all_categories(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let filter = CategoryFilterDto { name: Some("Travail".to_string()) };
    let filtered = category::get_all_categories(Some(&filter)).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Travail");
}

#[tokio::test]
async fn create_category_without_name_surfaces_the_validation_message() {
    ensure_server();
    let err = category::create_category(&CreateCategoryDto { name: String::new() })
        .await
        .unwrap_err();
    assert_eq!(format_api_error(&err), "Nom : Ce champ est obligatoire");
}

#[tokio::test]
async fn delete_category_is_not_retried_on_conflict() {
    ensure_server();
    category::delete_category("c1").await.unwrap();
    let err = category::delete_category("c9").await.unwrap_err();
    assert!(is_not_found_error(&err));
}

#[tokio::test]
async fn login_returns_the_session_payload() {
    ensure_server();
    let response = auth::login(&taskflow_ui::models::LoginDto {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
    })
    .await
    .unwrap();
    assert_eq!(response.user.username, "a");
    assert_eq!(response.token, "tok");
    // Off-browser the token store is a declared no-op, so nothing persists.
    assert!(!token::has_token());
}

#[tokio::test]
async fn login_failure_keeps_the_server_message_verbatim() {
    ensure_server();
    let err = auth::login(&taskflow_ui::models::LoginDto {
        email: "a@b.com".to_string(),
        password: "mauvais".to_string(),
    })
    .await
    .unwrap_err();
    assert!(is_auth_error(&err));
    assert_eq!(format_api_error(&err), "Identifiants invalides");
}

#[tokio::test]
async fn register_returns_the_session_payload() {
    ensure_server();
    let response = auth::register(&taskflow_ui::models::RegisterDto {
        username: "b".to_string(),
        email: "b@c.com".to_string(),
        password: "y".to_string(),
    })
    .await
    .unwrap();
    assert_eq!(response.token, "tok-new");
}

#[tokio::test]
async fn current_user_without_token_fails_before_any_request() {
    ensure_server();
    let err = auth::get_current_user().await.unwrap_err();
    assert_eq!(format_api_error(&err), "Non authentifié");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn unauthenticated_me_request_maps_to_the_auth_sentence() {
    ensure_server();
    // Straight through the client, bypassing the service's local token gate.
    let result: Result<UserResponseDto, ApiError> = api::get("/auth/me").await;
    let err = result.unwrap_err();
    assert!(is_auth_error(&err));
    assert_eq!(
        format_api_error(&err),
        "Vous devez vous connecter pour effectuer cette action."
    );
}
