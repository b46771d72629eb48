//! Task Service

use crate::api;
use crate::error::ApiError;
use crate::models::{CreateTaskDto, Task, TaskFilterDto, UpdateTaskDto};

/// List tasks, with optional server-side filtering.
pub async fn get_all_tasks(filter: Option<&TaskFilterDto>) -> Result<Vec<Task>, ApiError> {
    let pairs = filter.map(TaskFilterDto::to_query_pairs).unwrap_or_default();
    if pairs.is_empty() {
        api::get("/tasks").await
    } else {
        api::get_query("/tasks", &pairs).await
    }
}

pub async fn get_task_by_id(id: &str) -> Result<Task, ApiError> {
    api::get(&format!("/tasks/{}", id)).await
}

pub async fn create_task(data: &CreateTaskDto) -> Result<Task, ApiError> {
    api::post("/tasks", data).await
}

pub async fn update_task(id: &str, data: &UpdateTaskDto) -> Result<Task, ApiError> {
    api::patch(&format!("/tasks/{}", id), data).await
}

/// Delete never retries: a second delete of the same id surfaces the
/// server's error like any other failure.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    api::delete(&format!("/tasks/{}", id)).await
}
