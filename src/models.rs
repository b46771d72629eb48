//! Frontend Models
//!
//! Data structures matching the TaskFlow API entities, plus the DTOs and
//! filters exchanged with it. Wire format is camelCase JSON; enums travel
//! as SCREAMING_SNAKE_CASE strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "NOT_STARTED",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
        }
    }

    /// Parse a wire/form value. Anything unrecognized (including the empty
    /// "all statuses" select option) maps to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NOT_STARTED" => Some(TaskStatus::NotStarted),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "COMPLETED" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskLevel {
    Low,
    Medium,
    High,
}

impl TaskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskLevel::Low => "LOW",
            TaskLevel::Medium => "MEDIUM",
            TaskLevel::High => "HIGH",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LOW" => Some(TaskLevel::Low),
            "MEDIUM" => Some(TaskLevel::Medium),
            "HIGH" => Some(TaskLevel::High),
            _ => None,
        }
    }
}

/// (value, label) pairs for the status select controls
pub const STATUS_OPTIONS: &[(TaskStatus, &str)] = &[
    (TaskStatus::NotStarted, "Non démarré"),
    (TaskStatus::InProgress, "En cours"),
    (TaskStatus::Completed, "Complété"),
];

/// (value, label) pairs for the priority select controls
pub const LEVEL_OPTIONS: &[(TaskLevel, &str)] = &[
    (TaskLevel::Low, "Faible"),
    (TaskLevel::Medium, "Moyen"),
    (TaskLevel::High, "Élevé"),
];

/// Task entity. `id` and the timestamps are assigned by the API and never
/// written client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub level: TaskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User as returned by the API. Responses never carry a password, so no
/// password-bearing user type exists client-side at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponseDto {
    pub user: UserResponseDto,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskDto {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub level: TaskLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Partial PATCH body. The nullable fields are double-`Option` so that
/// `Some(None)` serializes as an explicit `null` (clear the value) while
/// `None` omits the key entirely (leave it untouched).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<TaskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<String>>,
}

impl From<CreateTaskDto> for UpdateTaskDto {
    /// Full-field patch, as submitted by the edit form.
    fn from(data: CreateTaskDto) -> Self {
        UpdateTaskDto {
            title: Some(data.title),
            description: Some(data.description),
            status: Some(data.status),
            level: Some(data.level),
            category_id: Some(data.category_id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCategoryDto {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSort {
    CreatedAt,
    UpdatedAt,
}

impl TaskSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskSort::CreatedAt => "createdAt",
            TaskSort::UpdatedAt => "updatedAt",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Task list filter. A value type: hooks compare filters by value to decide
/// whether a change warrants a refetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilterDto {
    pub status: Option<TaskStatus>,
    pub level: Option<TaskLevel>,
    pub search: Option<String>,
    pub sort: Option<TaskSort>,
    pub order: Option<SortOrder>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TaskFilterDto {
    /// Exactly the populated fields, in declaration order, and nothing else.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.as_str().to_string()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str().to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilterDto {
    pub name: Option<String>,
}

impl CategoryFilterDto {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: None,
            status: TaskStatus::NotStarted,
            level: TaskLevel::Medium,
            category_id: None,
            created_at: "2024-01-01T10:00:00Z".parse().unwrap(),
            updated_at: "2024-01-01T10:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn status_uses_screaming_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::NotStarted).unwrap(),
            r#""NOT_STARTED""#
        );
        let status: TaskStatus = serde_json::from_str(r#""IN_PROGRESS""#).unwrap();
        assert_eq!(status, TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("COMPLETED"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::parse(""), None);
    }

    #[test]
    fn task_deserializes_from_camel_case() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t1",
                "title": "Rapport",
                "description": null,
                "status": "IN_PROGRESS",
                "level": "HIGH",
                "categoryId": "c1",
                "createdAt": "2024-01-01T10:00:00Z",
                "updatedAt": "2024-01-02T08:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(task.id, "t1");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.level, TaskLevel::High);
        assert_eq!(task.category_id.as_deref(), Some("c1"));
    }

    #[test]
    fn task_tolerates_missing_optional_fields() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "t2",
                "title": "Sans extras",
                "status": "NOT_STARTED",
                "level": "LOW",
                "createdAt": "2024-01-01T10:00:00Z",
                "updatedAt": "2024-01-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(task.description.is_none());
        assert!(task.category_id.is_none());
    }

    #[test]
    fn create_task_dto_serializes_camel_case_and_skips_missing_category() {
        let dto = CreateTaskDto {
            title: "Titre".to_string(),
            description: Some("Détails".to_string()),
            status: TaskStatus::NotStarted,
            level: TaskLevel::Low,
            category_id: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["title"], "Titre");
        assert_eq!(json["status"], "NOT_STARTED");
        assert!(json.get("categoryId").is_none());
    }

    #[test]
    fn update_task_dto_distinguishes_omitted_from_cleared() {
        let untouched = UpdateTaskDto {
            title: Some("Nouveau".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&untouched).unwrap();
        assert_eq!(json["title"], "Nouveau");
        assert!(json.get("description").is_none());

        let cleared = UpdateTaskDto {
            description: Some(None),
            category_id: Some(None),
            ..Default::default()
        };
        let json = serde_json::to_value(&cleared).unwrap();
        assert!(json["description"].is_null());
        assert!(json["categoryId"].is_null());
        assert!(json.get("title").is_none());
    }

    #[test]
    fn update_from_create_patches_every_field() {
        let update = UpdateTaskDto::from(CreateTaskDto {
            title: "T".to_string(),
            description: None,
            status: TaskStatus::Completed,
            level: TaskLevel::High,
            category_id: Some("c1".to_string()),
        });
        assert_eq!(update.title.as_deref(), Some("T"));
        assert_eq!(update.description, Some(None));
        assert_eq!(update.status, Some(TaskStatus::Completed));
        assert_eq!(update.category_id, Some(Some("c1".to_string())));
    }

    #[test]
    fn empty_filter_produces_no_query_pairs() {
        assert!(TaskFilterDto::default().to_query_pairs().is_empty());
        assert!(CategoryFilterDto::default().to_query_pairs().is_empty());
    }

    #[test]
    fn filter_sends_exactly_the_populated_fields_in_order() {
        let filter = TaskFilterDto {
            status: Some(TaskStatus::InProgress),
            search: Some("rapport".to_string()),
            limit: Some(20),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query_pairs(),
            vec![
                ("status", "IN_PROGRESS".to_string()),
                ("search", "rapport".to_string()),
                ("limit", "20".to_string()),
            ]
        );
    }

    #[test]
    fn full_filter_serializes_every_field() {
        let filter = TaskFilterDto {
            status: Some(TaskStatus::Completed),
            level: Some(TaskLevel::High),
            search: Some("x".to_string()),
            sort: Some(TaskSort::UpdatedAt),
            order: Some(SortOrder::Desc),
            page: Some(2),
            limit: Some(10),
        };
        let pairs = filter.to_query_pairs();
        assert_eq!(pairs.len(), 7);
        assert_eq!(pairs[3], ("sort", "updatedAt".to_string()));
        assert_eq!(pairs[4], ("order", "desc".to_string()));
    }

    #[test]
    fn filters_compare_by_value() {
        let a = TaskFilterDto {
            search: Some("même".to_string()),
            ..Default::default()
        };
        let b = TaskFilterDto {
            search: Some("même".to_string()),
            ..Default::default()
        };
        assert_eq!(a, b);
        assert_ne!(a, TaskFilterDto::default());
    }

    #[test]
    fn tasks_round_trip_through_json() {
        let task = make_task("t9");
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
