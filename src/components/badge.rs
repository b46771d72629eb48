//! Status and Priority Badges

use leptos::prelude::*;

use crate::models::{TaskLevel, TaskStatus};

#[component]
pub fn StatusBadge(status: TaskStatus) -> impl IntoView {
    let (label, class) = match status {
        TaskStatus::NotStarted => ("Non démarré", "badge badge-ghost"),
        TaskStatus::InProgress => ("En cours", "badge badge-warning"),
        TaskStatus::Completed => ("Complété", "badge badge-success"),
    };
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn LevelBadge(level: TaskLevel) -> impl IntoView {
    let (label, class) = match level {
        TaskLevel::Low => ("Faible", "badge badge-info"),
        TaskLevel::Medium => ("Moyen", "badge badge-warning"),
        TaskLevel::High => ("Élevé", "badge badge-error"),
    };
    view! { <span class=class>{label}</span> }
}
