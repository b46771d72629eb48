//! Task Card

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, LevelBadge, StatusBadge};
use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    #[prop(into)] on_open: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let Task { id, title, description, status, level, created_at, .. } = task;
    let open_id = id.clone();
    let delete_id = id.clone();
    let created = created_at.format("%d/%m/%Y").to_string();

    view! {
        <div class="card task-card" on:click=move |_| on_open.run(open_id.clone())>
            <div class="card-body">
                <div class="task-card-header">
                    <h3 class="card-title">{title}</h3>
                    <div class="task-card-badges">
                        <StatusBadge status=status/>
                        <LevelBadge level=level/>
                    </div>
                </div>
                {description.map(|text| view! { <p class="task-card-description">{text}</p> })}
                <div class="task-card-footer">
                    <span class="task-card-date">{created}</span>
                    <DeleteConfirmButton
                        button_class="btn btn-sm btn-ghost btn-error"
                        on_confirm=Callback::new(move |_| on_delete.run(delete_id.clone()))
                    />
                </div>
            </div>
        </div>
    }
}
