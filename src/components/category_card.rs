//! Category Card

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::Category;

#[component]
pub fn CategoryCard(
    category: Category,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let Category { id, name, created_at, .. } = category;
    let edit_id = id.clone();
    let delete_id = id.clone();
    let created = created_at.format("%d/%m/%Y").to_string();

    view! {
        <div class="card category-card" on:click=move |_| on_edit.run(edit_id.clone())>
            <div class="card-body">
                <h3 class="card-title">{name}</h3>
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
