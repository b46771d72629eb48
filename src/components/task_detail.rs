//! Task Detail Screen

use leptos::prelude::*;

use crate::components::{ErrorMessage, LevelBadge, Loading, StatusBadge};
use crate::context::{use_navigator, Screen};
use crate::hooks::{use_categories, use_task};
use crate::models::CategoryFilterDto;

#[component]
pub fn TaskDetail(id: String) -> impl IntoView {
    let nav = use_navigator();
    let id_signal = Signal::derive({
        let id = id.clone();
        move || id.clone()
    });
    let handle = use_task(id_signal);

    // The task only stores a category id; resolve its name from the
    // category cache when there is one.
    let categories = use_categories(Signal::derive(CategoryFilterDto::default));

    view! {
        {move || handle.error.get().map(|message| view! { <ErrorMessage message=message/> })}
        <Show when=move || !handle.is_loading.get() fallback=|| view! { <Loading/> }>
            {move || handle.task.get().map(|task| {
                let edit_id = task.id.clone();
                let category_name = task.category_id.as_deref().and_then(|category_id| {
                    categories.categories.with(|list| {
                        list.iter()
                            .find(|category| category.id == category_id)
                            .map(|category| category.name.clone())
                    })
                });
                view! {
                    <div class="card task-detail">
                        <div class="screen-header">
                            <h1>{task.title.clone()}</h1>
                            <div class="screen-actions">
                                <button
                                    class="btn btn-outline"
                                    on:click=move |_| nav.goto(Screen::TaskEdit(edit_id.clone()))
                                >
                                    "Modifier"
                                </button>
                                <button
                                    class="btn btn-ghost"
                                    on:click=move |_| nav.goto(Screen::Tasks)
                                >
                                    "Retour"
                                </button>
                            </div>
                        </div>
                        <div class="task-card-badges">
                            <StatusBadge status=task.status/>
                            <LevelBadge level=task.level/>
                            {category_name.map(|name| view! {
                                <span class="badge badge-outline">{name}</span>
                            })}
                        </div>
                        {task.description.clone().map(|text| view! {
                            <p class="task-detail-description">{text}</p>
                        })}
                        <div class="task-detail-meta">
                            <p>
                                "Créée le "
                                {task.created_at.format("%d/%m/%Y à %H:%M").to_string()}
                            </p>
                            <p>
                                "Mise à jour le "
                                {task.updated_at.format("%d/%m/%Y à %H:%M").to_string()}
                            </p>
                        </div>
                    </div>
                }
            })}
        </Show>
    }
}
