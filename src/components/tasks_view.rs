//! Tasks Screen
//!
//! Filter bar plus the task card grid, wired to `use_tasks`. Deletions
//! patch the cached list optimistically; a failed deletion logs and leaves
//! the cache untouched.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorMessage, Loading, TaskCard, TaskFilters};
use crate::context::{use_navigator, Screen};
use crate::error::format_api_error;
use crate::hooks::use_tasks;
use crate::models::TaskFilterDto;

#[component]
pub fn TasksView() -> impl IntoView {
    let nav = use_navigator();
    let (filter, set_filter) = signal(TaskFilterDto::default());
    let handle = use_tasks(filter.into());

    let on_open = Callback::new(move |id: String| nav.goto(Screen::TaskDetail(id)));
    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            if let Err(err) = handle.remove_task(&id).await {
                web_sys::console::error_1(
                    &format!("[Tasks] Suppression échouée : {}", format_api_error(&err)).into(),
                );
            }
        });
    });

    view! {
        <div class="screen-header">
            <h1>"Tâches"</h1>
            <button class="btn btn-primary" on:click=move |_| nav.goto(Screen::TaskNew)>
                "Nouvelle tâche"
            </button>
        </div>

        <TaskFilters filter=filter set_filter=set_filter/>

        {move || handle.error.get().map(|message| view! { <ErrorMessage message=message/> })}

        <Show when=move || !handle.is_loading.get() fallback=|| view! { <Loading/> }>
            <Show
                when=move || handle.tasks.with(|tasks| !tasks.is_empty())
                fallback=|| view! {
                    <p class="empty-state">"Aucune tâche ne correspond aux filtres."</p>
                }
            >
                <div class="card-grid">
                    <For
                        each=move || handle.tasks.get()
                        key=|task| (task.id.clone(), task.updated_at)
                        children=move |task| {
                            view! { <TaskCard task=task on_open=on_open on_delete=on_delete/> }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}
