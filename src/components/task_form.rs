//! Task Form
//!
//! Shared by the create and edit screens. The form owns its fields and the
//! required-title validation; submission, error display and navigation
//! belong to the embedding screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{ErrorMessage, Loading};
use crate::context::{use_navigator, Screen};
use crate::error::format_api_error;
use crate::hooks::{use_categories, use_task};
use crate::models::{
    CategoryFilterDto, CreateTaskDto, Task, TaskLevel, TaskStatus, UpdateTaskDto,
    LEVEL_OPTIONS, STATUS_OPTIONS,
};
use crate::services::task as task_service;

#[component]
pub fn TaskForm(
    initial: Option<Task>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<CreateTaskDto>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    let (title, set_title) = signal(initial.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(initial.as_ref().and_then(|t| t.description.clone()).unwrap_or_default());
    let (status, set_status) =
        signal(initial.as_ref().map(|t| t.status).unwrap_or(TaskStatus::NotStarted));
    let (level, set_level) =
        signal(initial.as_ref().map(|t| t.level).unwrap_or(TaskLevel::Medium));
    let (category_id, set_category_id) =
        signal(initial.as_ref().and_then(|t| t.category_id.clone()));
    let (local_error, set_local_error) = signal(None::<String>);

    let categories = use_categories(Signal::derive(CategoryFilterDto::default));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = title.get().trim().to_string();
        if trimmed.is_empty() {
            set_local_error.set(Some("Le titre est requis".to_string()));
            return;
        }
        set_local_error.set(None);
        let text = description.get().trim().to_string();
        on_submit.run(CreateTaskDto {
            title: trimmed,
            description: if text.is_empty() { None } else { Some(text) },
            status: status.get(),
            level: level.get(),
            category_id: category_id.get(),
        });
    };

    view! {
        <form class="card task-form" on:submit=submit>
            {move || local_error.get().map(|message| view! { <ErrorMessage message=message/> })}
            {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}

            <div class="form-control">
                <label class="label">"Titre " <span class="required-mark">"*"</span></label>
                <input
                    type="text"
                    class="input input-bordered"
                    placeholder="Ex: Finaliser le rapport mensuel"
                    prop:value=move || title.get()
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_title.set(input.value());
                    }
                />
            </div>

            <div class="form-control">
                <label class="label">"Description"</label>
                <textarea
                    class="textarea textarea-bordered"
                    placeholder="Détails de la tâche..."
                    prop:value=move || description.get()
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_description.set(area.value());
                    }
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-control">
                    <label class="label">"Statut"</label>
                    <select
                        class="select select-bordered"
                        disabled=move || submitting.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            if let Some(parsed) = TaskStatus::parse(&select.value()) {
                                set_status.set(parsed);
                            }
                        }
                    >
                        {STATUS_OPTIONS.iter().map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option
                                    value=value.as_str()
                                    selected=move || status.get() == value
                                >
                                    {*label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-control">
                    <label class="label">"Priorité"</label>
                    <select
                        class="select select-bordered"
                        disabled=move || submitting.get()
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            if let Some(parsed) = TaskLevel::parse(&select.value()) {
                                set_level.set(parsed);
                            }
                        }
                    >
                        {LEVEL_OPTIONS.iter().map(|(value, label)| {
                            let value = *value;
                            view! {
                                <option
                                    value=value.as_str()
                                    selected=move || level.get() == value
                                >
                                    {*label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="form-control">
                <label class="label">"Catégorie"</label>
                <select
                    class="select select-bordered"
                    disabled=move || submitting.get()
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                        let value = select.value();
                        set_category_id.set(if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="" selected=move || category_id.get().is_none()>
                        "Aucune catégorie"
                    </option>
                    <For
                        each=move || categories.categories.get()
                        key=|category| category.id.clone()
                        children=move |category| {
                            let value = category.id.clone();
                            let current = value.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || {
                                        category_id.get().as_deref() == Some(current.as_str())
                                    }
                                >
                                    {category.name.clone()}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {submit_label.clone()}
            </button>
        </form>
    }
}

#[component]
pub fn TaskNew() -> impl IntoView {
    let nav = use_navigator();
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = Callback::new(move |data: CreateTaskDto| {
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match task_service::create_task(&data).await {
                Ok(created) => nav.goto(Screen::TaskDetail(created.id)),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_submitting.set(false);
        });
    });

    view! {
        <div class="screen-header">
            <h1>"Nouvelle tâche"</h1>
            <button class="btn btn-ghost" on:click=move |_| nav.goto(Screen::Tasks)>
                "Retour"
            </button>
        </div>
        <TaskForm
            initial=None
            submit_label="Créer"
            on_submit=on_submit
            error=error
            submitting=submitting
        />
    }
}

#[component]
pub fn TaskEdit(id: String) -> impl IntoView {
    let nav = use_navigator();
    let id_signal = Signal::derive({
        let id = id.clone();
        move || id.clone()
    });
    let handle = use_task(id_signal);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let task_id = StoredValue::new(id);

    let on_submit = Callback::new(move |data: CreateTaskDto| {
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let id = task_id.get_value();
            let update = UpdateTaskDto::from(data);
            match task_service::update_task(&id, &update).await {
                Ok(_) => nav.goto(Screen::TaskDetail(id)),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_submitting.set(false);
        });
    });

    view! {
        <div class="screen-header">
            <h1>"Modifier la tâche"</h1>
            <button class="btn btn-ghost" on:click=move |_| nav.goto(Screen::Tasks)>
                "Retour"
            </button>
        </div>
        {move || handle.error.get().map(|message| view! { <ErrorMessage message=message/> })}
        <Show when=move || !handle.is_loading.get() fallback=|| view! { <Loading/> }>
            {move || handle.task.get().map(|task| view! {
                <TaskForm
                    initial=Some(task)
                    submit_label="Enregistrer"
                    on_submit=on_submit
                    error=error
                    submitting=submitting
                />
            })}
        </Show>
    }
}
