//! Task Filter Bar
//!
//! Search, status and priority selects writing into the shared filter
//! signal. Clearing a select maps back to `None` so the field disappears
//! from the query string entirely.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::models::{TaskFilterDto, TaskLevel, TaskStatus, LEVEL_OPTIONS, STATUS_OPTIONS};

#[component]
pub fn TaskFilters(
    filter: ReadSignal<TaskFilterDto>,
    set_filter: WriteSignal<TaskFilterDto>,
) -> impl IntoView {
    view! {
        <div class="card filters-card">
            <div class="filters-grid">
                <div class="form-control">
                    <label class="label">"Rechercher"</label>
                    <input
                        type="text"
                        class="input input-bordered"
                        placeholder="Titre de la tâche..."
                        prop:value=move || filter.get().search.unwrap_or_default()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            let value = input.value();
                            set_filter.update(|f| {
                                f.search = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                </div>

                <div class="form-control">
                    <label class="label">"Statut"</label>
                    <select
                        class="select select-bordered"
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            let status = TaskStatus::parse(&select.value());
                            set_filter.update(|f| f.status = status);
                        }
                    >
                        <option value="" selected=move || filter.get().status.is_none()>
                            "Tous"
                        </option>
                        {STATUS_OPTIONS.iter().map(|(status, label)| {
                            let status = *status;
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=move || filter.get().status == Some(status)
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
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                            let level = TaskLevel::parse(&select.value());
                            set_filter.update(|f| f.level = level);
                        }
                    >
                        <option value="" selected=move || filter.get().level.is_none()>
                            "Toutes"
                        </option>
                        {LEVEL_OPTIONS.iter().map(|(level, label)| {
                            let level = *level;
                            view! {
                                <option
                                    value=level.as_str()
                                    selected=move || filter.get().level == Some(level)
                                >
                                    {*label}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-control filters-actions">
                    <button
                        class="btn btn-outline"
                        on:click=move |_| set_filter.set(TaskFilterDto::default())
                    >
                        "Réinitialiser"
                    </button>
                </div>
            </div>
        </div>
    }
}
