//! Categories Screen
//!
//! Name filter plus the category card grid, wired to `use_categories`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{CategoryCard, ErrorMessage, Loading};
use crate::context::{use_navigator, Screen};
use crate::error::format_api_error;
use crate::hooks::use_categories;
use crate::models::CategoryFilterDto;

#[component]
pub fn CategoriesView() -> impl IntoView {
    let nav = use_navigator();
    let (filter, set_filter) = signal(CategoryFilterDto::default());
    let handle = use_categories(filter.into());

    let on_edit = Callback::new(move |id: String| nav.goto(Screen::CategoryEdit(id)));
    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            if let Err(err) = handle.remove_category(&id).await {
                web_sys::console::error_1(
                    &format!(
                        "[Categories] Suppression échouée : {}",
                        format_api_error(&err)
                    )
                    .into(),
                );
            }
        });
    });

    view! {
        <div class="screen-header">
            <h1>"Catégories"</h1>
            <button class="btn btn-primary" on:click=move |_| nav.goto(Screen::CategoryNew)>
                "Nouvelle catégorie"
            </button>
        </div>

        <div class="card filters-card">
            <div class="form-control">
                <label class="label">"Rechercher"</label>
                <input
                    type="text"
                    class="input input-bordered"
                    placeholder="Nom de la catégorie..."
                    prop:value=move || filter.get().name.unwrap_or_default()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let value = input.value();
                        set_filter.update(|f| {
                            f.name = if value.is_empty() { None } else { Some(value) };
                        });
                    }
                />
            </div>
        </div>

        {move || handle.error.get().map(|message| view! { <ErrorMessage message=message/> })}

        <Show when=move || !handle.is_loading.get() fallback=|| view! { <Loading/> }>
            <Show
                when=move || handle.categories.with(|categories| !categories.is_empty())
                fallback=|| view! { <p class="empty-state">"Aucune catégorie."</p> }
            >
                <div class="card-grid">
                    <For
                        each=move || handle.categories.get()
                        key=|category| (category.id.clone(), category.updated_at)
                        children=move |category| {
                            view! {
                                <CategoryCard
                                    category=category
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </Show>
    }
}
