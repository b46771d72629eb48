//! Category Form
//!
//! Shared by the create and edit screens; a single required, trimmed name.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{ErrorMessage, Loading};
use crate::context::{use_navigator, Screen};
use crate::error::format_api_error;
use crate::hooks::use_category;
use crate::models::{CreateCategoryDto, UpdateCategoryDto};
use crate::services::category as category_service;

#[component]
pub fn CategoryForm(
    #[prop(into)] initial_name: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<CreateCategoryDto>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
) -> impl IntoView {
    let (name, set_name) = signal(initial_name);
    let (local_error, set_local_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() {
            set_local_error.set(Some("Le nom est requis".to_string()));
            return;
        }
        set_local_error.set(None);
        on_submit.run(CreateCategoryDto { name: trimmed });
    };

    view! {
        <form class="card category-form" on:submit=submit>
            {move || local_error.get().map(|message| view! { <ErrorMessage message=message/> })}
            {move || error.get().map(|message| view! { <ErrorMessage message=message/> })}

            <div class="form-control">
                <label class="label">"Nom " <span class="required-mark">"*"</span></label>
                <input
                    type="text"
                    class="input input-bordered"
                    placeholder="Ex: Travail"
                    prop:value=move || name.get()
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {submit_label.clone()}
            </button>
        </form>
    }
}

#[component]
pub fn CategoryNew() -> impl IntoView {
    let nav = use_navigator();
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = Callback::new(move |data: CreateCategoryDto| {
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match category_service::create_category(&data).await {
                Ok(_) => nav.goto(Screen::Categories),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_submitting.set(false);
        });
    });

    view! {
        <div class="screen-header">
            <h1>"Nouvelle catégorie"</h1>
            <button class="btn btn-ghost" on:click=move |_| nav.goto(Screen::Categories)>
                "Retour"
            </button>
        </div>
        <CategoryForm
            initial_name=""
            submit_label="Créer"
            on_submit=on_submit
            error=error
            submitting=submitting
        />
    }
}

#[component]
pub fn CategoryEdit(id: String) -> impl IntoView {
    let nav = use_navigator();
    let id_signal = Signal::derive({
        let id = id.clone();
        move || id.clone()
    });
    let handle = use_category(id_signal);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let category_id = StoredValue::new(id);

    let on_submit = Callback::new(move |data: CreateCategoryDto| {
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            let id = category_id.get_value();
            let update = UpdateCategoryDto { name: Some(data.name) };
            match category_service::update_category(&id, &update).await {
                Ok(_) => nav.goto(Screen::Categories),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_submitting.set(false);
        });
    });

    view! {
        <div class="screen-header">
            <h1>"Modifier la catégorie"</h1>
            <button class="btn btn-ghost" on:click=move |_| nav.goto(Screen::Categories)>
                "Retour"
            </button>
        </div>
        {move || handle.error.get().map(|message| view! { <ErrorMessage message=message/> })}
        <Show when=move || !handle.is_loading.get() fallback=|| view! { <Loading/> }>
            {move || handle.category.get().map(|category| view! {
                <CategoryForm
                    initial_name=category.name.clone()
                    submit_label="Enregistrer"
                    on_submit=on_submit
                    error=error
                    submitting=submitting
                />
            })}
        </Show>
    }
}
