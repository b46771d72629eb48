//! Register Screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{use_auth, use_navigator, Screen};
use crate::error::format_api_error;
use crate::models::RegisterDto;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let auth = use_auth();
    let nav = use_navigator();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = RegisterDto {
            username: username.get().trim().to_string(),
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if data.username.is_empty() || data.email.is_empty() || data.password.is_empty() {
            set_error.set(Some("Tous les champs sont requis".to_string()));
            return;
        }
        if data.password != confirm.get() {
            set_error.set(Some("Les mots de passe ne correspondent pas".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            if let Err(err) = auth.register(data).await {
                set_error.set(Some(format_api_error(&err)));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="card auth-form" on:submit=on_submit>
                <h1 class="card-title">"Inscription"</h1>
                {move || error.get().map(|message| view! {
                    <div class="alert alert-error"><span>{message}</span></div>
                })}
                <div class="form-control">
                    <label class="label">"Nom d'utilisateur"</label>
                    <input
                        type="text"
                        class="input input-bordered"
                        prop:value=move || username.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_username.set(input.value());
                        }
                    />
                </div>
                <div class="form-control">
                    <label class="label">"Email"</label>
                    <input
                        type="email"
                        class="input input-bordered"
                        placeholder="vous@exemple.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                        }
                    />
                </div>
                <div class="form-control">
                    <label class="label">"Mot de passe"</label>
                    <input
                        type="password"
                        class="input input-bordered"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                </div>
                <div class="form-control">
                    <label class="label">"Confirmer le mot de passe"</label>
                    <input
                        type="password"
                        class="input input-bordered"
                        prop:value=move || confirm.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_confirm.set(input.value());
                        }
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Inscription..." } else { "Créer un compte" }}
                </button>
                <p class="auth-switch">
                    "Déjà un compte ? "
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.goto(Screen::Login);
                        }
                    >
                        "Se connecter"
                    </a>
                </p>
            </form>
        </div>
    }
}
