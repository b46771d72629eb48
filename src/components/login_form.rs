//! Login Screen

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::{use_auth, use_navigator, Screen};
use crate::error::format_api_error;
use crate::models::LoginDto;

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let nav = use_navigator();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginDto { email: email.get(), password: password.get() };
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            set_error.set(Some("Email et mot de passe sont requis".to_string()));
            return;
        }
        set_submitting.set(true);
        set_error.set(None);
        spawn_local(async move {
            if let Err(err) = auth.login(credentials).await {
                set_error.set(Some(format_api_error(&err)));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-screen">
            <form class="card auth-form" on:submit=on_submit>
                <h1 class="card-title">"Connexion"</h1>
                {move || error.get().map(|message| view! {
                    <div class="alert alert-error"><span>{message}</span></div>
                })}
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
                <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Connexion..." } else { "Se connecter" }}
                </button>
                <p class="auth-switch">
                    "Pas encore de compte ? "
                    <a
                        href="#"
                        on:click=move |ev| {
                            ev.prevent_default();
                            nav.goto(Screen::Register);
                        }
                    >
                        "S'inscrire"
                    </a>
                </p>
            </form>
        </div>
    }
}
