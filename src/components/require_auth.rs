//! Route Guard
//!
//! Protects a screen behind the session: spinner while the initial check is
//! still running, redirect to login once the session resolves anonymous,
//! children once authenticated. The redirect must not fire while loading,
//! otherwise every hard refresh would flash through the login screen.

use leptos::prelude::*;

use crate::components::Loading;
use crate::context::{use_auth, use_navigator, Screen};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let nav = use_navigator();

    Effect::new(move |_| {
        if !auth.is_loading.get() && !auth.is_authenticated() {
            nav.goto(Screen::Login);
        }
    });

    view! {
        <Show
            when=move || !auth.is_loading.get() && auth.is_authenticated()
            fallback=|| view! { <Loading message="Vérification de la session..."/> }
        >
            {children()}
        </Show>
    }
}
