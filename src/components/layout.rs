//! Dashboard Layout
//!
//! Sidebar navigation plus the main content area, shown on every protected
//! screen.

use leptos::prelude::*;

use crate::context::{use_auth, use_navigator, Screen};

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let nav = use_navigator();

    let username = move || {
        auth.user
            .with(|user| user.as_ref().map(|user| user.username.clone()))
            .unwrap_or_default()
    };

    let in_dashboard = move || matches!(nav.screen.get(), Screen::Dashboard);
    let in_tasks = move || {
        matches!(
            nav.screen.get(),
            Screen::Tasks | Screen::TaskNew | Screen::TaskDetail(_) | Screen::TaskEdit(_)
        )
    };
    let in_categories = move || {
        matches!(
            nav.screen.get(),
            Screen::Categories | Screen::CategoryNew | Screen::CategoryEdit(_)
        )
    };

    view! {
        <div class="app-layout">
            <aside class="sidebar">
                <h2 class="sidebar-title">"TaskFlow"</h2>
                <nav class="sidebar-nav">
                    <button
                        class=move || if in_dashboard() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| nav.goto(Screen::Dashboard)
                    >
                        "Dashboard"
                    </button>
                    <button
                        class=move || if in_tasks() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| nav.goto(Screen::Tasks)
                    >
                        "Tâches"
                    </button>
                    <button
                        class=move || if in_categories() { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| nav.goto(Screen::Categories)
                    >
                        "Catégories"
                    </button>
                </nav>
                <div class="sidebar-footer">
                    <span class="sidebar-user">{username}</span>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| auth.logout()>
                        "Déconnexion"
                    </button>
                </div>
            </aside>
            <main class="main-content">{children()}</main>
        </div>
    }
}
