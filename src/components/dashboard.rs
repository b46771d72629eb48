//! Dashboard Screen
//!
//! Derived statistics over the unfiltered task cache, plus the most recent
//! and the outstanding high-priority tasks.

use leptos::prelude::*;

use crate::components::{ErrorMessage, Loading, StatusBadge};
use crate::context::{use_navigator, Screen};
use crate::hooks::use_tasks;
use crate::models::{Task, TaskFilterDto, TaskLevel, TaskStatus};

#[derive(Clone, Default, PartialEq)]
struct DashboardStats {
    total: usize,
    not_started: usize,
    in_progress: usize,
    completed: usize,
    high_priority: usize,
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let nav = use_navigator();
    let handle = use_tasks(Signal::derive(TaskFilterDto::default));

    let stats = Memo::new(move |_| {
        handle.tasks.with(|tasks| DashboardStats {
            total: tasks.len(),
            not_started: tasks.iter().filter(|t| t.status == TaskStatus::NotStarted).count(),
            in_progress: tasks.iter().filter(|t| t.status == TaskStatus::InProgress).count(),
            completed: tasks.iter().filter(|t| t.status == TaskStatus::Completed).count(),
            high_priority: tasks.iter().filter(|t| t.level == TaskLevel::High).count(),
        })
    });

    // Five most recent tasks
    let recent_tasks = Memo::new(move |_| {
        let mut tasks = handle.tasks.get();
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tasks.truncate(5);
        tasks
    });

    // Outstanding high-priority tasks
    let priority_tasks = Memo::new(move |_| {
        handle.tasks.with(|tasks| {
            tasks
                .iter()
                .filter(|t| t.level == TaskLevel::High && t.status != TaskStatus::Completed)
                .take(5)
                .cloned()
                .collect::<Vec<Task>>()
        })
    });

    view! {
        <div class="screen-header">
            <div>
                <h1>"Dashboard"</h1>
                <p class="screen-subtitle">"Vue d'ensemble de vos tâches"</p>
            </div>
            <button class="btn btn-primary" on:click=move |_| nav.goto(Screen::TaskNew)>
                "Nouvelle tâche"
            </button>
        </div>

        {move || handle.error.get().map(|message| view! { <ErrorMessage message=message/> })}

        <Show when=move || !handle.is_loading.get() fallback=|| view! { <Loading/> }>
            <div class="stats-grid">
                <div class="card stat-card stat-primary">
                    <div class="stat-title">"Total des tâches"</div>
                    <div class="stat-value">{move || stats.get().total}</div>
                    <div class="stat-desc">"Toutes les tâches"</div>
                </div>
                <div class="card stat-card stat-warning">
                    <div class="stat-title">"En cours"</div>
                    <div class="stat-value">{move || stats.get().in_progress}</div>
                    <div class="stat-desc">"Tâches actives"</div>
                </div>
                <div class="card stat-card stat-success">
                    <div class="stat-title">"Complétées"</div>
                    <div class="stat-value">{move || stats.get().completed}</div>
                    <div class="stat-desc">"Tâches terminées"</div>
                </div>
                <div class="card stat-card stat-error">
                    <div class="stat-title">"Priorité haute"</div>
                    <div class="stat-value">{move || stats.get().high_priority}</div>
                    <div class="stat-desc">
                        {move || format!("dont {} non démarrées", stats.get().not_started)}
                    </div>
                </div>
            </div>

            <div class="dashboard-columns">
                <section class="card dashboard-list">
                    <h2>"Tâches récentes"</h2>
                    <Show
                        when=move || recent_tasks.with(|tasks| !tasks.is_empty())
                        fallback=|| view! { <p class="empty-state">"Aucune tâche pour le moment."</p> }
                    >
                        <ul>
                            <For
                                each=move || recent_tasks.get()
                                key=|task| (task.id.clone(), task.updated_at)
                                children=move |task| {
                                    let id = task.id.clone();
                                    view! {
                                        <li
                                            class="dashboard-row"
                                            on:click=move |_| nav.goto(Screen::TaskDetail(id.clone()))
                                        >
                                            <span class="dashboard-row-title">{task.title.clone()}</span>
                                            <StatusBadge status=task.status/>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </section>

                <section class="card dashboard-list">
                    <h2>"Tâches prioritaires"</h2>
                    <Show
                        when=move || priority_tasks.with(|tasks| !tasks.is_empty())
                        fallback=|| view! { <p class="empty-state">"Rien d'urgent."</p> }
                    >
                        <ul>
                            <For
                                each=move || priority_tasks.get()
                                key=|task| (task.id.clone(), task.updated_at)
                                children=move |task| {
                                    let id = task.id.clone();
                                    view! {
                                        <li
                                            class="dashboard-row"
                                            on:click=move |_| nav.goto(Screen::TaskDetail(id.clone()))
                                        >
                                            <span class="dashboard-row-title">{task.title.clone()}</span>
                                            <StatusBadge status=task.status/>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </section>
            </div>
        </Show>
    }
}
