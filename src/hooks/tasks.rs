//! Task Hooks

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cache;
use crate::error::{format_api_error, ApiError};
use crate::models::{CreateTaskDto, Task, TaskFilterDto, UpdateTaskDto};
use crate::services::task as task_service;

/// Cached task list plus its mutations. Copy, so closures can capture it
/// freely.
#[derive(Clone, Copy)]
pub struct TasksHandle {
    pub tasks: ReadSignal<Vec<Task>>,
    set_tasks: WriteSignal<Vec<Task>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
    set_reload: WriteSignal<u32>,
}

/// Fetch the task list whenever the filter changes by value, or on
/// `refetch`. A failed fetch stores the formatted error and keeps whatever
/// list was already cached.
pub fn use_tasks(filter: Signal<TaskFilterDto>) -> TasksHandle {
    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    // Memoized so an identical filter value never triggers a spurious fetch.
    let filter = Memo::new(move |_| filter.get());
    // Commit guard: a response only lands if no newer fetch started since.
    let fetch_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let current = filter.get();
        let _ = reload.get();
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = task_service::get_all_tasks(Some(&current)).await;
            if fetch_seq.get_value() != seq {
                // A newer fetch superseded this one; drop the stale result.
                return;
            }
            match result {
                Ok(data) => set_tasks.set(data),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_is_loading.set(false);
        });
    });

    TasksHandle { tasks, set_tasks, is_loading, error, set_reload }
}

impl TasksHandle {
    /// Create, then prepend the server's echo to the cached list.
    pub async fn add_task(self, data: &CreateTaskDto) -> Result<Task, ApiError> {
        let created = task_service::create_task(data).await?;
        self.set_tasks.update(|tasks| cache::prepend(tasks, created.clone()));
        Ok(created)
    }

    /// Update, then swap the cached entity for the server's echo.
    pub async fn modify_task(self, id: &str, data: &UpdateTaskDto) -> Result<Task, ApiError> {
        let updated = task_service::update_task(id, data).await?;
        self.set_tasks.update(|tasks| cache::replace_by_id(tasks, updated.clone()));
        Ok(updated)
    }

    pub async fn remove_task(self, id: &str) -> Result<(), ApiError> {
        task_service::delete_task(id).await?;
        self.set_tasks.update(|tasks| cache::remove_by_id(tasks, id));
        Ok(())
    }

    /// Unconditional re-fetch with the current filter.
    pub fn refetch(&self) {
        self.set_reload.update(|version| *version += 1);
    }
}

#[derive(Clone, Copy)]
pub struct TaskHandle {
    pub task: ReadSignal<Option<Task>>,
    pub is_loading: ReadSignal<bool>,
    pub error: ReadSignal<Option<String>>,
}

/// Fetch a single task, re-fetching when the id changes. An empty id keeps
/// the hook idle.
pub fn use_task(id: Signal<String>) -> TaskHandle {
    let (task, set_task) = signal(None::<Task>);
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let id = Memo::new(move |_| id.get());

    Effect::new(move |_| {
        let current = id.get();
        if current.is_empty() {
            return;
        }
        set_is_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match task_service::get_task_by_id(&current).await {
                Ok(data) => set_task.set(Some(data)),
                Err(err) => set_error.set(Some(format_api_error(&err))),
            }
            set_is_loading.set(false);
        });
    });

    TaskHandle { task, is_loading, error }
}
