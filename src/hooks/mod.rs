//! Entity Hooks
//!
//! One fetch result cached in component state, with optimistic mutations
//! patching the list in place and a manual refetch escape hatch.

mod categories;
mod tasks;

pub use categories::{use_categories, use_category, CategoriesHandle, CategoryHandle};
pub use tasks::{use_task, use_tasks, TaskHandle, TasksHandle};
