//! UI Components
//!
//! Screens and reusable Leptos components.

mod badge;
mod categories_view;
mod category_card;
mod category_form;
mod dashboard;
mod delete_confirm_button;
mod error_message;
mod layout;
mod loading;
mod login_form;
mod register_form;
mod require_auth;
mod task_card;
mod task_detail;
mod task_filters;
mod task_form;
mod tasks_view;

pub use badge::{LevelBadge, StatusBadge};
pub use categories_view::CategoriesView;
pub use category_card::CategoryCard;
pub use category_form::{CategoryEdit, CategoryForm, CategoryNew};
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_message::ErrorMessage;
pub use layout::DashboardLayout;
pub use loading::Loading;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use require_auth::RequireAuth;
pub use task_card::TaskCard;
pub use task_detail::TaskDetail;
pub use task_filters::TaskFilters;
pub use task_form::{TaskEdit, TaskForm, TaskNew};
pub use tasks_view::TasksView;
