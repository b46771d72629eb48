//! TaskFlow Frontend App
//!
//! Root component: builds the session and navigation contexts once, kicks
//! off the initial token check, then dispatches on the current screen. Every
//! screen except login/register sits behind the route guard and the
//! dashboard layout.

use leptos::prelude::*;

use crate::components::{
    CategoriesView, CategoryEdit, CategoryNew, Dashboard, DashboardLayout, LoginForm,
    RegisterForm, RequireAuth, TaskDetail, TaskEdit, TaskNew, TasksView,
};
use crate::context::{AuthContext, Navigator, Screen};
use crate::models::UserResponseDto;

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Dashboard);
    let nav = Navigator::new((screen, set_screen));

    let user = signal(None::<UserResponseDto>);
    let is_loading = signal(true);
    let auth = AuthContext::new(user, is_loading, nav);

    // One session and one navigator per process, shared with the whole tree.
    provide_context(nav);
    provide_context(auth);
    auth.init();

    view! {
        {move || match screen.get() {
            Screen::Login => view! { <LoginForm/> }.into_any(),
            Screen::Register => view! { <RegisterForm/> }.into_any(),
            protected => view! {
                <RequireAuth>
                    {
                        let protected = protected.clone();
                        view! {
                            <DashboardLayout>
                                {match protected {
                                    Screen::Tasks => view! { <TasksView/> }.into_any(),
                                    Screen::TaskNew => view! { <TaskNew/> }.into_any(),
                                    Screen::TaskDetail(id) => {
                                        view! { <TaskDetail id=id/> }.into_any()
                                    }
                                    Screen::TaskEdit(id) => {
                                        view! { <TaskEdit id=id/> }.into_any()
                                    }
                                    Screen::Categories => view! { <CategoriesView/> }.into_any(),
                                    Screen::CategoryNew => view! { <CategoryNew/> }.into_any(),
                                    Screen::CategoryEdit(id) => {
                                        view! { <CategoryEdit id=id/> }.into_any()
                                    }
                                    // Login and Register are handled above;
                                    // everything else is the dashboard.
                                    _ => view! { <Dashboard/> }.into_any(),
                                }}
                            </DashboardLayout>
                        }
                    }
                </RequireAuth>
            }
            .into_any(),
        }}
    }
}
