//! Loading Spinner

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(optional, into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-wrap">
            <span class="loading loading-spinner"></span>
            {(!message.is_empty()).then(|| view! { <p class="loading-message">{message.clone()}</p> })}
        </div>
    }
}
