//! Error Alert

use leptos::prelude::*;

/// One formatted error sentence (or bulleted list) in an alert box.
/// Multi-line validation messages keep their line breaks via CSS.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="alert alert-error error-message">
            <span>{message}</span>
        </div>
    }
}
