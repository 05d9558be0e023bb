//! Blocking loading indicator.

use leptos::prelude::*;

/// Centered spinner shown while auth state resolves or a page fetch is
/// outstanding.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__ring" role="status">
                <span class="spinner__label">"Loading..."</span>
            </div>
        </div>
    }
}
