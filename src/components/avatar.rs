//! Round avatar image generated from a person's name.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

use crate::util::browser;

/// ui-avatars.com URL for a display name. The name is percent-encoded so
/// spaces and punctuation survive the query string.
fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=random",
        browser::encode_uri_component(name)
    )
}

/// Avatar sourced from the ui-avatars.com URL scheme.
#[component]
pub fn Avatar(name: String, #[prop(default = 32)] size: u32) -> impl IntoView {
    let src = avatar_url(&name);

    view! {
        <img class="avatar" src=src width=size height=size alt=name/>
    }
}
