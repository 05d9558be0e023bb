//! Shared dashboard chrome: sidebar navigation, user chip, and logout.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::avatar::Avatar;
use crate::state::auth::{AuthState, User};

/// Sidebar + content layout wrapped around every authenticated page.
///
/// Navigation shows Dashboard and Employees for everyone and Add Employee
/// for admins. Logout best-effort notifies the API, clears the session
/// record, and forces a full navigation to `/` so all in-flight view state
/// is discarded.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let link_class = move |path: &str| {
        if pathname.get() == path {
            "sidebar__link sidebar__link--active"
        } else {
            "sidebar__link"
        }
    };

    let is_admin = move || auth.get().user.as_ref().is_some_and(User::is_admin);
    let user_name = move || auth.get().user.map_or_else(String::new, |u| u.name);

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                let token = crate::state::session::token().unwrap_or_default();
                crate::net::api::sign_out(&token).await;
                crate::state::session::clear(&crate::state::session::BrowserStore);
                auth.update(|a| a.user = None);
                crate::util::browser::force_navigate("/");
            });
        }
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar__brand">"HR System"</div>
                <nav class="sidebar__nav">
                    <a href="/dashboard" class=move || link_class("/dashboard")>
                        "Dashboard"
                    </a>
                    <a href="/employees" class=move || link_class("/employees")>
                        "Employees"
                    </a>
                    <Show when=is_admin>
                        <a href="/employee/new" class=move || link_class("/employee/new")>
                            "Add Employee"
                        </a>
                    </Show>
                </nav>
                <div class="sidebar__user">
                    {move || view! { <Avatar name=user_name() size=32/> }}
                    <span class="sidebar__user-name">{user_name}</span>
                    <button class="sidebar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </aside>
            <main class="layout__content">{children()}</main>
        </div>
    }
}
