//! Access-control wrapper around a page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::{AuthState, GuardDecision, Role};

/// Route guard: renders its children only when the current auth state
/// satisfies the route's capability requirements.
///
/// While auth state is loading it renders a blocking spinner. Once
/// resolved it redirects unauthenticated visitors to `/` and
/// under-privileged visitors to `/dashboard`. Children are never rendered
/// while a redirect decision holds, so a denied page issues no fetches.
#[component]
pub fn ProtectedRoute(
    #[prop(optional)] require_admin: bool,
    #[prop(optional)] allowed_roles: Option<Vec<Role>>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let roles = StoredValue::new(allowed_roles);

    let decision = move || {
        roles.with_value(|allowed| auth.get().check_access(require_admin, allowed.as_deref()))
    };

    // Redirects are side effects, not render output.
    Effect::new(move || match decision() {
        GuardDecision::RedirectLogin => navigate("/", NavigateOptions::default()),
        GuardDecision::RedirectDashboard => navigate("/dashboard", NavigateOptions::default()),
        GuardDecision::Wait | GuardDecision::Allow => {}
    });

    view! {
        {move || match decision() {
            GuardDecision::Allow => children(),
            GuardDecision::Wait => view! { <Spinner/> }.into_any(),
            GuardDecision::RedirectLogin | GuardDecision::RedirectDashboard => ().into_any(),
        }}
    }
}
