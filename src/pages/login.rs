//! Login page with a credentials form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Login page at `/`.
///
/// Submits credentials to `/auth/signin`; on success persists the session
/// record and navigates to the dashboard. Failures surface as an inline
/// form-level error. Visitors who are already signed in are sent straight
/// to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let navigate = use_navigate();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    #[cfg(feature = "csr")]
    let nav_after_login = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let email_value = email.get();
            let password_value = password.get();
            let navigate = nav_after_login.clone();
            auth.update(|a| a.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email_value, &password_value).await {
                    Ok(data) => {
                        let session = crate::state::session::Session::new(
                            data.token,
                            data.user.email,
                            data.user.role,
                            crate::state::session::now_ms(),
                        );
                        crate::state::session::save(
                            &crate::state::session::BrowserStore,
                            &session,
                        );
                        auth.update(|a| {
                            a.user = Some(session.user());
                            a.loading = false;
                        });
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::error!("sign-in failed: {err}");
                        auth.update(|a| a.loading = false);
                        error.set(err.to_string());
                    }
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1 class="login-page__title">"HR System"</h1>
            <p class="login-page__subtitle">"Sign in to manage employee records"</p>
            <form class="login-page__form" on:submit=on_submit novalidate=true>
                <Show when=move || !error.get().is_empty()>
                    <div class="form__alert" role="alert">
                        {error}
                    </div>
                </Show>
                <label class="form__label">
                    "Email"
                    <input
                        type="email"
                        class="form__input"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Password"
                    <input
                        type="password"
                        class="form__input"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    type="submit"
                    class="btn btn--primary"
                    disabled=move || auth.get().loading
                >
                    {move || if auth.get().loading { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
