//! Employee detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::protected_route::ProtectedRoute;
use crate::components::spinner::Spinner;
use crate::net::types::Employee;
use crate::state::auth::{AuthState, User};
use crate::util::format::group_thousands;

/// Employee detail page at `/employee/:id`, open to any signed-in role.
/// Salary and the Edit action only render for admins.
#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <EmployeeDetail/>
        </ProtectedRoute>
    }
}

/// Fetches one record by the route's `id` parameter. A failed fetch logs
/// once and redirects to the dashboard.
#[component]
fn EmployeeDetail() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let employee = RwSignal::new(None::<Employee>);
    let loading = RwSignal::new(true);

    let is_admin = move || auth.get().user.as_ref().is_some_and(User::is_admin);

    #[cfg(feature = "csr")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            let Some(id) = params.read().get("id") else {
                return;
            };
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let token = crate::state::session::token().unwrap_or_default();
                match crate::net::api::fetch_employee(&token, &id).await {
                    Ok(found) => employee.set(Some(found)),
                    Err(err) => {
                        log::error!("failed to fetch employee {id}: {err}");
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                }
                loading.set(false);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &params;
    }

    view! {
        <div class="page page--detail">
            {move || {
                if loading.get() {
                    return view! { <Spinner/> }.into_any();
                }
                employee
                    .get()
                    .map(|employee| {
                        let edit_href = format!("/employee/{}/edit", employee.id);
                        view! {
                            <div class="detail-wrap">
                                <div class="card">
                                    <div class="card__header">
                                        <div>
                                            <h4 class="card__title">"Employee Information"</h4>
                                            <small class="card__subtitle">
                                                "Personal details and information"
                                            </small>
                                        </div>
                                        {is_admin()
                                            .then(|| {
                                                view! {
                                                    <a class="btn btn--primary" href=edit_href>
                                                        "Edit"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                    <dl class="detail">
                                        <dt>"Full name"</dt>
                                        <dd>{employee.name.clone()}</dd>
                                        <dt>"Email"</dt>
                                        <dd>{employee.email.clone()}</dd>
                                        <dt>"Position"</dt>
                                        <dd>{employee.position.clone()}</dd>
                                        <dt>"Department"</dt>
                                        <dd>{employee.department.clone()}</dd>
                                        {is_admin()
                                            .then(|| {
                                                view! {
                                                    <dt>"Salary"</dt>
                                                    <dd>
                                                        {format!("${}", group_thousands(employee.salary))}
                                                    </dd>
                                                }
                                            })}
                                    </dl>
                                </div>
                                <a class="btn page__back" href="/dashboard">
                                    "Back to Dashboard"
                                </a>
                            </div>
                        }
                    })
                    .into_any()
            }}
        </div>
    }
}
