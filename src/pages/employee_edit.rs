//! Employee edit page: fetch, then pre-filled form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::employee_form::EmployeeForm;
use crate::components::layout::DashboardLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::components::spinner::Spinner;
use crate::net::types::Employee;

/// Employee edit page at `/employee/:id/edit`, admin-only.
#[component]
pub fn EditEmployeePage() -> impl IntoView {
    view! {
        <ProtectedRoute require_admin=true>
            <DashboardLayout>
                <section class="page">
                    <div class="card">
                        <div class="card__header">
                            <h4 class="card__title">"Edit Employee"</h4>
                        </div>
                        <div class="card__body">
                            <EditEmployeeLoader/>
                        </div>
                    </div>
                </section>
            </DashboardLayout>
        </ProtectedRoute>
    }
}

/// Fetches the record under edit. A failed fetch logs once and falls back
/// to the employee list.
#[component]
fn EditEmployeeLoader() -> impl IntoView {
    let params = use_params_map();
    let employee = RwSignal::new(None::<Employee>);
    let loading = RwSignal::new(true);

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
                        navigate("/employees", leptos_router::NavigateOptions::default());
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
        {move || {
            if loading.get() {
                return view! { <Spinner/> }.into_any();
            }
            employee
                .get()
                .map(|employee| view! { <EmployeeForm employee=employee/> })
                .into_any()
        }}
    }
}
