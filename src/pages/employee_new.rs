//! Employee creation page.

use leptos::prelude::*;

use crate::components::employee_form::EmployeeForm;
use crate::components::layout::DashboardLayout;
use crate::components::protected_route::ProtectedRoute;

/// Employee creation page at `/employee/new`, admin-only.
#[component]
pub fn NewEmployeePage() -> impl IntoView {
    view! {
        <ProtectedRoute require_admin=true>
            <DashboardLayout>
                <section class="page">
                    <div class="card">
                        <div class="card__header">
                            <h4 class="card__title">"Add New Employee"</h4>
                        </div>
                        <div class="card__body">
                            <EmployeeForm/>
                        </div>
                    </div>
                </section>
            </DashboardLayout>
        </ProtectedRoute>
    }
}
