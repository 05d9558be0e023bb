//! Employee management page wrapping the list table.

use leptos::prelude::*;

use crate::components::employee_table::EmployeeTable;
use crate::components::layout::DashboardLayout;
use crate::components::protected_route::ProtectedRoute;

/// Employee list page at `/employees`, open to any signed-in role.
#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardLayout>
                <section class="page">
                    <h4 class="page__title">"Employee Management"</h4>
                    <EmployeeTable/>
                </section>
            </DashboardLayout>
        </ProtectedRoute>
    }
}
