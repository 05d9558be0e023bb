//! Dashboard page with aggregate employee statistics.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::layout::DashboardLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::components::spinner::Spinner;
use crate::state::stats::DashboardStats;
use crate::util::format::group_thousands;

/// Dashboard page at `/dashboard`, open to any signed-in role.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <DashboardLayout>
                <DashboardContent/>
            </DashboardLayout>
        </ProtectedRoute>
    }
}

/// Fetches the employee list and renders the aggregate views. Statistics
/// are recomputed in full on every fetch; a failed fetch logs once and
/// degrades to the empty state.
#[component]
fn DashboardContent() -> impl IntoView {
    let employees = LocalResource::new(|| async move {
        let token = crate::state::session::token().unwrap_or_default();
        match crate::net::api::fetch_employees(&token).await {
            Ok(list) => list,
            Err(err) => {
                log::error!("failed to fetch employees: {err}");
                Vec::new()
            }
        }
    });

    view! {
        <section class="dashboard">
            <Suspense fallback=move || view! { <Spinner/> }>
                {move || {
                    employees
                        .get()
                        .map(|list| {
                            let stats = DashboardStats::from_employees(&list);
                            view! {
                                <div class="dashboard__body">
                                    <div class="dashboard__cards">
                                        <div class="stat-card">
                                            <span class="stat-card__title">"Total Employees"</span>
                                            <span class="stat-card__value">{stats.total_employees}</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__title">"Average Salary"</span>
                                            <span class="stat-card__value">
                                                {format!("${}", group_thousands(stats.average_salary))}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="dashboard__tables">
                                        <div class="card">
                                            <div class="card__header">
                                                <h5 class="card__title">"Employees by Department"</h5>
                                            </div>
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"Department"</th>
                                                        <th>"Employees"</th>
                                                        <th>"Avg. Salary"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {stats
                                                        .departments
                                                        .iter()
                                                        .map(|(department, dept_stats)| {
                                                            view! {
                                                                <tr>
                                                                    <td>{department.clone()}</td>
                                                                    <td>{dept_stats.count}</td>
                                                                    <td>
                                                                        {format!(
                                                                            "${}",
                                                                            group_thousands(dept_stats.average_salary),
                                                                        )}
                                                                    </td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        </div>

                                        <div class="card">
                                            <div class="card__header">
                                                <h5 class="card__title">"Recent Hires"</h5>
                                            </div>
                                            <table class="table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Department"</th>
                                                        <th>"Position"</th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {stats
                                                        .recent_hires
                                                        .iter()
                                                        .map(|employee| {
                                                            view! {
                                                                <tr>
                                                                    <td>
                                                                        <div class="employee-cell">
                                                                            <Avatar name=employee.name.clone() size=24/>
                                                                            {employee.name.clone()}
                                                                        </div>
                                                                    </td>
                                                                    <td>{employee.department.clone()}</td>
                                                                    <td>{employee.position.clone()}</td>
                                                                </tr>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
