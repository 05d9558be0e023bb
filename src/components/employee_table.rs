//! Employee list table with admin-only salary and actions columns.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::spinner::Spinner;
use crate::net::types::{Employee, remove_employee};
use crate::state::auth::{AuthState, User};
use crate::util::browser;
use crate::util::format::group_thousands;

/// Employee list: fetches `/employees` on mount and renders a table.
///
/// Salary, edit/delete actions, and the Add Employee link only render for
/// admins. Delete asks for confirmation; on success the row is removed
/// from the local list, on failure the list is left unchanged and an alert
/// is shown.
#[component]
pub fn EmployeeTable() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let employees = RwSignal::new(Vec::<Employee>::new());
    let loading = RwSignal::new(true);

    let is_admin = move || auth.get().user.as_ref().is_some_and(User::is_admin);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let token = crate::state::session::token().unwrap_or_default();
        match crate::net::api::fetch_employees(&token).await {
            Ok(list) => employees.set(list),
            Err(err) => log::error!("failed to fetch employees: {err}"),
        }
        loading.set(false);
    });

    let on_delete = move |id: String| {
        if !is_admin() {
            return;
        }
        if !browser::confirm("Are you sure you want to delete this employee?") {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let token = crate::state::session::token().unwrap_or_default();
            match crate::net::api::delete_employee(&token, &id).await {
                Ok(()) => {
                    employees.update(|list| remove_employee(list, &id));
                    browser::alert("Employee deleted successfully");
                }
                Err(err) => {
                    log::error!("failed to delete employee {id}: {err}");
                    browser::alert("Failed to delete employee");
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h5 class="card__title">"Employee List"</h5>
                {move || {
                    is_admin()
                        .then(|| {
                            view! {
                                <a class="btn btn--primary btn--small" href="/employee/new">
                                    "Add Employee"
                                </a>
                            }
                        })
                }}
            </div>
            {move || {
                if loading.get() {
                    return view! { <Spinner/> }.into_any();
                }
                let admin = is_admin();
                let rows = employees
                    .get()
                    .into_iter()
                    .map(|employee| {
                        let id = employee.id.clone();
                        let detail_href = format!("/employee/{}", employee.id);
                        let edit_href = format!("/employee/{}/edit", employee.id);
                        view! {
                            <tr>
                                <td>
                                    <div class="employee-cell">
                                        <Avatar name=employee.name.clone()/>
                                        <div>
                                            <a class="employee-cell__name" href=detail_href>
                                                {employee.name.clone()}
                                            </a>
                                            <div class="employee-cell__email">{employee.email.clone()}</div>
                                        </div>
                                    </div>
                                </td>
                                <td>{employee.email.clone()}</td>
                                <td>{employee.position.clone()}</td>
                                <td>{employee.department.clone()}</td>
                                {admin
                                    .then(|| {
                                        view! { <td>{format!("${}", group_thousands(employee.salary))}</td> }
                                    })}
                                {admin
                                    .then(|| {
                                        let id = id.clone();
                                        view! {
                                            <td>
                                                <div class="btn-group">
                                                    <a class="btn btn--small" href=edit_href.clone() title="Edit">
                                                        "Edit"
                                                    </a>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        title="Delete"
                                                        on:click=move |_| on_delete(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </td>
                                        }
                                    })}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <div class="table-wrap">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Position"</th>
                                    <th>"Department"</th>
                                    {admin.then(|| view! { <th>"Salary"</th> })}
                                    {admin.then(|| view! { <th>"Actions"</th> })}
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
