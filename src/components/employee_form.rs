//! Create/edit employee form with client-side field validation.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::types::Employee;
use crate::state::employee_form::{DEPARTMENTS, FieldErrors, FormFields};
use crate::util::browser;

/// Validated employee form.
///
/// Without an `employee` prop it creates via `POST /employees`; with one
/// it edits via `PUT /employees/:id`. Validation failures populate a
/// per-field error map and block submission; each error clears as soon as
/// its field is edited. API failures surface the server's message (or a
/// generic fallback) as a form-level alert; success navigates to
/// `/employees`.
#[component]
pub fn EmployeeForm(#[prop(optional)] employee: Option<Employee>) -> impl IntoView {
    let editing = employee.is_some();
    let employee_id = StoredValue::new(employee.as_ref().map(|e| e.id.clone()));
    let fields = RwSignal::new(
        employee
            .as_ref()
            .map_or_else(FormFields::default, FormFields::from_employee),
    );
    let errors = RwSignal::new(FieldErrors::default());
    let submit_error = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_error.set(String::new());

        let current = fields.get();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        #[cfg(feature = "csr")]
        {
            let draft = current.to_draft();
            let navigate = navigate.clone();
            saving.set(true);
            leptos::task::spawn_local(async move {
                let token = crate::state::session::token().unwrap_or_default();
                let result = match employee_id.get_value() {
                    Some(id) => crate::net::api::update_employee(&token, &id, &draft).await,
                    None => crate::net::api::create_employee(&token, &draft).await,
                };
                saving.set(false);
                match result {
                    Ok(()) => navigate("/employees", NavigateOptions::default()),
                    Err(err) => {
                        log::error!("failed to save employee: {err}");
                        submit_error.set(err.to_string());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &employee_id;
        }
    };

    let field_class = |error: Option<String>| {
        if error.is_some() {
            "form__input form__input--invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <form class="form" on:submit=on_submit novalidate=true>
            <Show when=move || !submit_error.get().is_empty()>
                <div class="form__alert" role="alert">
                    {submit_error}
                </div>
            </Show>

            <label class="form__label">
                "Name"
                <input
                    type="text"
                    class=move || field_class(errors.get().name)
                    placeholder="Enter employee name"
                    prop:value=move || fields.get().name
                    on:input=move |ev| {
                        fields.update(|f| f.name = event_target_value(&ev));
                        errors.update(|e| e.name = None);
                    }
                />
                {move || errors.get().name.map(|e| view! { <span class="form__error">{e}</span> })}
            </label>

            <label class="form__label">
                "Email"
                <input
                    type="email"
                    class=move || field_class(errors.get().email)
                    placeholder="Enter email address"
                    prop:value=move || fields.get().email
                    on:input=move |ev| {
                        fields.update(|f| f.email = event_target_value(&ev));
                        errors.update(|e| e.email = None);
                    }
                />
                {move || errors.get().email.map(|e| view! { <span class="form__error">{e}</span> })}
            </label>

            <label class="form__label">
                "Position"
                <input
                    type="text"
                    class=move || field_class(errors.get().position)
                    placeholder="Enter position"
                    prop:value=move || fields.get().position
                    on:input=move |ev| {
                        fields.update(|f| f.position = event_target_value(&ev));
                        errors.update(|e| e.position = None);
                    }
                />
                {move || errors.get().position.map(|e| view! { <span class="form__error">{e}</span> })}
            </label>

            <label class="form__label">
                "Department"
                <select
                    class=move || field_class(errors.get().department)
                    prop:value=move || fields.get().department
                    on:change=move |ev| {
                        fields.update(|f| f.department = event_target_value(&ev));
                        errors.update(|e| e.department = None);
                    }
                >
                    <option value="">"Select department"</option>
                    {DEPARTMENTS
                        .iter()
                        .map(|dept| view! { <option value=*dept>{*dept}</option> })
                        .collect::<Vec<_>>()}
                </select>
                {move || {
                    errors.get().department.map(|e| view! { <span class="form__error">{e}</span> })
                }}
            </label>

            <label class="form__label">
                "Salary"
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    class=move || field_class(errors.get().salary)
                    placeholder="Enter salary"
                    prop:value=move || fields.get().salary
                    on:input=move |ev| {
                        fields.update(|f| f.salary = event_target_value(&ev));
                        errors.update(|e| e.salary = None);
                    }
                />
                {move || errors.get().salary.map(|e| view! { <span class="form__error">{e}</span> })}
            </label>

            <div class="form__actions">
                <button
                    type="button"
                    class="btn"
                    disabled=saving
                    on:click=move |_| browser::go_back()
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn--primary" disabled=saving>
                    {move || {
                        match (editing, saving.get()) {
                            (true, true) => "Updating...",
                            (true, false) => "Update Employee",
                            (false, true) => "Creating...",
                            (false, false) => "Create Employee",
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
