//! Page shells: each composes the route guard, the shared layout, and a
//! content component that owns its own fetch state.

pub mod dashboard;
pub mod employee_detail;
pub mod employee_edit;
pub mod employee_new;
pub mod employees;
pub mod login;
