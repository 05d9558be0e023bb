//! Presentational and access-control components shared by the pages.

pub mod avatar;
pub mod employee_form;
pub mod employee_table;
pub mod layout;
pub mod protected_route;
pub mod spinner;
