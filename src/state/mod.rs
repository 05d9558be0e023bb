//! Shared client-side state and pure domain logic.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `session`, `employee_form`, `stats`)
//! so individual components can depend on small focused models, and the
//! logic stays testable without a browser.

pub mod auth;
pub mod employee_form;
pub mod session;
pub mod stats;
