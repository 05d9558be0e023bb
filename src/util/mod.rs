//! Browser helpers shared across pages and components.

pub mod browser;
pub mod format;
