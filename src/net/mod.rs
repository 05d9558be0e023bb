//! HTTP client for the remote HR API: wire types, endpoint calls, errors,
//! and backend URL configuration.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
