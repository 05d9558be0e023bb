//! Backend base URL, baked in at build time via the `BACKEND_URL`
//! environment variable. Unset means same-origin relative paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub fn base_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

/// Absolute URL for an API path like `/employees`.
pub fn api_url(path: &str) -> String {
    join(base_url(), path)
}

pub(crate) fn join(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
