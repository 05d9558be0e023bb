//! Thin wrappers over browser dialog and navigation APIs.
//!
//! Inert outside the browser build so shared code keeps compiling for
//! host-side tests.

/// Ask the user to confirm a destructive action. Answers `false` outside
/// the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Show a blocking message dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Step back one entry in the browser history.
pub fn go_back() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}

/// Percent-encode a value for use inside a URL query string. Passes the
/// value through unchanged outside the browser.
pub fn encode_uri_component(value: &str) -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::encode_uri_component(value).into()
    }
    #[cfg(not(feature = "csr"))]
    {
        value.to_owned()
    }
}

/// Full-page navigation via `window.location`, discarding all in-memory
/// state. Used by logout so every open view resets.
pub fn force_navigate(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}
