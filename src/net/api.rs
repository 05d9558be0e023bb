//! REST calls against the HR backend.
//!
//! Browser build (`csr`): real HTTP via `gloo-net`. Host build: stubs
//! returning [`ApiError::Network`] so pure logic keeps compiling and unit
//! tests run without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call is an explicit async function returning `Result`, so the
//! fetch lifecycle is visible at the call site. Non-success HTTP statuses
//! surface the server's `message` field when present; transport failures
//! become [`ApiError::Network`]. Nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{ApiEnvelope, Employee, EmployeeDraft, SigninData};

#[cfg(feature = "csr")]
use crate::net::config::api_url;

/// `Authorization` header value for a stored bearer token.
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Unwrap a `{success, data}` envelope, treating `success: false` as an
/// API failure even when the HTTP status was 2xx.
fn unwrap_envelope<T>(envelope: ApiEnvelope<T>, status: u16, fallback: &str) -> Result<T, ApiError> {
    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(ApiError::Api {
            status,
            message: fallback.to_owned(),
        })
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

/// Exchange credentials for a token via `POST /auth/signin`.
///
/// # Errors
///
/// Fails when the API rejects the credentials, is unreachable, or answers
/// with a malformed body. The caller surfaces the error; nothing is stored
/// on failure.
pub async fn sign_in(email: &str, password: &str) -> Result<SigninData, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&api_url("/auth/signin"))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_body(resp.status(), &text, "Login failed"));
        }
        let envelope: ApiEnvelope<SigninData> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        unwrap_envelope(envelope, resp.status(), "Login failed")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(unavailable())
    }
}

/// Best-effort `POST /auth/signout`. The session record is cleared by the
/// caller regardless of the outcome.
pub async fn sign_out(token: &str) {
    #[cfg(feature = "csr")]
    {
        let result = gloo_net::http::Request::post(&api_url("/auth/signout"))
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(err) = result {
            log::warn!("sign-out request failed: {err}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// List all employees via `GET /employees`.
///
/// # Errors
///
/// Fails on transport errors, non-success statuses, or a body that does
/// not carry the `{success, data}` envelope.
pub async fn fetch_employees(token: &str) -> Result<Vec<Employee>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url("/employees"))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_body(
                resp.status(),
                &text,
                "Failed to fetch employees",
            ));
        }
        let envelope: ApiEnvelope<Vec<Employee>> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        unwrap_envelope(envelope, resp.status(), "Failed to fetch employees")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(unavailable())
    }
}

/// Fetch one employee via `GET /employees/:id`.
///
/// # Errors
///
/// Same failure modes as [`fetch_employees`].
pub async fn fetch_employee(token: &str, id: &str) -> Result<Employee, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&api_url(&format!("/employees/{id}")))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_body(
                resp.status(),
                &text,
                "Failed to fetch employee",
            ));
        }
        let envelope: ApiEnvelope<Employee> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        unwrap_envelope(envelope, resp.status(), "Failed to fetch employee")
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(unavailable())
    }
}

/// Create an employee via `POST /employees`. Only the mutable draft fields
/// are sent; the server assigns `_id` and timestamps.
///
/// # Errors
///
/// Non-success statuses surface the server's `message` or a generic
/// save failure.
pub async fn create_employee(token: &str, draft: &EmployeeDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        submit_draft(gloo_net::http::Request::post(&api_url("/employees")), token, draft).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, draft);
        Err(unavailable())
    }
}

/// Update an employee via `PUT /employees/:id`.
///
/// # Errors
///
/// Same failure modes as [`create_employee`].
pub async fn update_employee(token: &str, id: &str, draft: &EmployeeDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        submit_draft(
            gloo_net::http::Request::put(&api_url(&format!("/employees/{id}"))),
            token,
            draft,
        )
        .await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id, draft);
        Err(unavailable())
    }
}

#[cfg(feature = "csr")]
async fn submit_draft(
    builder: gloo_net::http::RequestBuilder,
    token: &str,
    draft: &EmployeeDraft,
) -> Result<(), ApiError> {
    let resp = builder
        .header("Authorization", &bearer(token))
        .json(draft)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_body(
            resp.status(),
            &text,
            "Failed to save employee",
        ));
    }
    Ok(())
}

/// Delete an employee via `DELETE /employees/:id`. Success requires both a
/// 2xx status and `success: true` in the body.
///
/// # Errors
///
/// Surfaces the server's `message` or a generic delete failure.
pub async fn delete_employee(token: &str, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&api_url(&format!("/employees/{id}")))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let success = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| v.get("success").and_then(serde_json::Value::as_bool))
            .unwrap_or(false);
        if !resp.ok() || !success {
            return Err(ApiError::from_body(
                status,
                &text,
                "Failed to delete employee",
            ));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, id);
        Err(unavailable())
    }
}
