//! Thin fetch helpers. All verbs include credentials so the session
//! cookie travels with every cross-origin call.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

use crate::config::endpoint;
use crate::error::{extract_detail, ApiError};

async fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let detail = extract_detail(&body)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    Err(ApiError::Status { status, detail })
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    tracing::debug!(path, "GET");
    let resp = Request::get(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    Ok(ensure_ok(resp).await?.json::<T>().await?)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    tracing::debug!(path, "POST");
    let resp = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .json(body)?
        .send()
        .await?;
    Ok(ensure_ok(resp).await?.json::<T>().await?)
}

/// POST with no request body, for endpoints like `/classes/{id}/meet`.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    tracing::debug!(path, "POST");
    let resp = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    Ok(ensure_ok(resp).await?.json::<T>().await?)
}

/// POST an `application/x-www-form-urlencoded` body (the login endpoint
/// speaks OAuth2 password form, not JSON).
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    fields: &[(&str, &str)],
) -> Result<T, ApiError> {
    tracing::debug!(path, "POST (form)");
    let encoded = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let resp = Request::post(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(encoded)?
        .send()
        .await?;
    Ok(ensure_ok(resp).await?.json::<T>().await?)
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    tracing::debug!(path, "PATCH");
    let resp = Request::patch(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .json(body)?
        .send()
        .await?;
    Ok(ensure_ok(resp).await?.json::<T>().await?)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    tracing::debug!(path, "DELETE");
    let resp = Request::delete(&endpoint(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await?;
    ensure_ok(resp).await?;
    Ok(())
}
