//! HTTP handler modules for the envlock API.
//!
//! Handlers are thin: they pull the caller out of the request, call the
//! lock registry or the interpreter, and wrap the result in a schema type.
//! Lock rules live in `envlock-core`, not here.

pub mod commands;
pub mod environments;
pub mod users;

use axum::http::HeaderMap;

use envlock_core::Holder;

use crate::error::ApiError;

/// Header carrying the caller's display identity on structured lock routes.
pub const CALLER_HEADER: &str = "X-Caller";

/// Extracts the caller identity from the `X-Caller` header.
///
/// The header must be present and valid UTF-8. An empty value is accepted
/// and used as-is.
pub fn extract_caller(headers: &HeaderMap) -> Result<Holder, ApiError> {
    let value = headers
        .get(CALLER_HEADER)
        .ok_or_else(|| ApiError::BadRequest(format!("{CALLER_HEADER} header required")))?;
    let caller = value
        .to_str()
        .map_err(|_| ApiError::BadRequest(format!("{CALLER_HEADER} header must be UTF-8")))?;
    Ok(Holder::from(caller))
}
