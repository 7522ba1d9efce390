use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::error::ExtractionError;

/// The scheme an `Authorization` header must start with.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the API key from an `Authorization: ApiKey <token>` header.
///
/// Only the first `Authorization` value is read. Everything after the first space is
/// returned verbatim, so `ApiKey ` yields an empty key rather than an error.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ExtractionError> {
    let authorization = match headers.get(AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(ExtractionError::NoAuthHeader),
    };

    // Not visible ASCII: credentials were presented but can not be read.
    let authorization = authorization
        .to_str()
        .map_err(|_| ExtractionError::MalformedHeader)?;

    match authorization.split_once(' ') {
        Some((API_KEY_SCHEME, api_key)) => Ok(api_key),
        _ => Err(ExtractionError::MalformedHeader),
    }
}
