// Reads the caller's calendar credential from the Authorization header.
//
// A missing header, a non-bearer scheme or an empty token all yield Credential::Absent, which
// routes the request to synthetic mode. Extraction never rejects a request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::modules::meeting_invoices::core::ports::{AccessToken, Credential};

const BEARER_PREFIX: &str = "Bearer ";

pub fn credential_from_headers(headers: &HeaderMap) -> Credential {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.split_at_checked(BEARER_PREFIX.len())?;
            scheme.eq_ignore_ascii_case(BEARER_PREFIX).then(|| token.trim())
        })
        .filter(|token| !token.is_empty())
        .map_or(Credential::Absent, |token| {
            Credential::Bearer(AccessToken::new(token))
        })
}

impl<S> FromRequestParts<S> for Credential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(credential_from_headers(&parts.headers))
    }
}
