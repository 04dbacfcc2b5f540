use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::SolverError;

/// Bearer token required by the API when set and non-empty.
pub const API_TOKEN_ENV: &str = "QUIZSOLVER_API_TOKEN";

/// The configured token, if the server is protected.
fn expected_token() -> Option<String> {
    std::env::var(API_TOKEN_ENV).ok().filter(|t| !t.is_empty())
}

/// Check the `Authorization` header against `expected`. Without an expected
/// token every request passes.
pub fn check_bearer(headers: &HeaderMap, expected: Option<&str>) -> Result<(), SolverError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let header = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| SolverError::Unauthorized("missing Authorization header".into()))?
        .to_str()
        .map_err(|_| SolverError::Unauthorized("malformed Authorization header".into()))?;

    // Scheme is case-insensitive
    let token = match header.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => token.trim(),
        _ => return Err(SolverError::Unauthorized("expected a Bearer token".into())),
    };

    if token == expected {
        Ok(())
    } else {
        Err(SolverError::Unauthorized("invalid API token".into()))
    }
}

pub async fn api_auth_middleware(request: Request, next: Next) -> Result<Response, SolverError> {
    let expected = expected_token();
    if let Err(e) = check_bearer(request.headers(), expected.as_deref()) {
        warn!(path = %request.uri().path(), error = %e, "Rejected API request");
        return Err(e);
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(auth: Option<&str>) -> HeaderMap {
        let mut map = HeaderMap::new();
        if let Some(v) = auth {
            map.insert(AUTHORIZATION, HeaderValue::from_str(v).unwrap());
        }
        map
    }

    #[test]
    fn test_open_without_expected_token() {
        assert!(check_bearer(&headers(None), None).is_ok());
        assert!(check_bearer(&headers(Some("Bearer anything")), None).is_ok());
    }

    #[test]
    fn test_matching_token_accepted() {
        assert!(check_bearer(&headers(Some("Bearer s3cret")), Some("s3cret")).is_ok());
        assert!(check_bearer(&headers(Some("bearer s3cret")), Some("s3cret")).is_ok());
    }

    #[test]
    fn test_missing_or_wrong_token_rejected() {
        for auth in [None, Some("Bearer nope"), Some("Basic s3cret"), Some("s3cret")] {
            let err = check_bearer(&headers(auth), Some("s3cret")).unwrap_err();
            assert!(matches!(err, SolverError::Unauthorized(_)), "accepted {:?}", auth);
        }
    }
}
