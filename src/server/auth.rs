use crate::server::ApiError;
use axum::http::HeaderMap;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Header carrying the admin API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Check the admin API key on a write request.
///
/// With no key configured every write is refused. The comparison is
/// constant-time.
pub fn require_api_key(headers: &HeaderMap, expected: Option<&str>) -> Result<(), ApiError> {
    let Some(expected) = expected else {
        return Err(ApiError::Forbidden);
    };

    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if constant_time_compare(provided, expected) {
        Ok(())
    } else {
        warn!("Rejected write request with invalid API key");
        Err(ApiError::Unauthorized)
    }
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(key).unwrap());
        headers
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("secret123", "secret123"));
        assert!(!constant_time_compare("secret123", "secret124"));
        assert!(!constant_time_compare("secret123", "secret12"));
        assert!(!constant_time_compare("", "secret"));
    }

    #[test]
    fn test_matching_key_passes() {
        assert!(require_api_key(&headers("secret"), Some("secret")).is_ok());
    }

    #[test]
    fn test_wrong_key_is_unauthorized() {
        let err = require_api_key(&headers("guess"), Some("secret")).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = require_api_key(&HeaderMap::new(), Some("secret")).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_no_configured_key_is_forbidden() {
        let err = require_api_key(&headers("anything"), None).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }
}
