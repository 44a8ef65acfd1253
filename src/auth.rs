use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};

use crate::error::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

pub const ADMIN_ROLE: &str = "admin";

/// Role of the caller as set by the gateway in front of the service
pub fn user_role(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(USER_ROLE_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
}

pub fn is_admin(headers: &HeaderMap) -> bool {
    user_role(headers)
        .map(|role| role.eq_ignore_ascii_case(ADMIN_ROLE))
        .unwrap_or(false)
}

/// Reject callers without the admin role before any handler runs
pub async fn require_admin_role(request: Request, next: Next) -> Result<Response, ApiError> {
    if !is_admin(request.headers()) {
        let user_id = request
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown");
        tracing::warn!(
            "Admin role required for {} {}, user {} has role {:?}",
            request.method(),
            request.uri().path(),
            user_id,
            user_role(request.headers())
        );
        return Err(ApiError::AdminRequired);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_is_admin() {
        let mut headers = HeaderMap::new();
        assert!(!is_admin(&headers));

        headers.insert(USER_ROLE_HEADER, HeaderValue::from_static("user"));
        assert!(!is_admin(&headers));

        headers.insert(USER_ROLE_HEADER, HeaderValue::from_static("admin"));
        assert!(is_admin(&headers));

        headers.insert(USER_ROLE_HEADER, HeaderValue::from_static(" Admin "));
        assert!(is_admin(&headers));
    }
}
