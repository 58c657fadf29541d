//! Error classification logic

/// Map an HTTP status from the generation API to a failure class.
///
/// The class is only used for operator logs; every class ends in the same
/// fallback copy for the visitor.
pub(crate) fn classify_status(status: u16) -> &'static str {
    match status {
        400 | 422 => "invalid_request",
        401 => "authentication",
        403 => "permission_denied",
        404 => "not_found",
        408 | 504 => "timeout",
        413 => "request_too_large",
        429 => "rate_limited",
        503 | 529 => "overloaded",
        500..=599 => "server_error",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert_eq!(classify_status(400), "invalid_request");
        assert_eq!(classify_status(401), "authentication");
        assert_eq!(classify_status(403), "permission_denied");
        assert_eq!(classify_status(404), "not_found");
        assert_eq!(classify_status(413), "request_too_large");
        assert_eq!(classify_status(429), "rate_limited");
    }

    #[test]
    fn test_server_errors() {
        assert_eq!(classify_status(500), "server_error");
        assert_eq!(classify_status(502), "server_error");
        assert_eq!(classify_status(503), "overloaded");
        assert_eq!(classify_status(504), "timeout");
    }

    #[test]
    fn test_unexpected_status_is_other() {
        assert_eq!(classify_status(302), "other");
        assert_eq!(classify_status(418), "other");
    }
}
