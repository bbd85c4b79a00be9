use api::session::token_from_cookie_header;
use api::SessionToken;
use axum::http::{header, HeaderMap};

/// Read the session token out of the request's `Cookie` header.
pub fn session_token(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_cookie_header)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(session_token(&headers).is_none());

        headers.insert(header::COOKIE, "theme=dark; auth-token=tok".parse().unwrap());
        assert_eq!(session_token(&headers), Some(SessionToken::new("tok")));
    }
}
