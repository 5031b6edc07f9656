//! Admin session transport: `admin_session` cookie or bearer token

use crate::domain::auth::{AuthenticatedUser, SessionManager, SESSION_COOKIE};
use axum::http::{header, HeaderMap};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::time::Duration;

/// Session token from the `Authorization` header or the session cookie
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }
    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Signed-in administrator, if the request carries a valid session
pub fn current_user(headers: &HeaderMap, sessions: &SessionManager) -> Option<AuthenticatedUser> {
    let token = session_token(headers)?;
    match sessions.verify(&token) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!("Rejected admin session: {}", e);
            None
        }
    }
}

fn base_cookie(value: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}

/// Cookie storing a session token for `ttl`
pub fn session_cookie(token: &str, ttl: Duration) -> Cookie<'static> {
    let mut cookie = base_cookie(token.to_string());
    let secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
    cookie.set_max_age(time::Duration::seconds(secs));
    cookie
}

/// Jar update expiring the session cookie
pub fn clear_session(jar: CookieJar) -> CookieJar {
    let mut cookie = base_cookie(String::new());
    cookie.make_removal();
    jar.add(cookie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; admin_session=abc.def.ghi"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("admin_session=cookie"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer header"));
        assert_eq!(session_token(&headers).as_deref(), Some("header"));
    }

    #[test]
    fn test_missing_or_empty_session() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);
        headers.insert(header::COOKIE, HeaderValue::from_static("admin_session="));
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc", Duration::from_secs(3600)).to_string();
        assert!(cookie.starts_with("admin_session=abc"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Strict"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_clear_session_expires_cookie() {
        let jar = clear_session(CookieJar::new());
        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
    }
}
