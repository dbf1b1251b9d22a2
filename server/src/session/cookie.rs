use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::Duration;
use uuid::Uuid;

/// Cookie carrying the opaque session token
pub const SESSION_COOKIE: &str = "sessionId";

// One week
const SESSION_TTL_SECONDS: i64 = 604_800;

/// Builds the session cookie issued at registration.
pub fn session_cookie(token: Uuid) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .max_age(Duration::seconds(SESSION_TTL_SECONDS))
        .build()
}

/// Reads the session token from the request cookies, if it parses as a UUID.
pub fn session_token(jar: &CookieJar) -> Option<Uuid> {
    let cookie = jar.get(SESSION_COOKIE)?;
    Uuid::parse_str(cookie.value()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let token = Uuid::new_v4();
        let cookie = session_cookie(token);
        assert_eq!(cookie.name(), "sessionId");
        assert_eq!(cookie.value(), token.to_string());
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn test_session_token_roundtrip() {
        let token = Uuid::new_v4();
        let jar = CookieJar::new().add(session_cookie(token));
        assert_eq!(session_token(&jar), Some(token));
    }

    #[test]
    fn test_session_token_rejects_non_uuid_value() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-uuid"));
        assert_eq!(session_token(&jar), None);
    }

    #[test]
    fn test_session_token_absent_cookie() {
        assert_eq!(session_token(&CookieJar::new()), None);
    }
}
