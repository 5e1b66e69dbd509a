use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

use super::Error;

/// Name of the session cookie proving admin authentication.
pub const AUTH_COOKIE: &str = "admin_auth";

/// The cookie value is a fixed sentinel, not a signed token: the gate is
/// a single shared secret, not a per-user session.
pub const AUTH_SENTINEL: &str = "authenticated";

const SESSION_TTL: Duration = Duration::days(7);

/// Extractor guarding admin-only routes. Resolves only when the request
/// carries the sentinel cookie; everything else is a 401.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession;

impl AdminSession {
    pub fn from_http_request(req: &HttpRequest) -> Result<Self, Error> {
        match req.cookie(AUTH_COOKIE) {
            Some(cookie) if cookie.value() == AUTH_SENTINEL => Ok(Self),
            _ => Err(Error::unauthorized()),
        }
    }
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Self::from_http_request(req))
    }
}

/// The cookie set on a successful login: HTTP-only, lax same-site, 7-day
/// expiry. `secure` comes from `auth.secure_cookie` so plain-HTTP
/// development still receives the cookie.
pub fn auth_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build(AUTH_COOKIE, AUTH_SENTINEL)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(SESSION_TTL)
        .finish()
}

/// An immediately-expiring cookie that clears the session on logout.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(AUTH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
