use std::ops::Deref;

use chrono::{serde::ts_seconds, DateTime, Utc};
use jsonwebtoken::{
    errors::Error as JwtError, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use log::warn;
use rocket::{
    http::{Cookie, SameSite, Status},
    outcome::{try_outcome, IntoOutcome},
    request::{FromRequest, Outcome},
    time::Duration,
    Request,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::user::{Rights, SessionUser, User};
use crate::Config;

/// The one cookie holding the whole session object.
pub const SESSION_COOKIE: &str = "user";

/// Cookie claims: the session object, its rights, and an expiry datetime.
#[derive(Serialize, Deserialize)]
struct Claims<T> {
    #[serde(rename = "usr")]
    user: T,
    #[serde(rename = "rgt")]
    rights: Rights,
    #[serde(rename = "exp", with = "ts_seconds")]
    expire_at: DateTime<Utc>,
}

impl SessionUser {
    /// Serialize the whole session into a signed cookie, replacing whatever
    /// session the client held before.
    pub fn to_cookie(&self, config: &Config) -> Result<Cookie<'static>, JwtError> {
        let claims = Claims {
            user: self,
            rights: self.rights(),
            expire_at: Utc::now() + config.auth_ttl(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret()),
        )?;

        Ok(Cookie::build(SESSION_COOKIE, token)
            .max_age(Duration::seconds(config.auth_ttl().num_seconds()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .finish())
    }

    /// Deserialize a session from a cookie, checking its signature, expiry, and
    /// that the claimed rights match the stored object.
    pub fn from_cookie(cookie: &Cookie<'_>, config: &Config) -> Result<Self, SessionError> {
        let claims: Claims<SessionUser> = jsonwebtoken::decode(
            cookie.value(),
            &DecodingKey::from_secret(config.jwt_secret()),
            &Validation::default(),
        )
        .map(|data: TokenData<Claims<SessionUser>>| data.claims)?;

        if claims.rights != claims.user.rights() {
            return Err(SessionError::Mismatched(claims.rights));
        }
        Ok(claims.user)
    }
}

/// A request guard yielding the logged in user of type `U`.
pub struct Session<U> {
    user: U,
}

impl<U> Session<U> {
    pub fn into_inner(self) -> U {
        self.user
    }
}

impl<U> Deref for Session<U> {
    type Target = U;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

#[rocket::async_trait]
impl<'r, U> FromRequest<'r> for Session<U>
where
    U: User + Send,
{
    type Error = SessionError;

    /// Get the session from the cookie and check it belongs to the right kind of user.
    /// Invalid cookies are removed, as if the client had never logged in.
    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let config = try_outcome!(req
            .rocket()
            .state::<Config>()
            .into_outcome((Status::InternalServerError, SessionError::Unconfigured)));

        let cookie = try_outcome!(req
            .cookies()
            .get(SESSION_COOKIE)
            .into_outcome((Status::Unauthorized, SessionError::Missing)));

        let user = match SessionUser::from_cookie(cookie, config) {
            Ok(user) => user,
            Err(e) => {
                warn!("Discarding session cookie: {e}");
                req.cookies().remove(Cookie::named(SESSION_COOKIE));
                return Outcome::Failure((Status::Unauthorized, e));
            }
        };

        match U::from_session(user) {
            Ok(user) => Outcome::Success(Session { user }),
            Err(other) => Outcome::Failure((
                Status::Forbidden,
                SessionError::WrongRights(other.rights()),
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No session cookie")]
    Missing,
    #[error("Config is not managed")]
    Unconfigured,
    #[error(transparent)]
    Jwt(#[from] JwtError),
    #[error("Session claims {0} rights but holds another kind of user")]
    Mismatched(Rights),
    #[error("Session belongs to a {0}")]
    WrongRights(Rights),
}

impl SessionError {
    /// The rights of whoever is logged in, if anyone validly is.
    pub fn rights(&self) -> Option<Rights> {
        match self {
            Self::WrongRights(rights) => Some(*rights),
            _ => None,
        }
    }
}
