use chrono::{serde::ts_seconds, DateTime, Utc};
use jsonwebtoken::{
    errors::Error as JwtError, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use rocket::{
    http::{Cookie, SameSite, Status},
    outcome::{try_outcome, IntoOutcome},
    request::{self, FromRequest},
    time::Duration,
    Request,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{model::phone::Phone, Config};

pub const CHALLENGE_COOKIE: &str = "challenge";

/// A pending phone login, waiting for the voter to submit an OTP.
///
/// The nonce identifies this particular login attempt, so that the server can
/// refuse to accept the same challenge twice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub phone: Phone,
    #[serde(rename = "jti")]
    nonce: u64,
}

impl Challenge {
    /// Create a new challenge for the given phone with a random nonce.
    pub fn new(phone: Phone) -> Self {
        Self {
            phone,
            nonce: rand::random(),
        }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Convert into a cookie, expiring after the configured OTP lifetime.
    pub fn into_cookie(self, config: &Config) -> Result<Cookie<'static>, JwtError> {
        let claims = Claims {
            challenge: self,
            expire_at: Utc::now() + config.otp_ttl(),
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret()),
        )?;
        Ok(Cookie::build(CHALLENGE_COOKIE, token)
            .max_age(Duration::seconds(config.otp_ttl().num_seconds()))
            .http_only(true)
            .same_site(SameSite::Strict)
            .finish())
    }

    /// Deserialize a challenge from a cookie.
    pub fn from_cookie(cookie: &Cookie<'static>, config: &Config) -> Result<Self, JwtError> {
        jsonwebtoken::decode(
            cookie.value(),
            &DecodingKey::from_secret(config.jwt_secret()),
            &Validation::default(),
        )
        .map(|claims: TokenData<Claims>| claims.claims.challenge)
    }
}

/// Cookie claims: the challenge itself plus an expiry datetime.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(flatten)]
    challenge: Challenge,
    #[serde(rename = "exp", with = "ts_seconds")]
    expire_at: DateTime<Utc>,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Challenge {
    type Error = ChallengeError;

    /// Get the challenge from the private cookie.
    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let config = try_outcome!(req
            .rocket()
            .state::<Config>()
            .into_outcome((Status::InternalServerError, ChallengeError::Unconfigured)));

        let cookie = try_outcome!(req
            .cookies()
            .get_private(CHALLENGE_COOKIE)
            .into_outcome((Status::Unauthorized, ChallengeError::Missing)));

        let challenge = try_outcome!(Challenge::from_cookie(&cookie, config)
            .map_err(ChallengeError::Jwt)
            .into_outcome(Status::BadRequest));

        request::Outcome::Success(challenge)
    }
}

#[derive(Debug, Error)]
pub enum ChallengeError {
    #[error("Missing `challenge` cookie")]
    Missing,
    #[error("Config is not managed")]
    Unconfigured,
    #[error(transparent)]
    Jwt(#[from] JwtError),
}
