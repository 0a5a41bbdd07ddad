use serde::{Deserialize, Serialize};

use crate::{model::user::SessionUser, navigation::Page};

/// Ask for an OTP to be sent to a phone. The number is validated by the
/// endpoint, so that a malformed one gets a friendly message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeRequest {
    pub phone: String,
}

/// Answer a pending challenge with an OTP.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub otp: String,
}

/// A successful login: the new session object, a greeting for the toast and
/// the page the session starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedIn {
    pub message: String,
    pub user: SessionUser,
    pub next: String,
}

impl LoggedIn {
    pub fn new(message: impl Into<String>, user: SessionUser) -> Self {
        Self {
            message: message.into(),
            next: Page::after_login(user.rights()).path().to_string(),
            user,
        }
    }
}

#[cfg(test)]
mod examples {
    use super::*;

    impl ChallengeRequest {
        /// Rahul Sharma's registered phone.
        pub fn example() -> Self {
            Self {
                phone: "9876543210".to_string(),
            }
        }
    }

    impl VerifyRequest {
        pub fn example() -> Self {
            Self {
                otp: "123456".to_string(),
            }
        }
    }
}
