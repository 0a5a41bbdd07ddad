use std::fmt::Display;

use jsonwebtoken::errors::Error as JwtError;
use log::error;
use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::Json,
    Request,
};
use thiserror::Error;

use crate::model::{api::Notice, ledger::VoteError};

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure an endpoint can report. All of them reach the client as a
/// status code plus a [`Notice`] the frontend can show as a toast.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Jwt(#[from] JwtError),
    #[error(transparent)]
    Argon2(#[from] argon2::Error),
    #[error("{1}")]
    Status(Status, String),
}

impl Error {
    /// Something the client asked for does not exist.
    pub fn not_found(what: impl Display) -> Self {
        Self::Status(Status::NotFound, format!("{what} not found"))
    }

    /// The status this error is reported with.
    pub fn status(&self) -> Status {
        match self {
            Self::Jwt(_) | Self::Argon2(_) => Status::InternalServerError,
            Self::Status(status, _) => *status,
        }
    }
}

impl From<VoteError> for Error {
    fn from(err: VoteError) -> Self {
        let status = match err {
            VoteError::AlreadyVoted => Status::Conflict,
            VoteError::UnknownCandidate(_) => Status::NotFound,
        };
        Self::Status(status, err.to_string())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'o> {
        let status = self.status();
        let message = match self {
            Self::Status(_, message) => message,
            internal => {
                error!("Internal error: {internal}");
                "Something went wrong. Please try again.".to_string()
            }
        };
        (status, Json(Notice::new(message))).respond_to(req)
    }
}
