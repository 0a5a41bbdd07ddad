use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const AADHAAR_LENGTH: usize = 12;
const VOTER_ID_LETTERS: usize = 3;
const VOTER_ID_DIGITS: usize = 7;

/// Which kind of identity document a voter is submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdType {
    Aadhaar,
    VoterId,
}

impl Display for IdType {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::Aadhaar => "Aadhaar",
            Self::VoterId => "Voter ID",
        })
    }
}

/// A twelve digit Aadhaar number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Aadhaar(String);

impl Aadhaar {
    /// The number as shown on dashboards, e.g. `XXXX-XXXX-9012`.
    pub fn masked(&self) -> String {
        format!("XXXX-XXXX-{}", &self.0[8..])
    }
}

impl FromStr for Aadhaar {
    type Err = IdentityError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if string.len() == AADHAAR_LENGTH && string.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(string.to_string()))
        } else {
            Err(IdentityError::InvalidAadhaar)
        }
    }
}

/// An EPIC voter ID number: three uppercase letters followed by seven digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoterIdNumber(String);

impl FromStr for VoterIdNumber {
    type Err = IdentityError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let bytes = string.as_bytes();
        let well_formed = bytes.len() == VOTER_ID_LETTERS + VOTER_ID_DIGITS
            && bytes[..VOTER_ID_LETTERS].iter().all(u8::is_ascii_uppercase)
            && bytes[VOTER_ID_LETTERS..].iter().all(u8::is_ascii_digit);
        if well_formed {
            Ok(Self(string.to_string()))
        } else {
            Err(IdentityError::InvalidVoterId)
        }
    }
}

macro_rules! string_conversions {
    ($($ty:ty),*) => {$(
        impl TryFrom<String> for $ty {
            type Error = IdentityError;

            fn try_from(string: String) -> Result<Self, Self::Error> {
                string.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(&self.0)
            }
        }
    )*};
}

string_conversions!(Aadhaar, VoterIdNumber);

/// A validated identity document of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdDocument {
    Aadhaar(Aadhaar),
    VoterId(VoterIdNumber),
}

impl IdDocument {
    /// Validate `value` as a document of the given type.
    pub fn parse(id_type: IdType, value: &str) -> Result<Self, IdentityError> {
        match id_type {
            IdType::Aadhaar => value.parse().map(Self::Aadhaar),
            IdType::VoterId => value.parse().map(Self::VoterId),
        }
    }

    pub fn id_type(&self) -> IdType {
        match self {
            Self::Aadhaar(_) => IdType::Aadhaar,
            Self::VoterId(_) => IdType::VoterId,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Please enter a valid 12-digit Aadhaar number")]
    InvalidAadhaar,
    #[error("Please enter a valid Voter ID (Format: ABC1234567)")]
    InvalidVoterId,
}
