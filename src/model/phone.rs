use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of digits in a mobile number.
pub const LENGTH: usize = 10;

/// A voter's mobile number: exactly ten ASCII digits, no country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Phone {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for Phone {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let Some(c) = string.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidChar(c));
        }
        if string.len() != LENGTH {
            return Err(ParseError::InvalidLength(string.len()));
        }
        Ok(Self(string.to_string()))
    }
}

impl TryFrom<String> for Phone {
    type Error = ParseError;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        string.parse()
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("phone number must contain exactly 10 digits, found {0}")]
    InvalidLength(usize),
    #[error("phone number must contain only digits, found '{0}'")]
    InvalidChar(char),
}
