use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

pub const LENGTH: usize = 6;

/// The only codes the demo ever accepts: `123456` and `000000`.
pub const DEMO_CODES: [Code; 2] = [
    Code {
        code: [1, 2, 3, 4, 5, 6],
    },
    Code { code: [0; LENGTH] },
];

/// A one-time-password code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    code: [u8; LENGTH],
}

impl Code {
    /// Is this one of the demo codes?
    pub fn is_accepted(&self) -> bool {
        DEMO_CODES.contains(self)
    }
}

impl Display for Code {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.code {
            write!(formatter, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = ParseError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let len = string.chars().count();
        if len != LENGTH {
            return Err(Self::Err::InvalidLength(len));
        }
        let digits = string
            .chars()
            .map(|c| match c {
                '0'..='9' => Ok(c as u8 - b'0'),
                _ => Err(Self::Err::InvalidChar(c)),
            })
            .collect::<Result<Vec<u8>, Self::Err>>()?;
        let code: [u8; LENGTH] = digits
            .try_into()
            .map_err(|digits: Vec<u8>| Self::Err::InvalidLength(digits.len()))?;
        Ok(Self { code })
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("code must contain exactly 6 characters")]
    InvalidLength(usize),
    #[error("code must contain only digits")]
    InvalidChar(char),
}
