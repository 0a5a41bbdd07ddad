mod challenge;
mod code;

pub use challenge::{Challenge, ChallengeError, CHALLENGE_COOKIE};
pub use code::{Code, DEMO_CODES};
