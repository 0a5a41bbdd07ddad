//! Request and response bodies of the HTTP API.

mod admin;
mod auth;
mod notice;
mod pages;
mod voter;

pub use admin::AdminDashboard;
pub use auth::{ChallengeRequest, LoggedIn, VerifyRequest};
pub use notice::Notice;
pub use pages::{AdminLoginPage, Home, LoginPage, LoginStep};
pub use voter::{
    ConstituencyInfo, VerifyIdPage, VerifyIdRequest, VoteRequest, VoterDashboard, VoterSummary,
};
