pub mod api;
pub mod auth;
pub mod candidate;
pub mod constituency;
pub mod directory;
pub mod identity;
pub mod ledger;
pub mod otp;
pub mod phone;
pub mod seed;
pub mod stats;
pub mod user;
