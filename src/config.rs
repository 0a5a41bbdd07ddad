use std::time::Duration as StdDuration;

use chrono::Duration;
use log::{error, info};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Build, Rocket,
};
use serde::Deserialize;

use crate::model::{directory::Directory, ledger::Ledger};

/// Application configuration, derived from `Rocket.toml` and `ROCKET_*`
/// environment variables. This struct becomes managed state and can be
/// inspected by any endpoint.
#[derive(Deserialize)]
pub struct Config {
    // non-secrets
    otp_ttl: u32,
    auth_ttl: u32,
    request_latency: u64,
    verification_latency: u64,
    // secrets
    jwt_secret: String,
}

impl Config {
    /// How long a pending phone login waits for its OTP, in seconds.
    pub fn otp_ttl(&self) -> Duration {
        Duration::seconds(self.otp_ttl.into())
    }

    /// Valid lifetime of session cookies in seconds.
    pub fn auth_ttl(&self) -> Duration {
        Duration::seconds(self.auth_ttl.into())
    }

    /// Simulated round trip for OTP issue, OTP check and admin login, in milliseconds.
    pub fn request_latency(&self) -> StdDuration {
        StdDuration::from_millis(self.request_latency)
    }

    /// Simulated round trip for identity verification and vote casting, in milliseconds.
    pub fn verification_latency(&self) -> StdDuration {
        StdDuration::from_millis(self.verification_latency)
    }

    /// Secret key used to sign session and challenge JWTs.
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

/// A fairing that loads the application config and puts it in managed state.
pub struct ConfigFairing;

#[rocket::async_trait]
impl Fairing for ConfigFairing {
    fn info(&self) -> Info {
        Info {
            name: "Config",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        // Load the config.
        let config = match rocket.figment().extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load application config");
                rocket::config::pretty_print_error(e);
                return Err(rocket);
            }
        };

        // Manage the state.
        rocket = rocket.manage(config);
        Ok(rocket)
    }
}

/// A fairing that seeds the in-memory election: the vote ledger with its
/// constituencies and candidates, and the directory of known voters and the
/// election officer account.
pub struct ElectionFairing;

#[rocket::async_trait]
impl Fairing for ElectionFairing {
    fn info(&self) -> Info {
        Info {
            name: "Election",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, mut rocket: Rocket<Build>) -> rocket::fairing::Result {
        let ledger = Ledger::seeded();
        let directory = match Directory::seeded() {
            Ok(directory) => directory,
            Err(e) => {
                error!("Failed to seed voter directory: {e}");
                return Err(rocket);
            }
        };
        info!(
            "Seeded election with {} constituencies and {} candidates",
            ledger.all_constituencies().len(),
            ledger.candidate_count(),
        );

        // Manage the state.
        rocket = rocket.manage(ledger).manage(directory);
        Ok(rocket)
    }
}
