#[macro_use]
extern crate rocket;

#[cfg(test)]
#[macro_use]
extern crate backend_test;

use rocket::{figment::Figment, Build, Rocket};

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod navigation;

pub use config::Config;

use config::{ConfigFairing, ElectionFairing};
use logging::LoggerFairing;

/// Build the server, configured from `Rocket.toml` and `ROCKET_*` environment variables.
pub fn build() -> Rocket<Build> {
    rocket_for_figment(rocket::Config::figment())
}

/// Build the server from an explicit configuration source.
pub fn rocket_for_figment(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .mount("/", api::routes())
        .register("/", api::catchers())
        .attach(ConfigFairing)
        .attach(ElectionFairing)
        .attach(LoggerFairing)
}

/// A server with fixed secrets and no simulated latency, independent of any `Rocket.toml`.
#[cfg(test)]
pub(crate) fn rocket_for_test() -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("jwt_secret", "voting-portal-test-secret"))
        .merge(("otp_ttl", 300))
        .merge(("auth_ttl", 3600))
        .merge(("request_latency", 0))
        .merge(("verification_latency", 0));
    rocket_for_figment(figment)
}
