use rocket::{response::Redirect, serde::json::Json, Route, State};

use crate::{
    error::{Error, Result},
    model::{
        api::AdminDashboard,
        auth::{Session, SessionError},
        ledger::Ledger,
        stats::{CandidateVoteCount, Overview},
        user::Admin,
    },
    navigation::Page,
};

use super::common::admit;

pub fn routes() -> Vec<Route> {
    routes![dashboard, candidate_vote_counts]
}

/// Turnout across the whole election and per constituency.
#[get("/admin")]
pub fn dashboard(
    session: std::result::Result<Session<Admin>, SessionError>,
    ledger: &State<Ledger>,
) -> std::result::Result<Json<AdminDashboard>, Redirect> {
    admit(Page::Admin, session)?;
    let constituencies = ledger.voting_stats();

    Ok(Json(AdminDashboard {
        overview: Overview::from_stats(&constituencies),
        constituencies,
    }))
}

/// Votes recorded for each candidate of one constituency.
#[get("/admin/constituencies/<name>/candidates")]
pub fn candidate_vote_counts(
    _admin: Session<Admin>,
    name: &str,
    ledger: &State<Ledger>,
) -> Result<Json<Vec<CandidateVoteCount>>> {
    if ledger.constituency_by_name(name).is_none() {
        return Err(Error::not_found(format!("Constituency '{name}'")));
    }
    Ok(Json(ledger.candidate_vote_counts(name)))
}
