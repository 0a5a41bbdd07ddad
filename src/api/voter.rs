use log::{info, warn};
use rocket::{
    http::{CookieJar, Status},
    response::Redirect,
    serde::json::Json,
    Route, State,
};

use crate::{
    error::{Error, Result},
    logging::RequestId,
    model::{
        api::{Notice, VerifyIdPage, VerifyIdRequest, VoteRequest, VoterDashboard, VoterSummary},
        auth::{Session, SessionError},
        directory::Directory,
        identity::IdDocument,
        ledger::{Ledger, VoteError},
        user::{User, Voter},
    },
    navigation::Page,
    Config,
};

use super::common::{admit, simulate_latency, store_session};

pub fn routes() -> Vec<Route> {
    routes![verify_id_page, verify_id, dashboard, vote]
}

#[get("/verify-id")]
pub fn verify_id_page(
    session: std::result::Result<Session<Voter>, SessionError>,
) -> std::result::Result<Json<VerifyIdPage>, Redirect> {
    let voter = admit(Page::VerifyId, session)?;
    Ok(Json(VerifyIdPage::from(&*voter)))
}

/// Check an identity document and attach it to the logged in voter.
#[post("/verify-id", data = "<request>", format = "json")]
pub async fn verify_id(
    request: Json<VerifyIdRequest>,
    session: std::result::Result<Session<Voter>, SessionError>,
    cookies: &CookieJar<'_>,
    config: &State<Config>,
    directory: &State<Directory>,
    id: &RequestId,
) -> Result<Json<Notice>> {
    simulate_latency(config.verification_latency()).await;

    let document = IdDocument::parse(request.id_type, &request.id)
        .map_err(|err| Error::Status(Status::BadRequest, err.to_string()))?;
    let id_type = document.id_type();

    let voter = session
        .map_err(|err| {
            warn!("req{id}: identity submitted without a voter session: {err}");
            Error::Status(
                Status::Unauthorized,
                "User profile not found. Please log in again.".to_string(),
            )
        })?
        .into_inner();

    let voter = directory.amend(&voter, |voter| voter.attach(document));
    info!("req{id}: voter {} verified their {id_type}", voter.id);
    store_session(cookies, &voter.into_session(), config)?;

    Ok(Json(
        Notice::new(format!("{id_type} verified successfully")).then(Page::Dashboard),
    ))
}

#[get("/dashboard")]
pub fn dashboard(
    session: std::result::Result<Session<Voter>, SessionError>,
    ledger: &State<Ledger>,
) -> std::result::Result<Json<VoterDashboard>, Redirect> {
    let voter = admit(Page::Dashboard, session)?;
    let has_voted = voter.has_voted || ledger.has_voted(&voter.id);

    Ok(Json(VoterDashboard {
        voter: VoterSummary::new(&voter, has_voted),
        constituency: ledger
            .constituency_by_name(&voter.constituency)
            .map(Into::into),
        candidates: ledger.candidates_by_constituency(&voter.constituency),
    }))
}

/// Cast the logged in voter's one vote.
#[post("/dashboard/vote", data = "<request>", format = "json")]
pub async fn vote(
    request: Json<VoteRequest>,
    session: Session<Voter>,
    cookies: &CookieJar<'_>,
    config: &State<Config>,
    ledger: &State<Ledger>,
    directory: &State<Directory>,
    id: &RequestId,
) -> Result<Json<Notice>> {
    simulate_latency(config.verification_latency()).await;

    let voter = session.into_inner();
    if voter.has_voted {
        warn!("req{id}: voter {} already voted", voter.id);
        return Err(VoteError::AlreadyVoted.into());
    }

    let candidate_id = &request.candidate_id;
    match ledger.candidate(candidate_id) {
        Some(candidate) if candidate.constituency == voter.constituency => {}
        _ => return Err(Error::not_found(format!("Candidate '{candidate_id}'"))),
    }

    ledger.cast_vote(&voter.id, candidate_id).map_err(|err| {
        warn!("req{id}: vote by {} refused: {err}", voter.id);
        err
    })?;
    info!("req{id}: voter {} cast their vote", voter.id);

    let voter = directory.amend(&voter, |voter| voter.has_voted = true);
    store_session(cookies, &voter.into_session(), config)?;

    Ok(Json(Notice::new("Your vote has been recorded successfully!")))
}
