use rocket::{serde::json::Json, Catcher, Route};

use crate::model::api::Notice;

pub mod admin;
pub mod auth;
mod common;
pub mod public;
pub mod voter;

pub fn routes() -> Vec<Route> {
    let mut routes = Vec::new();
    routes.extend(admin::routes());
    routes.extend(public::routes());
    routes.extend(auth::routes());
    routes.extend(voter::routes());
    routes
}

/// JSON bodies for failures that never reach a handler, mostly failed guards.
pub fn catchers() -> Vec<Catcher> {
    catchers![bad_request, unauthorized, forbidden, not_found, unprocessable]
}

#[catch(400)]
fn bad_request() -> Json<Notice> {
    Json(Notice::new("Malformed request."))
}

#[catch(401)]
fn unauthorized() -> Json<Notice> {
    Json(Notice::new("Please log in to continue."))
}

#[catch(403)]
fn forbidden() -> Json<Notice> {
    Json(Notice::new("You are not allowed to do that."))
}

#[catch(404)]
fn not_found() -> Json<Notice> {
    Json(Notice::new("Page not found."))
}

#[catch(422)]
fn unprocessable() -> Json<Notice> {
    Json(Notice::new("Malformed request body."))
}
