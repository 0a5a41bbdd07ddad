use std::time::Duration;

use rocket::{http::CookieJar, response::Redirect};

use crate::{
    error::Result,
    model::{
        auth::{Session, SessionError},
        user::SessionUser,
    },
    navigation::Page,
    Config,
};

/// Stand in for a round trip to a real identity or SMS provider.
pub async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        rocket::tokio::time::sleep(delay).await;
    }
}

/// Let the session onto `page`, or redirect to wherever the page sends
/// visitors without the right session.
pub fn admit<U>(
    page: Page,
    session: std::result::Result<Session<U>, SessionError>,
) -> std::result::Result<Session<U>, Redirect> {
    session.map_err(|err| {
        let target = page.redirect_for(err.rights()).unwrap_or(Page::Home);
        Redirect::to(target.path())
    })
}

/// Overwrite the client's session with `user`.
pub fn store_session(cookies: &CookieJar<'_>, user: &SessionUser, config: &Config) -> Result<()> {
    cookies.add(user.to_cookie(config)?);
    Ok(())
}
