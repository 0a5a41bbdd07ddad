use chrono::Utc;
use log::{info, warn};
use rocket::{
    http::{Cookie, CookieJar, Status},
    serde::json::Json,
    Route, State,
};

use crate::{
    error::{Error, Result},
    logging::RequestId,
    model::{
        api::{ChallengeRequest, LoggedIn, Notice, VerifyRequest},
        auth::{Session, SESSION_COOKIE},
        directory::Directory,
        otp::{Challenge, ChallengeError, Code, CHALLENGE_COOKIE},
        phone::Phone,
        user::{AdminCredentials, SessionUser, User},
    },
    navigation::Page,
    Config,
};

use super::common::{simulate_latency, store_session};

pub fn routes() -> Vec<Route> {
    routes![challenge, verify, authenticate, session, logout]
}

#[post("/auth/voter/challenge", data = "<request>", format = "json")]
pub async fn challenge(
    request: Json<ChallengeRequest>,
    cookies: &CookieJar<'_>,
    config: &State<Config>,
    directory: &State<Directory>,
    id: &RequestId,
) -> Result<Json<Notice>> {
    simulate_latency(config.request_latency()).await;

    let phone = request.phone.parse::<Phone>().map_err(|err| {
        warn!("req{id}: refusing to send OTP: {err}");
        Error::Status(
            Status::BadRequest,
            "Please enter a valid 10-digit phone number".to_string(),
        )
    })?;

    let challenge = Challenge::new(phone);
    directory.begin_login(challenge.nonce(), Utc::now() + config.otp_ttl());
    info!("req{id}: OTP sent, pending login {}", challenge.nonce());
    cookies.add_private(challenge.into_cookie(config)?);

    Ok(Json(Notice::new("OTP sent to your mobile number")))
}

#[post("/auth/voter/verify", data = "<request>", format = "json")]
pub async fn verify(
    request: Json<VerifyRequest>,
    challenge: std::result::Result<Challenge, ChallengeError>,
    cookies: &CookieJar<'_>,
    config: &State<Config>,
    directory: &State<Directory>,
    id: &RequestId,
) -> Result<Json<LoggedIn>> {
    simulate_latency(config.request_latency()).await;

    let accepted = request
        .otp
        .parse::<Code>()
        .map(|code| code.is_accepted())
        .unwrap_or(false);
    if !accepted {
        warn!("req{id}: incorrect OTP");
        return Err(Error::Status(
            Status::Unauthorized,
            "Invalid OTP. For demo, use 123456 or 000000".to_string(),
        ));
    }

    let challenge = match challenge {
        Ok(challenge) if directory.finish_login(challenge.nonce()) => challenge,
        _ => {
            warn!("req{id}: OTP submitted without a pending login");
            return Err(Error::Status(
                Status::Unauthorized,
                "No phone number found. Please try logging in again.".to_string(),
            ));
        }
    };

    let user = directory.voter_for_phone(&challenge.phone).into_session();
    store_session(cookies, &user, config)?;
    // The pending login is spent.
    cookies.remove_private(Cookie::named(CHALLENGE_COOKIE));
    info!("req{id}: OTP verified, voter {} logged in", user.id());

    Ok(Json(LoggedIn::new("OTP verified successfully", user)))
}

#[post("/auth/admin", data = "<credentials>", format = "json")]
pub async fn authenticate(
    credentials: Json<AdminCredentials>,
    cookies: &CookieJar<'_>,
    config: &State<Config>,
    directory: &State<Directory>,
    id: &RequestId,
) -> Result<Json<LoggedIn>> {
    simulate_latency(config.request_latency()).await;

    let admin = directory.authenticate_admin(&credentials)?.ok_or_else(|| {
        warn!("req{id}: admin login refused for {:?}", credentials.username);
        Error::Status(
            Status::Unauthorized,
            "Invalid credentials. For demo, use admin/password".to_string(),
        )
    })?;

    let user = admin.into_session();
    store_session(cookies, &user, config)?;
    info!("req{id}: admin {} logged in", user.id());

    Ok(Json(LoggedIn::new("Admin login successful", user)))
}

/// Whoever is logged in on this client.
#[get("/auth/session")]
pub fn session(session: Session<SessionUser>) -> Json<SessionUser> {
    Json(session.into_inner())
}

#[delete("/auth")]
pub fn logout(cookies: &CookieJar<'_>) -> Json<Notice> {
    cookies.remove(Cookie::named(SESSION_COOKIE));
    cookies.remove_private(Cookie::named(CHALLENGE_COOKIE));
    Json(Notice::new("You have been logged out").then(Page::Home))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::ContentType,
        local::asynchronous::{Client, LocalResponse},
        serde::json::{serde_json::json, Value},
    };

    use crate::model::user::{Admin, Rights, Voter};

    use super::*;

    async fn request_otp<'c>(client: &'c Client, phone: &str) -> LocalResponse<'c> {
        client
            .post(uri!(challenge))
            .header(ContentType::JSON)
            .body(json!({ "phone": phone }).to_string())
            .dispatch()
            .await
    }

    async fn submit_otp<'c>(client: &'c Client, otp: &str) -> LocalResponse<'c> {
        client
            .post(uri!(verify))
            .header(ContentType::JSON)
            .body(json!({ "otp": otp }).to_string())
            .dispatch()
            .await
    }

    async fn message(response: LocalResponse<'_>) -> String {
        response.into_json::<Notice>().await.unwrap().message
    }

    #[backend_test]
    async fn voter_authenticate(client: Client) {
        let response = request_otp(&client, "9876543210").await;
        assert_eq!(Status::Ok, response.status());
        assert_eq!(message(response).await, "OTP sent to your mobile number");
        assert!(client.cookies().get_private(CHALLENGE_COOKIE).is_some());

        let response = submit_otp(&client, "123456").await;
        assert_eq!(Status::Ok, response.status());
        let login = response.into_json::<LoggedIn>().await.unwrap();
        assert_eq!(login.message, "OTP verified successfully");
        assert_eq!(login.user, SessionUser::Voter(Voter::example()));
        assert_eq!(login.next, "/verify-id");

        assert!(client.cookies().get(SESSION_COOKIE).is_some());
        assert!(client.cookies().get_private(CHALLENGE_COOKIE).is_none());
    }

    #[backend_test]
    async fn both_demo_codes_work(client: Client) {
        for otp in ["123456", "000000"] {
            request_otp(&client, "9876543211").await;
            let response = submit_otp(&client, otp).await;
            assert_eq!(Status::Ok, response.status(), "{otp}");
            let body = response.into_json::<Value>().await.unwrap();
            assert_eq!(body["user"]["name"], "Priya Patel");
            assert_eq!(body["user"]["hasVoted"], true);
        }
    }

    #[backend_test]
    async fn invalid_phone_gets_no_challenge(client: Client) {
        for phone in ["98765", "98765432101", "98765abcde", "+919876543", ""] {
            let response = request_otp(&client, phone).await;
            assert_eq!(Status::BadRequest, response.status(), "{phone}");
            assert_eq!(
                message(response).await,
                "Please enter a valid 10-digit phone number"
            );
            assert!(client.cookies().get_private(CHALLENGE_COOKIE).is_none());
        }
    }

    #[backend_test]
    async fn invalid_otp_code(client: Client) {
        request_otp(&client, "9876543210").await;

        for otp in ["654321", "12345", "1234567", "abcdef", ""] {
            let response = submit_otp(&client, otp).await;
            assert_eq!(Status::Unauthorized, response.status(), "{otp}");
            assert_eq!(
                message(response).await,
                "Invalid OTP. For demo, use 123456 or 000000"
            );
        }
        assert!(client.cookies().get(SESSION_COOKIE).is_none());

        // The pending login survives wrong guesses.
        let response = submit_otp(&client, "000000").await;
        assert_eq!(Status::Ok, response.status());
    }

    #[backend_test]
    async fn otp_without_pending_login(client: Client) {
        let response = submit_otp(&client, "123456").await;
        assert_eq!(Status::Unauthorized, response.status());
        assert_eq!(
            message(response).await,
            "No phone number found. Please try logging in again."
        );
    }

    #[backend_test]
    async fn pending_login_succeeds_only_once(client: Client) {
        request_otp(&client, "9876543210").await;
        let spent = client.cookies().get_private(CHALLENGE_COOKIE).unwrap();
        assert_eq!(Status::Ok, submit_otp(&client, "123456").await.status());

        // Replaying the same challenge is refused even with a valid code.
        let response = client
            .post(uri!(verify))
            .header(ContentType::JSON)
            .private_cookie(spent)
            .body(json!({ "otp": "123456" }).to_string())
            .dispatch()
            .await;
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[backend_test]
    async fn unknown_phone_becomes_demo_voter(client: Client) {
        request_otp(&client, "9123456780").await;
        let first = submit_otp(&client, "123456")
            .await
            .into_json::<LoggedIn>()
            .await
            .unwrap();
        let voter = Voter::from_session(first.user).unwrap();
        assert_eq!(voter.name, "Demo User");
        assert_eq!(voter.constituency, "Demo Constituency");
        assert!(!voter.has_voted);

        // Logging in again finds the same voter.
        request_otp(&client, "9123456780").await;
        let second = submit_otp(&client, "000000")
            .await
            .into_json::<LoggedIn>()
            .await
            .unwrap();
        assert_eq!(second.user.id(), voter.id);
    }

    #[backend_test]
    async fn admin_authenticate_valid(client: Client) {
        let response = client
            .post(uri!(authenticate))
            .header(ContentType::JSON)
            .body(json!(AdminCredentials::example()).to_string())
            .dispatch()
            .await;

        assert_eq!(Status::Ok, response.status());
        let login = response.into_json::<LoggedIn>().await.unwrap();
        assert_eq!(login.message, "Admin login successful");
        assert_eq!(login.user, SessionUser::Admin(Admin::example()));
        assert_eq!(login.next, "/admin");
        assert!(client.cookies().get(SESSION_COOKIE).is_some());
    }

    #[backend_test]
    async fn admin_authenticate_invalid(client: Client) {
        let attempts = [
            AdminCredentials::empty(),
            AdminCredentials {
                username: "admin".into(),
                password: "".into(),
            },
            AdminCredentials {
                username: "admin".into(),
                password: "hunter2".into(),
            },
            AdminCredentials {
                username: "officer".into(),
                password: "password".into(),
            },
        ];
        for credentials in attempts {
            let response = client
                .post(uri!(authenticate))
                .header(ContentType::JSON)
                .body(json!(credentials).to_string())
                .dispatch()
                .await;

            assert_eq!(Status::Unauthorized, response.status());
            assert_eq!(
                message(response).await,
                "Invalid credentials. For demo, use admin/password"
            );
            assert_eq!(None, client.cookies().get(SESSION_COOKIE));
        }
    }

    #[backend_test(voter)]
    async fn session_returns_voter(client: Client) {
        let response = client.get(uri!(session)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let user = response.into_json::<SessionUser>().await.unwrap();
        assert_eq!(user.rights(), Rights::Voter);
        assert_eq!(user.id(), "1");
    }

    #[backend_test(admin)]
    async fn session_returns_admin(client: Client) {
        let response = client.get(uri!(session)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let user = response.into_json::<SessionUser>().await.unwrap();
        assert_eq!(user.rights(), Rights::Admin);
    }

    #[backend_test]
    async fn session_requires_login(client: Client) {
        let response = client.get(uri!(session)).dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[backend_test]
    async fn garbage_session_is_discarded(client: Client) {
        let response = client
            .get(uri!(session))
            .cookie(Cookie::new(SESSION_COOKIE, "not a token"))
            .dispatch()
            .await;
        assert_eq!(Status::Unauthorized, response.status());
        assert!(client.cookies().get(SESSION_COOKIE).is_none());
    }

    #[backend_test(admin)]
    async fn logout_admin(client: Client) {
        let response = client.delete(uri!(logout)).dispatch().await;

        assert_eq!(Status::Ok, response.status());
        let notice = response.into_json::<Notice>().await.unwrap();
        assert_eq!(notice.message, "You have been logged out");
        assert_eq!(notice.next.as_deref(), Some("/"));
        assert_eq!(None, client.cookies().get(SESSION_COOKIE));
    }

    #[backend_test(voter)]
    async fn logout_voter(client: Client) {
        assert!(client.cookies().get(SESSION_COOKIE).is_some());

        let response = client.delete(uri!(logout)).dispatch().await;

        assert_eq!(Status::Ok, response.status());
        assert_eq!(None, client.cookies().get(SESSION_COOKIE));
        let response = client.get(uri!(session)).dispatch().await;
        assert_eq!(Status::Unauthorized, response.status());
    }

    #[backend_test]
    async fn logout_not_logged_in(client: Client) {
        let response = client.delete(uri!(logout)).dispatch().await;

        assert_eq!(Status::Ok, response.status());
    }
}
