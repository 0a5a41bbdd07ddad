use rocket::{serde::json::Json, Route, State};

use crate::{
    error::{Error, Result},
    model::{
        api::{AdminLoginPage, Home, LoginPage, LoginStep},
        auth::Session,
        candidate::Candidate,
        constituency::Constituency,
        ledger::Ledger,
        otp::Challenge,
        user::SessionUser,
    },
};

pub fn routes() -> Vec<Route> {
    routes![
        home,
        login,
        admin_login,
        constituencies,
        constituency,
        candidates
    ]
}

/// The landing page, linking a logged in visitor back to their own dashboard.
#[get("/")]
pub fn home(session: Option<Session<SessionUser>>) -> Json<Home> {
    Json(Home::for_rights(session.map(|session| session.rights())))
}

/// The phone form, or the OTP form while a login is pending.
#[get("/login")]
pub fn login(challenge: Option<Challenge>) -> Json<LoginPage> {
    let step = match challenge {
        Some(_) => LoginStep::Otp,
        None => LoginStep::Phone,
    };
    Json(LoginPage::new(step))
}

#[get("/admin-login")]
pub fn admin_login() -> Json<AdminLoginPage> {
    Json(AdminLoginPage::default())
}

#[get("/constituencies")]
pub fn constituencies(ledger: &State<Ledger>) -> Json<Vec<Constituency>> {
    Json(ledger.all_constituencies())
}

#[get("/constituencies/<name>")]
pub fn constituency(name: &str, ledger: &State<Ledger>) -> Result<Json<Constituency>> {
    ledger
        .constituency_by_name(name)
        .map(Json)
        .ok_or_else(|| Error::not_found(format!("Constituency '{name}'")))
}

/// Candidates standing in a constituency. Unknown names have none.
#[get("/constituencies/<name>/candidates")]
pub fn candidates(name: &str, ledger: &State<Ledger>) -> Json<Vec<Candidate>> {
    Json(ledger.candidates_by_constituency(name))
}

#[cfg(test)]
mod tests {
    use rocket::{
        http::{ContentType, Status},
        local::asynchronous::Client,
        serde::json::serde_json::json,
    };

    use crate::model::api::Notice;

    use super::*;

    #[backend_test]
    async fn home_links_to_both_logins(client: Client) {
        let response = client.get(uri!(home)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let home = response.into_json::<Home>().await.unwrap();
        assert_eq!(home.title, "Digital Vote India");
        assert_eq!(home.voter_login, "/login");
        assert_eq!(home.admin_login, "/admin-login");
        assert_eq!(home.dashboard, None);
    }

    async fn dashboard_link(client: &Client) -> Option<String> {
        client
            .get(uri!(home))
            .dispatch()
            .await
            .into_json::<Home>()
            .await
            .unwrap()
            .dashboard
    }

    #[backend_test(voter)]
    async fn home_links_voter_to_dashboard(client: Client) {
        assert_eq!(dashboard_link(&client).await.as_deref(), Some("/dashboard"));
    }

    #[backend_test(admin)]
    async fn home_links_admin_to_admin_dashboard(client: Client) {
        assert_eq!(dashboard_link(&client).await.as_deref(), Some("/admin"));

        client.delete(uri!(crate::api::auth::logout)).dispatch().await;
        assert_eq!(dashboard_link(&client).await, None);
    }

    #[backend_test]
    async fn login_moves_to_otp_step_once_requested(client: Client) {
        let page = client
            .get(uri!(login))
            .dispatch()
            .await
            .into_json::<LoginPage>()
            .await
            .unwrap();
        assert_eq!(page.step, LoginStep::Phone);

        client
            .post(uri!(crate::api::auth::challenge))
            .header(ContentType::JSON)
            .body(json!({ "phone": "9876543210" }).to_string())
            .dispatch()
            .await;

        let page = client
            .get(uri!(login))
            .dispatch()
            .await
            .into_json::<LoginPage>()
            .await
            .unwrap();
        assert_eq!(page.step, LoginStep::Otp);
        assert_eq!(page.hint, "For demo, use OTP: 123456 or 000000");
    }

    #[backend_test(voter)]
    async fn public_pages_stay_open_when_logged_in(client: Client) {
        for page in [uri!(home), uri!(login), uri!(admin_login)] {
            let response = client.get(page).dispatch().await;
            assert_eq!(Status::Ok, response.status());
        }
    }

    #[backend_test]
    async fn admin_login_hint(client: Client) {
        let page = client
            .get(uri!(admin_login))
            .dispatch()
            .await
            .into_json::<AdminLoginPage>()
            .await
            .unwrap();
        assert_eq!(page.hint, "For demo, use admin/password");
    }

    #[backend_test]
    async fn lists_all_constituencies(client: Client) {
        let response = client.get(uri!(constituencies)).dispatch().await;
        assert_eq!(Status::Ok, response.status());
        let names = response
            .into_json::<Vec<Constituency>>()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Mumbai North", "Delhi East", "Demo Constituency"]);
    }

    #[backend_test]
    async fn one_constituency(client: Client) {
        let response = client
            .get(uri!(constituency("Delhi East")))
            .dispatch()
            .await;
        assert_eq!(Status::Ok, response.status());
        let delhi = response.into_json::<Constituency>().await.unwrap();
        assert_eq!(delhi.state, "Delhi");
        assert_eq!(delhi.total_voters, 1_200_000);
        assert_eq!(delhi.voted_count, 720_000);

        let response = client
            .get(uri!(constituency("Atlantis")))
            .dispatch()
            .await;
        assert_eq!(Status::NotFound, response.status());
        let notice = response.into_json::<Notice>().await.unwrap();
        assert_eq!(notice.message, "Constituency 'Atlantis' not found");
    }

    #[backend_test]
    async fn candidates_of_a_constituency(client: Client) {
        let candidates = client
            .get(uri!(candidates("Demo Constituency")))
            .dispatch()
            .await
            .into_json::<Vec<Candidate>>()
            .await
            .unwrap();
        let parties = candidates
            .iter()
            .map(|c| c.party.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            parties,
            vec![
                "Bharatiya Janata Party",
                "Indian National Congress",
                "Aam Aadmi Party",
                "None of the Above",
            ]
        );

        let none = client
            .get(uri!(candidates("Atlantis")))
            .dispatch()
            .await
            .into_json::<Vec<Candidate>>()
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
