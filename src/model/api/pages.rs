use serde::{Deserialize, Serialize};

use crate::{model::user::Rights, navigation::Page};

/// The landing page. A logged in visitor also gets a link to their own dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Home {
    pub title: String,
    pub authority: String,
    pub voter_login: String,
    pub admin_login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
}

impl Home {
    pub fn for_rights(rights: Option<Rights>) -> Self {
        Self {
            dashboard: rights.map(|rights| Page::home_for(rights).path().to_string()),
            ..Self::default()
        }
    }
}

impl Default for Home {
    fn default() -> Self {
        Self {
            title: "Digital Vote India".to_string(),
            authority: "Election Commission of India".to_string(),
            voter_login: Page::Login.path().to_string(),
            admin_login: Page::AdminLogin.path().to_string(),
            dashboard: None,
        }
    }
}

/// Which half of the phone login form to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginStep {
    Phone,
    Otp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginPage {
    pub step: LoginStep,
    pub hint: String,
}

impl LoginPage {
    pub fn new(step: LoginStep) -> Self {
        let hint = match step {
            LoginStep::Phone => "Login with your registered mobile number",
            LoginStep::Otp => "For demo, use OTP: 123456 or 000000",
        };
        Self {
            step,
            hint: hint.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminLoginPage {
    pub hint: String,
}

impl Default for AdminLoginPage {
    fn default() -> Self {
        Self {
            hint: "For demo, use admin/password".to_string(),
        }
    }
}
