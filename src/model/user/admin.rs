use serde::{Deserialize, Serialize};

/// The only role an admin session can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

/// An election officer, as held in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl Admin {
    pub fn new(id: impl Into<String>, username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            name: name.into(),
            role: Role::Admin,
        }
    }
}

/// Raw admin credentials, received from a user. These are never stored directly,
/// since the password is in plaintext.
#[derive(Clone, Deserialize, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Admin {
        pub fn example() -> Self {
            Self::new("admin-1", "admin", "Election Officer")
        }
    }

    impl AdminCredentials {
        pub fn example() -> Self {
            Self {
                username: "admin".into(),
                password: "password".into(),
            }
        }

        pub fn empty() -> Self {
            Self {
                username: "".into(),
                password: "".into(),
            }
        }
    }
}
