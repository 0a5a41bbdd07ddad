use std::fmt::Display;

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

mod admin;
mod voter;

pub use admin::{Admin, AdminCredentials, Role};
pub use voter::{Voter, VoterId};

/// A user of our application that can be carried in a session.
pub trait User: Sized {
    /// Extract this user type from a session, handing the session back if it
    /// belongs to a different kind of user.
    fn from_session(user: SessionUser) -> Result<Self, SessionUser>;

    /// Wrap this user back up into a session.
    fn into_session(self) -> SessionUser;
}

/// Different privilege levels.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Rights {
    Voter = 0,
    Admin = 1,
}

impl Display for Rights {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}",
            match self {
                Self::Voter => "voter",
                Self::Admin => "admin",
            }
        )
    }
}

/// The session object: whoever is logged in, serialised exactly as the
/// frontend stores it. An object with `"role": "admin"` is an admin, anything
/// else is a voter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionUser {
    Admin(Admin),
    Voter(Voter),
}

impl SessionUser {
    pub fn rights(&self) -> Rights {
        match self {
            Self::Admin(_) => Rights::Admin,
            Self::Voter(_) => Rights::Voter,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Admin(admin) => &admin.id,
            Self::Voter(voter) => &voter.id,
        }
    }
}

impl User for SessionUser {
    fn from_session(user: SessionUser) -> Result<Self, SessionUser> {
        Ok(user)
    }

    fn into_session(self) -> SessionUser {
        self
    }
}

impl User for Voter {
    fn from_session(user: SessionUser) -> Result<Self, SessionUser> {
        match user {
            SessionUser::Voter(voter) => Ok(voter),
            other => Err(other),
        }
    }

    fn into_session(self) -> SessionUser {
        SessionUser::Voter(self)
    }
}

impl User for Admin {
    fn from_session(user: SessionUser) -> Result<Self, SessionUser> {
        match user {
            SessionUser::Admin(admin) => Ok(admin),
            other => Err(other),
        }
    }

    fn into_session(self) -> SessionUser {
        SessionUser::Admin(self)
    }
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json::{self, json};

    use super::*;

    #[test]
    fn voter_round_trips_through_frontend_shape() {
        let stored = json!({
            "id": "1",
            "phone": "9876543210",
            "name": "Rahul Sharma",
            "constituency": "Mumbai North",
            "hasVoted": false,
        });
        let user: SessionUser = serde_json::from_value(stored.clone()).unwrap();
        assert_eq!(user, SessionUser::Voter(Voter::example()));
        assert_eq!(serde_json::to_value(&user).unwrap(), stored);
    }

    #[test]
    fn role_tag_marks_an_admin() {
        let stored = json!({
            "id": "admin-1",
            "username": "admin",
            "name": "Election Officer",
            "role": "admin",
        });
        let user: SessionUser = serde_json::from_value(stored).unwrap();
        assert_eq!(user.rights(), Rights::Admin);
        assert_eq!(user.id(), "admin-1");
    }

    #[test]
    fn voter_with_documents_keeps_them() {
        let stored = json!({
            "id": "1",
            "phone": "9876543210",
            "name": "Rahul Sharma",
            "aadhaarNumber": "123456789012",
            "voterId": "ABC1234567",
            "constituency": "Mumbai North",
            "hasVoted": true,
        });
        let user: SessionUser = serde_json::from_value(stored).unwrap();
        let voter = Voter::from_session(user).unwrap();
        assert_eq!(voter.aadhaar_number.unwrap().to_string(), "123456789012");
        assert_eq!(voter.voter_id.unwrap().to_string(), "ABC1234567");
        assert!(voter.has_voted);
    }

    #[test]
    fn malformed_document_is_not_a_session() {
        let stored = json!({
            "id": "1",
            "phone": "9876543210",
            "name": "Rahul Sharma",
            "aadhaarNumber": "12345",
            "constituency": "Mumbai North",
            "hasVoted": false,
        });
        assert!(serde_json::from_value::<SessionUser>(stored).is_err());
    }

    #[test]
    fn wrong_kind_hands_the_session_back() {
        let admin = SessionUser::Admin(Admin::example());
        let returned = Voter::from_session(admin.clone()).unwrap_err();
        assert_eq!(returned, admin);
    }
}
