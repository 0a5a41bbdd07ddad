//! Which pages a visitor may open, and where they are sent instead.

use crate::model::user::Rights;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    AdminLogin,
    VerifyId,
    Dashboard,
    Admin,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Login,
        Page::AdminLogin,
        Page::VerifyId,
        Page::Dashboard,
        Page::Admin,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::AdminLogin => "/admin-login",
            Self::VerifyId => "/verify-id",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
        }
    }

    /// The rights a session must carry to open this page, if any.
    pub const fn required_rights(self) -> Option<Rights> {
        match self {
            Self::Home | Self::Login | Self::AdminLogin => None,
            Self::VerifyId | Self::Dashboard => Some(Rights::Voter),
            Self::Admin => Some(Rights::Admin),
        }
    }

    /// Where a session lands right after logging in.
    pub const fn after_login(rights: Rights) -> Page {
        match rights {
            Rights::Voter => Self::VerifyId,
            Rights::Admin => Self::Admin,
        }
    }

    /// The page a logged in session treats as its own home.
    pub const fn home_for(rights: Rights) -> Page {
        match rights {
            Rights::Voter => Self::Dashboard,
            Rights::Admin => Self::Admin,
        }
    }

    /// Where a visitor holding `rights` (`None` without a session) is sent
    /// instead of this page, or `None` if they may open it.
    pub fn redirect_for(self, rights: Option<Rights>) -> Option<Page> {
        let required = self.required_rights()?;
        match rights {
            None => Some(match required {
                Rights::Voter => Self::Login,
                Rights::Admin => Self::AdminLogin,
            }),
            Some(rights) if rights == required => None,
            Some(_) => Some(Self::Home),
        }
    }
}
