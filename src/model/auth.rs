mod session;

pub use session::{Session, SessionError, SESSION_COOKIE};
