//! Admin session state machine.

use std::fmt;

/// Admin login state. The password is cached while logged in and replayed on
/// every privileged request.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    LoggedOut,
    LoggedIn { password: String },
}

impl AdminSession {
    pub fn logged_in(password: String) -> Self {
        AdminSession::LoggedIn { password }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, AdminSession::LoggedIn { .. })
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            AdminSession::LoggedIn { password } => Some(password),
            AdminSession::LoggedOut => None,
        }
    }

    /// LoggedOut -> LoggedIn after the endpoint accepted `password`.
    pub fn establish(&mut self, password: String) {
        *self = Self::logged_in(password);
    }

    /// Drop cached credentials.
    pub fn clear(&mut self) {
        *self = AdminSession::LoggedOut;
    }
}

impl fmt::Debug for AdminSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminSession::LoggedOut => f.write_str("LoggedOut"),
            AdminSession::LoggedIn { .. } => f.write_str("LoggedIn { password: <redacted> }"),
        }
    }
}
