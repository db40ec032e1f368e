//! Session and identity: who is sitting at the table.
//!
//! Held outside `GameState`. The rules never consult it; front ends use
//! it to decide which seat a person controls.
//!
//! ```
//! use rust_ludo::core::Color;
//! use rust_ludo::session::{Credentials, Session};
//!
//! let mut session = Session::new(Credentials::default());
//! assert!(session.login("player2", "player2"));
//! assert_eq!(session.user().and_then(|u| u.color), Some(Color::Green));
//!
//! session.logout();
//! assert!(session.user().is_none());
//! ```

mod credentials;

pub use credentials::Credentials;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Color;
use credentials::{account_table, Account};

/// What a logged-in user may do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Oversees the table, holds no seat.
    Admin,
    /// Plays one color.
    Player,
}

/// A logged-in identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    /// Seat color for players, `None` for the admin.
    pub color: Option<Color>,
}

impl User {
    /// Whether this user may roll and move while `turn` is on turn.
    ///
    /// Only the seat player of that color may. The admin watches.
    #[must_use]
    pub fn may_play(&self, turn: Color) -> bool {
        self.role == Role::Player && self.color == Some(turn)
    }
}

/// Why a login was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("unknown user {0:?}")]
    UnknownUser(String),

    #[error("wrong password for {0:?}")]
    WrongPassword(String),
}

/// The identity currently using this table.
#[derive(Clone, Debug)]
pub struct Session {
    accounts: FxHashMap<String, Account>,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            accounts: account_table(&credentials),
            user: None,
        }
    }

    /// Check a username/password pair without logging in.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<User, LoginError> {
        let account = self
            .accounts
            .get(username)
            .ok_or_else(|| LoginError::UnknownUser(username.to_string()))?;

        if account.password != password {
            return Err(LoginError::WrongPassword(username.to_string()));
        }
        Ok(account.user.clone())
    }

    /// Log in. On failure the current user, if any, stays logged in.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match self.authenticate(username, password) {
            Ok(user) => {
                tracing::info!(username = %user.username, role = ?user.role, "login");
                self.user = Some(user);
                true
            }
            Err(e) => {
                tracing::debug!(error = %e, "login refused");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "logout");
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_login() {
        let mut session = Session::default();

        assert!(session.login("admin", "password123"));
        let user = session.user().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.color, None);
    }

    #[test]
    fn test_seat_logins() {
        let mut session = Session::default();

        for (n, color) in Color::all().enumerate() {
            let name = format!("player{}", n + 1);
            assert!(session.login(&name, &name));
            let user = session.user().unwrap();
            assert_eq!(user.role, Role::Player);
            assert_eq!(user.color, Some(color));
        }
    }

    #[test]
    fn test_only_the_seat_player_may_play() {
        let session = Session::default();
        let admin = session.authenticate("admin", "password123").unwrap();
        let green = session.authenticate("player2", "player2").unwrap();

        for color in Color::all() {
            assert!(!admin.may_play(color));
            assert_eq!(green.may_play(color), color == Color::Green);
        }
    }

    #[test]
    fn test_authenticate_errors() {
        let session = Session::default();

        assert_eq!(
            session.authenticate("player5", "player5"),
            Err(LoginError::UnknownUser("player5".to_string()))
        );
        assert_eq!(
            session.authenticate("admin", "admin"),
            Err(LoginError::WrongPassword("admin".to_string()))
        );
        assert_eq!(
            session.authenticate("player1", "player2"),
            Err(LoginError::WrongPassword("player1".to_string()))
        );
    }

    #[test]
    fn test_failed_login_keeps_user() {
        let mut session = Session::default();
        assert!(session.login("player1", "player1"));

        assert!(!session.login("player2", "nope"));
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("player1"));
    }

    #[test]
    fn test_logout() {
        let mut session = Session::default();
        assert!(session.login("admin", "password123"));

        session.logout();
        assert!(session.user().is_none());

        // Logging out twice is harmless.
        session.logout();
        assert!(session.user().is_none());
    }
}
