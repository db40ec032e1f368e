//! Accepted logins.
//!
//! One admin account plus one account per seat. Seat accounts are named
//! `{seat_prefix}{n}` for `n` in `1..=4`, use their own name as password,
//! and sit at `Color::from_seat(n - 1)`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Role, User};
use crate::core::{Color, COLOR_COUNT};

/// Login configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub admin_username: String,
    pub admin_password: String,
    /// Seat accounts are this prefix followed by the seat number (1-4).
    pub seat_prefix: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "password123".to_string(),
            seat_prefix: "player".to_string(),
        }
    }
}

impl Credentials {
    /// Username of the account seated at `color`.
    #[must_use]
    pub fn seat_username(&self, color: Color) -> String {
        format!("{}{}", self.seat_prefix, color.seat() + 1)
    }
}

/// A password and the identity it unlocks.
#[derive(Clone, Debug)]
pub(crate) struct Account {
    pub password: String,
    pub user: User,
}

/// Username → account lookup table built from `Credentials`.
pub(crate) fn account_table(credentials: &Credentials) -> FxHashMap<String, Account> {
    let mut accounts = FxHashMap::default();
    accounts.reserve(COLOR_COUNT + 1);

    accounts.insert(
        credentials.admin_username.clone(),
        Account {
            password: credentials.admin_password.clone(),
            user: User {
                username: credentials.admin_username.clone(),
                role: Role::Admin,
                color: None,
            },
        },
    );

    for color in Color::all() {
        let username = credentials.seat_username(color);
        accounts.insert(
            username.clone(),
            Account {
                password: username.clone(),
                user: User {
                    username,
                    role: Role::Player,
                    color: Some(color),
                },
            },
        );
    }

    accounts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_usernames() {
        let credentials = Credentials::default();

        assert_eq!(credentials.seat_username(Color::Red), "player1");
        assert_eq!(credentials.seat_username(Color::Blue), "player4");
    }

    #[test]
    fn test_account_table() {
        let accounts = account_table(&Credentials::default());

        assert_eq!(accounts.len(), 5);
        assert_eq!(accounts["admin"].password, "password123");
        assert_eq!(accounts["admin"].user.role, Role::Admin);
        assert_eq!(accounts["player3"].password, "player3");
        assert_eq!(accounts["player3"].user.color, Some(Color::Yellow));
    }

    #[test]
    fn test_custom_prefix() {
        let credentials = Credentials {
            seat_prefix: "seat".to_string(),
            ..Credentials::default()
        };
        let accounts = account_table(&credentials);

        assert!(accounts.contains_key("seat2"));
        assert!(!accounts.contains_key("player2"));
    }
}
