use std::fmt;

use blu_types::QobuzUser;
use serde::Deserialize;

use crate::AuthError;

/// One Qobuz account the console may sign in as.
#[derive(Deserialize, Clone)]
pub struct Account {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(default)]
    pub subscription: Option<String>,
    pub token: String,
}

impl Account {
    pub fn user(&self) -> QobuzUser {
        QobuzUser {
            id: self.user_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            subscription: self.subscription.clone(),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("display_name", &self.display_name)
            .field("subscription", &self.subscription)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn login(&self, email: &str, password: &str) -> Result<&Account, AuthError> {
        self.accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email.trim()) && a.password == password)
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Returns the account's user when `token` belongs to `userId`.
    pub fn verify(&self, userId: &str, token: &str) -> Option<QobuzUser> {
        self.accounts
            .iter()
            .find(|a| a.user_id == userId && a.token == token)
            .map(Account::user)
    }

    pub fn find_by_token(&self, token: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.token == token)
    }
}

#[cfg(test)]
pub(crate) fn test_registry() -> AccountRegistry {
    AccountRegistry::new(vec![
        Account {
            user_id: "1001".into(),
            email: "listener@example.com".into(),
            password: "hunter2".into(),
            display_name: "Listener".into(),
            subscription: Some("Studio".into()),
            token: "tok-1001".into(),
        },
        Account {
            user_id: "1002".into(),
            email: "guest@example.com".into(),
            password: "guest".into(),
            display_name: "Guest".into(),
            subscription: None,
            token: "tok-1002".into(),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_matches_email_case_insensitively() {
        let registry = test_registry();
        let account = registry.login(" Listener@Example.com", "hunter2").unwrap();
        assert_eq!(account.user_id, "1001");
        assert!(matches!(
            registry.login("listener@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn verify_requires_matching_user_and_token() {
        let registry = test_registry();
        assert_eq!(registry.verify("1001", "tok-1001").unwrap().display_name, "Listener");
        assert!(registry.verify("1002", "tok-1001").is_none());
        assert!(registry.verify("1001", "").is_none());
    }

    #[test]
    fn debug_output_hides_secrets() {
        let registry = test_registry();
        let rendered = format!("{registry:?}");
        assert!(rendered.contains("listener@example.com"));
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("tok-1001"));
    }
}
