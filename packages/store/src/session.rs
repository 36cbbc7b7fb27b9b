//! In-memory session state and its derived values.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::models::{LoginPayload, Role, SessionUpdate};

/// Avatar service; the account name is appended as `<account>.png`.
pub const AVATAR_URL_BASE: &str = "https://api.multiavatar.com";

/// Fields of the signed-in user. An empty token means logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub account: String,
    pub role: Role,
    pub cart: u32,
    pub id: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a session from persisted state. Only the token survives a
    /// restart; the profile fields start at their defaults.
    pub fn restore(persisted: PersistedSession) -> Self {
        Self {
            token: persisted.token,
            ..Self::default()
        }
    }

    /// The subset of the session that is written to storage.
    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            token: self.token.clone(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn avatar(&self) -> String {
        format!("{AVATAR_URL_BASE}/{}.png", self.account)
    }

    /// Validate `payload` and apply it. A rejected payload leaves the
    /// session untouched.
    pub fn login(&mut self, payload: &LoginPayload) -> Result<(), SessionError> {
        let update = payload.validate()?;
        self.apply(update);
        Ok(())
    }

    /// Apply an already-validated update.
    pub fn apply(&mut self, update: SessionUpdate) {
        if let Some(token) = update.token {
            self.token = token;
        }
        self.id = update.id;
        self.account = update.account;
        self.role = update.role;
        self.cart = update.cart;
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }
}

/// Persisted session layout: `{"token": "..."}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    #[serde(default)]
    pub token: String,
}

impl PersistedSession {
    pub fn from_json(s: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_session() -> Session {
        let mut session = Session::new();
        session
            .login(
                &LoginPayload::default()
                    .with_token("tok")
                    .with_object_id("42")
                    .with_account("alice")
                    .with_role("ADMIN")
                    .with_cart(3),
            )
            .unwrap();
        session
    }

    #[test]
    fn test_default_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(session.role, Role::User);
        assert_eq!(session.cart, 0);
    }

    #[test]
    fn test_login_with_token() {
        let mut session = Session::new();
        session
            .login(&LoginPayload::default().with_token("T1").with_account("a"))
            .unwrap();
        assert!(session.is_logged_in());
        assert_eq!(session.token, "T1");
        assert_eq!(session.account, "a");
    }

    #[test]
    fn test_login_without_token_keeps_token() {
        let mut session = admin_session();

        session
            .login(&LoginPayload::default().with_account("bob").with_cart(7))
            .unwrap();
        assert_eq!(session.token, "tok");
        assert_eq!(session.account, "bob");
        assert_eq!(session.cart, 7);
        // Profile refresh overwrites the rest unconditionally.
        assert_eq!(session.role, Role::User);
        assert_eq!(session.id, "");

        session
            .login(&LoginPayload::default().with_token(""))
            .unwrap();
        assert_eq!(session.token, "tok");
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut session = admin_session();
        assert!(session.is_admin());

        session.logout();
        assert!(!session.is_logged_in());
        assert!(!session.is_admin());
        assert_eq!(session.id, "");
        assert_eq!(session.account, "");
        assert_eq!(session.cart, 0);
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_is_admin_follows_role() {
        let mut session = admin_session();
        assert!(session.is_admin());
        session.role = Role::User;
        assert!(!session.is_admin());
        session.role = Role::Admin;
        assert!(session.is_admin());
    }

    #[test]
    fn test_avatar_interpolates_account() {
        let mut session = Session::new();
        assert_eq!(session.avatar(), "https://api.multiavatar.com/.png");
        session.account = "alice".to_string();
        assert_eq!(session.avatar(), "https://api.multiavatar.com/alice.png");
    }

    #[test]
    fn test_rejected_payload_leaves_session_untouched() {
        let mut session = admin_session();
        let before = session.clone();

        let result = session.login(
            &LoginPayload::default()
                .with_token("other")
                .with_role("ROOT"),
        );
        assert!(result.is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn test_restore_keeps_only_token() {
        let persisted = admin_session().persisted();
        assert_eq!(persisted.to_json().unwrap(), r#"{"token":"tok"}"#);

        let restored = Session::restore(PersistedSession::from_json(r#"{"token":"tok"}"#).unwrap());
        assert_eq!(restored.token, "tok");
        assert_eq!(restored.account, "");
        assert_eq!(restored.role, Role::User);
        assert_eq!(restored.cart, 0);
        assert_eq!(restored.id, "");
    }
}
