//! Session Context
//!
//! Explicit process-wide session state: who is signed in, initialized from
//! a cached credential on load and cleared on sign-out. The engine reads
//! the current actor from here to stamp `lastModifiedBy`; it never
//! authenticates anyone itself.

use serde::{Deserialize, Serialize};

/// Opaque identity of the signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}

/// Current session; `None` user means signed out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserIdentity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserIdentity) -> Self {
        Self { user: Some(user) }
    }

    /// Restore a session from a locally cached credential (JSON-encoded
    /// `UserIdentity`). An unreadable credential yields a signed-out
    /// session rather than an error.
    pub fn from_cached(credential: &str) -> Self {
        match serde_json::from_str::<UserIdentity>(credential) {
            Ok(user) => Self::signed_in(user),
            Err(e) => {
                log::warn!("ignoring unreadable cached credential: {}", e);
                Self::new()
            }
        }
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// Identity used to stamp `lastModifiedBy`
    pub fn actor(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    pub fn sign_in(&mut self, user: UserIdentity) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cached_credential() {
        let session = Session::from_cached(r#"{"email":"user@example.com","name":"User"}"#);
        assert_eq!(session.actor(), Some("user@example.com"));
        assert_eq!(session.user().unwrap().name.as_deref(), Some("User"));
    }

    #[test]
    fn test_unreadable_credential_is_signed_out() {
        let session = Session::from_cached("not json");
        assert_eq!(session.actor(), None);
    }

    #[test]
    fn test_sign_out_clears_identity() {
        let mut session = Session::signed_in(UserIdentity::new("user@example.com"));
        session.sign_out();
        assert!(session.user().is_none());
    }
}
