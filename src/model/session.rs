//! Signed-in user context handed to the dashboard.
//!
//! The session is an explicit value passed to whoever needs it, never a
//! process-wide global. Its JSON shape matches what the storefront login flow
//! stores after a successful sign-in (`first_name`, `email`).

use serde::{Deserialize, Serialize};

use crate::inventory_actor::InventoryError;

/// Profile of the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session context for one dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Option<UserProfile>,
}

impl Session {
    /// A session with no signed-in user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserProfile) -> Self {
        Self { user: Some(user) }
    }

    /// Builds a session from a stored user document.
    ///
    /// An empty document yields an anonymous session.
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        if json.trim().is_empty() {
            return Ok(Self::anonymous());
        }
        let user: UserProfile =
            serde_json::from_str(json).map_err(|e| InventoryError::Fixture(e.to_string()))?;
        Ok(Self::signed_in(user))
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// First name of the user, or `"User"`.
    pub fn display_name(&self) -> &str {
        self.first_name().unwrap_or("User")
    }

    /// First character of the user's first name, or `'U'`.
    pub fn avatar_initial(&self) -> char {
        self.first_name()
            .and_then(|name| name.chars().next())
            .unwrap_or('U')
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }

    /// Forgets the signed-in user.
    pub fn sign_out(&mut self) {
        self.user = None;
    }

    fn first_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|user| user.first_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_falls_back() {
        let session = Session::anonymous();
        assert!(!session.is_signed_in());
        assert_eq!(session.display_name(), "User");
        assert_eq!(session.avatar_initial(), 'U');
        assert_eq!(session.email(), None);
    }

    #[test]
    fn test_from_stored_user_document() {
        let session =
            Session::from_json(r#"{"first_name":"Maya","email":"maya@example.com","id":7}"#)
                .unwrap();
        assert!(session.is_signed_in());
        assert_eq!(session.display_name(), "Maya");
        assert_eq!(session.avatar_initial(), 'M');
        assert_eq!(session.email(), Some("maya@example.com"));
    }

    #[test]
    fn test_missing_first_name_uses_defaults() {
        let session = Session::from_json(r#"{"email":"ops@example.com"}"#).unwrap();
        assert!(session.is_signed_in());
        assert_eq!(session.display_name(), "User");
        assert_eq!(session.avatar_initial(), 'U');
    }

    #[test]
    fn test_sign_out_clears_user() {
        let mut session = Session::signed_in(UserProfile {
            first_name: Some("Ari".into()),
            email: None,
        });
        session.sign_out();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(matches!(
            Session::from_json("{not json"),
            Err(InventoryError::Fixture(_))
        ));
        assert_eq!(Session::from_json("").unwrap(), Session::anonymous());
    }
}
