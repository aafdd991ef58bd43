//! Authentication domain model.

use serde::{Deserialize, Serialize};

/// The signed-in user's identity as persisted alongside the session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub email: String,
    pub role: String,
}

/// The outcome of a login attempt.
///
/// A denied login is a normal value, not an error: the service reports the
/// reason without raising a failure, and nothing is logged at error level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The credentials matched; a session token was issued and persisted.
    Granted {
        user: AuthenticatedUser,
        token: String,
    },
    /// The credentials did not match. Carries a generic human-readable
    /// reason; no lockout, no attempt counting.
    Denied { reason: String },
}

impl LoginOutcome {
    /// Returns true if the login was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// Returns the granted user, if any.
    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            Self::Granted { user, .. } => Some(user),
            Self::Denied { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let granted = LoginOutcome::Granted {
            user: AuthenticatedUser {
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                role: "admin".to_string(),
            },
            token: "mock-token-1700000000000".to_string(),
        };
        assert!(granted.is_granted());
        assert_eq!(granted.user().unwrap().username, "admin");

        let denied = LoginOutcome::Denied {
            reason: "Invalid credentials".to_string(),
        };
        assert!(!denied.is_granted());
        assert!(denied.user().is_none());
    }
}
