//! Authentication service trait.

use super::model::{AuthenticatedUser, LoginOutcome};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract authentication service.
///
/// This trait defines the contract for session management, decoupling the
/// session context from the concrete credential check and token persistence.
///
/// Token presence alone is treated as proof of identity; there is no expiry
/// and no signature validation. This is explicitly NOT a security boundary.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Attempts to sign in with the given credentials.
    ///
    /// On a match, a session token is issued and persisted together with the
    /// user record, and the outcome is `Granted`. On a mismatch, the outcome
    /// is `Denied` with a generic reason.
    ///
    /// # Errors
    ///
    /// Only underlying store failures are errors; a credential mismatch is a
    /// normal `Denied` outcome.
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome>;

    /// Ends the current session, removing the persisted token and user.
    async fn logout(&self) -> Result<()>;

    /// Returns whether a session token is present.
    ///
    /// The token contents are not validated; presence alone implies an
    /// active session.
    async fn check_auth(&self) -> bool;

    /// Returns the persisted current user, if a session exists.
    ///
    /// A malformed persisted record is treated as absent and logged.
    async fn current_user(&self) -> Option<AuthenticatedUser>;
}
