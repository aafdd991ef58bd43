//! Session context for the UI layer.
//!
//! Wraps the auth service and holds the in-memory session state for the
//! lifetime of the process. On construction it re-initializes from persisted
//! state, so a fresh load of the application resumes an existing session.

use accred_core::auth::{AuthService, AuthenticatedUser, LoginOutcome};
use accred_core::error::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-wide session state over an [`AuthService`].
///
/// Constructed once per process with the auth service injected; the UI tree
/// consumes `login`, `logout`, `user`, and `is_authenticated` and never
/// touches the store directly.
pub struct AuthContext {
    auth: Arc<dyn AuthService>,
    user: RwLock<Option<AuthenticatedUser>>,
}

impl AuthContext {
    /// Builds the context, restoring any session persisted by a previous
    /// run. A present token with a readable user record starts the context
    /// authenticated.
    pub async fn initialize(auth: Arc<dyn AuthService>) -> Self {
        let user = if auth.check_auth().await {
            auth.current_user().await
        } else {
            None
        };
        if user.is_some() {
            debug!("restored persisted session");
        }
        Self {
            auth,
            user: RwLock::new(user),
        }
    }

    /// Attempts a login and, when granted, caches the user in memory.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        let outcome = self.auth.login(username, password).await?;
        if let LoginOutcome::Granted { user, .. } = &outcome {
            *self.user.write().await = Some(user.clone());
        }
        Ok(outcome)
    }

    /// Ends the session and clears the cached user.
    pub async fn logout(&self) -> Result<()> {
        self.auth.logout().await?;
        *self.user.write().await = None;
        Ok(())
    }

    /// Returns the signed-in user, if any.
    pub async fn user(&self) -> Option<AuthenticatedUser> {
        self.user.read().await.clone()
    }

    /// Returns whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }
}
