//! Mock authentication service.
//!
//! Validates a single hardcoded credential pair and persists an opaque
//! session token through the store adapter. Token presence alone is treated
//! as proof of identity; this is NOT a security boundary and exists only to
//! gate the review area of the proof of concept.

use crate::config::{AccredConfig, DEFAULT_LOGIN_DELAY_MS};
use crate::storage::{keys, KeyValueStore};
use accred_core::auth::{AuthService, AuthenticatedUser, LoginOutcome};
use accred_core::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

// The only accepted credential pair (proof of concept only).
const MOCK_ADMIN_USERNAME: &str = "admin";
const MOCK_ADMIN_PASSWORD: &str = "admin";
const MOCK_ADMIN_EMAIL: &str = "admin@example.com";
const MOCK_ADMIN_ROLE: &str = "admin";

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Authentication service accepting a single hardcoded credential pair.
pub struct MockAuthService {
    store: Arc<dyn KeyValueStore>,
    /// Artificial suspension applied to login, mimicking network latency.
    login_delay: Duration,
}

impl MockAuthService {
    /// Creates a service with the default simulated login delay.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
        }
    }

    /// Creates a service with the delay taken from configuration.
    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &AccredConfig) -> Self {
        Self::new(store).with_login_delay(Duration::from_millis(config.login_delay_ms))
    }

    /// Overrides the simulated login delay (tests use zero).
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, username: &str, password: &str) -> Result<LoginOutcome> {
        // Simulate API latency.
        sleep(self.login_delay).await;

        if username != MOCK_ADMIN_USERNAME || password != MOCK_ADMIN_PASSWORD {
            debug!(username, "login denied");
            return Ok(LoginOutcome::Denied {
                reason: INVALID_CREDENTIALS.to_string(),
            });
        }

        let token = format!("mock-token-{}", Utc::now().timestamp_millis());
        let user = AuthenticatedUser {
            username: MOCK_ADMIN_USERNAME.to_string(),
            email: MOCK_ADMIN_EMAIL.to_string(),
            role: MOCK_ADMIN_ROLE.to_string(),
        };

        self.store.write(keys::AUTH_TOKEN, &token).await?;
        self.store
            .write(keys::CURRENT_USER, &serde_json::to_string(&user)?)
            .await?;

        info!(username, "login granted");
        Ok(LoginOutcome::Granted { user, token })
    }

    async fn logout(&self) -> Result<()> {
        self.store.remove(keys::AUTH_TOKEN).await?;
        self.store.remove(keys::CURRENT_USER).await?;
        info!("logged out");
        Ok(())
    }

    async fn check_auth(&self) -> bool {
        match self.store.read(keys::AUTH_TOKEN).await {
            Ok(token) => token.is_some(),
            Err(e) => {
                warn!(error = %e, "failed to read auth token, treating as anonymous");
                false
            }
        }
    }

    async fn current_user(&self) -> Option<AuthenticatedUser> {
        match self.store.read(keys::CURRENT_USER).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "malformed current user record");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "failed to read current user");
                None
            }
        }
    }
}
