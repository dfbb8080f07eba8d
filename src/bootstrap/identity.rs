//! Identity provider integration boundary
//!
//! The identity provider itself is external. This module holds what the gate
//! hands to it (the publishable key and the two routing hints) and the
//! current-session query the rest of the client reads.

use crate::config::SecretString;
use crate::ui::{Action, ActionOutcome, Component, RenderError, Screen};
use secrecy::ExposeSecret;

/// Route of the sign-in entry point
pub const SIGN_IN_URL: &str = "/sign-in";

/// Route of the sign-up entry point
pub const SIGN_UP_URL: &str = "/sign-up";

/// Settings the identity provider is mounted with
#[derive(Debug, Clone)]
pub struct IdentityProviderConfig {
    publishable_key: SecretString,
    sign_in_url: String,
    sign_up_url: String,
}

impl IdentityProviderConfig {
    /// Configuration with the standard sign-in and sign-up routes
    pub fn new(publishable_key: SecretString) -> Self {
        Self {
            publishable_key,
            sign_in_url: SIGN_IN_URL.to_string(),
            sign_up_url: SIGN_UP_URL.to_string(),
        }
    }

    /// The publishable key
    pub fn publishable_key(&self) -> &SecretString {
        &self.publishable_key
    }

    /// Sign-in route
    pub fn sign_in_url(&self) -> &str {
        &self.sign_in_url
    }

    /// Sign-up route
    pub fn sign_up_url(&self) -> &str {
        &self.sign_up_url
    }

    /// Whether the key targets the provider's development instance
    pub fn is_test_key(&self) -> bool {
        self.publishable_key.expose_secret().as_ref().starts_with("pk_test_")
    }
}

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    /// Provider-assigned user id
    pub user_id: String,
    /// Primary email address
    pub email: String,
}

/// Mounts the identity provider around the protected application tree
pub struct IdentityProvider<C> {
    config: IdentityProviderConfig,
    session: Option<UserSession>,
    child: C,
}

impl<C: Component> IdentityProvider<C> {
    /// Mounts `child` under the provider; nobody is signed in yet
    pub fn new(config: IdentityProviderConfig, child: C) -> Self {
        Self {
            config,
            session: None,
            child,
        }
    }

    /// Provider settings
    pub fn config(&self) -> &IdentityProviderConfig {
        &self.config
    }

    /// Current session, if a user is signed in
    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// Records a session established by the provider
    pub fn sign_in(&mut self, session: UserSession) {
        tracing::info!(user_id = %session.user_id, "User signed in");
        self.session = Some(session);
    }

    /// Clears the current session
    pub fn sign_out(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(user_id = %session.user_id, "User signed out");
        }
    }

    /// The protected tree
    pub fn child(&self) -> &C {
        &self.child
    }
}

impl<C: Component> Component for IdentityProvider<C> {
    fn name(&self) -> &str {
        "IdentityProvider"
    }

    fn render(&mut self) -> Result<Screen, RenderError> {
        let screen = self
            .child
            .render()
            .map_err(|e| e.in_component("IdentityProvider"))?;

        let footer = match &self.session {
            Some(session) => format!("Signed in as {}", session.email),
            None => format!(
                "Not signed in: sign in at {} or create an account at {}",
                self.config.sign_in_url, self.config.sign_up_url
            ),
        };
        Ok(screen.blank().line(footer))
    }

    fn on_action(&mut self, action: Action) -> ActionOutcome {
        self.child.on_action(action)
    }
}
