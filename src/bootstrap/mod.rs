//! Bootstrap gate and identity provider hand-off
//!
//! - [`BootstrapGate`] - mount-time decision on the critical secret
//! - [`Mount`] - the blocked screen or the mounted identity provider
//! - [`IdentityProvider`] - wraps the application tree once the gate passes

pub mod gate;
pub mod identity;

pub use gate::{BootstrapGate, GateDecision, Mount};
pub use identity::{IdentityProvider, IdentityProviderConfig, UserSession, SIGN_IN_URL, SIGN_UP_URL};
