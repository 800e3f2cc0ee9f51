//! Authentication strategy trait.

use crate::types::request::AuthConfig;

/// Produces the authentication settings merged into every outgoing request.
///
/// Implementations must not block and cannot fail. A strategy with nothing
/// to contribute returns [`AuthConfig::empty`].
pub trait AuthStrategy: Send + Sync + std::fmt::Debug + 'static {
    /// Return the scheme name (e.g., "bearer").
    fn scheme(&self) -> &str;

    /// Build the auth configuration for the next request.
    fn auth_config(&self) -> AuthConfig;
}
