//! Authentication strategies.
//!
//! A [`QilinClient`](crate::QilinClient) delegates to one of these to build
//! the headers merged into every request. New schemes plug in by
//! implementing [`AuthStrategy`]; resources never see the difference.

use std::fmt;
use std::sync::Arc;

use qilin_core::config::auth::{AuthScheme, AuthSettings};
use qilin_core::error::AppError;
use qilin_core::result::AppResult;
use qilin_core::traits::AuthStrategy;
use qilin_core::types::AuthConfig;

/// Adds nothing to requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl AuthStrategy for NoAuth {
    fn scheme(&self) -> &str {
        "none"
    }

    fn auth_config(&self) -> AuthConfig {
        AuthConfig::empty()
    }
}

/// Sends `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("token", &"***")
            .finish()
    }
}

impl AuthStrategy for BearerToken {
    fn scheme(&self) -> &str {
        "bearer"
    }

    fn auth_config(&self) -> AuthConfig {
        AuthConfig::empty().with_header("Authorization", format!("Bearer {}", self.token))
    }
}

/// Sends a static key in a named header.
#[derive(Clone)]
pub struct ApiKey {
    header: String,
    key: String,
}

impl ApiKey {
    pub fn new(header: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            key: key.into(),
        }
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("header", &self.header)
            .field("key", &"***")
            .finish()
    }
}

impl AuthStrategy for ApiKey {
    fn scheme(&self) -> &str {
        "api_key"
    }

    fn auth_config(&self) -> AuthConfig {
        AuthConfig::empty().with_header(&self.header, self.key.clone())
    }
}

/// Wraps a closure, for schemes that compute credentials per request
/// (e.g. a token read from a shared cache).
pub struct FnAuth<F> {
    name: String,
    build: F,
}

impl<F> FnAuth<F>
where
    F: Fn() -> AuthConfig + Send + Sync + 'static,
{
    pub fn new(name: impl Into<String>, build: F) -> Self {
        Self {
            name: name.into(),
            build,
        }
    }
}

impl<F> fmt::Debug for FnAuth<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAuth").field("name", &self.name).finish()
    }
}

impl<F> AuthStrategy for FnAuth<F>
where
    F: Fn() -> AuthConfig + Send + Sync + 'static,
{
    fn scheme(&self) -> &str {
        &self.name
    }

    fn auth_config(&self) -> AuthConfig {
        (self.build)()
    }
}

/// Build the strategy selected in configuration.
pub fn strategy_from_settings(settings: &AuthSettings) -> AppResult<Arc<dyn AuthStrategy>> {
    let token = || {
        settings
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.token is required for the '{:?}' scheme",
                    settings.scheme
                ))
            })
    };

    Ok(match settings.scheme {
        AuthScheme::None => Arc::new(NoAuth),
        AuthScheme::Bearer => Arc::new(BearerToken::new(token()?)),
        AuthScheme::ApiKey => Arc::new(ApiKey::new(settings.header.clone(), token()?)),
    })
}
