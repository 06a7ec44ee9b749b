//! Driving port for login/authentication use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! authenticate credentials without knowing (or importing) the backing
//! infrastructure. This makes HTTP handler tests deterministic because they
//! can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

/// Username accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_USERNAME: &str = "admin";
/// Password accepted by [`FixtureLoginService`].
pub const FIXTURE_LOGIN_PASSWORD: &str = "password";
/// User id issued by [`FixtureLoginService`] on success.
pub const FIXTURE_LOGIN_USER_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}

/// In-memory authenticator used when no database is configured.
///
/// One development account exists: [`FIXTURE_LOGIN_USERNAME`] with
/// [`FIXTURE_LOGIN_PASSWORD`] authenticates successfully and yields a fixed
/// user id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        if credentials.username() == FIXTURE_LOGIN_USERNAME
            && credentials.password() == FIXTURE_LOGIN_PASSWORD
        {
            User::try_from_strings(FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME)
                .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))
        } else {
            Err(Error::unauthorized("invalid credentials"))
        }
    }
}
