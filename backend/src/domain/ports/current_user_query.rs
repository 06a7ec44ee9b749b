//! Driving port for resolving the authenticated user's own identity.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

use super::login_service::{FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME};

/// Driving port behind the "who am I" lookup.
///
/// The session only stores a user id; adapters call this port to turn it back
/// into a full identity record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CurrentUserQuery: Send + Sync {
    /// Resolve the identity record behind an authenticated session.
    ///
    /// A session id without a matching record means the account vanished
    /// after login, so the caller receives `not_found`.
    async fn current_user(&self, user_id: &UserId) -> Result<User, Error>;
}

/// Fixture lookup that knows only the development account.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCurrentUserQuery;

#[async_trait]
impl CurrentUserQuery for FixtureCurrentUserQuery {
    async fn current_user(&self, user_id: &UserId) -> Result<User, Error> {
        if user_id.as_ref() == FIXTURE_LOGIN_USER_ID {
            User::try_from_strings(FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME)
                .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))
        } else {
            Err(Error::not_found(format!("user {user_id} not found")))
        }
    }
}
