//! Diesel-backed `LoginService` adapter.
//!
//! This adapter preserves the fixture login contract (`admin`/`password`)
//! while ensuring the authenticated account exists in PostgreSQL, so follow
//! edges, posts and likes written afterwards reference a real users row. The
//! credential check moves into the database when credential persistence
//! lands.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{
    FIXTURE_LOGIN_PASSWORD, FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME, LoginService,
};
use crate::domain::{Error, LoginCredentials, User};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::NewUserRow;
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed `LoginService` that preserves fixture-authentication
/// semantics.
#[derive(Clone)]
pub struct DieselLoginService {
    pool: DbPool,
}

impl DieselLoginService {
    /// Create a new service with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Insert the users row for `user` if it is not already present.
    ///
    /// The conflict target is the primary key, so concurrent logins for the
    /// same account are both no-ops after the first insert.
    async fn ensure_user_exists(&self, user: &User) -> Result<(), Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: *user.id().as_uuid(),
            username: user.username().as_ref(),
        };

        diesel::insert_into(users::table)
            .values(&new_row)
            .on_conflict(users::id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

/// Check credentials against the development account.
fn verify_fixture_credentials(credentials: &LoginCredentials) -> Result<User, Error> {
    if credentials.username() != FIXTURE_LOGIN_USERNAME
        || credentials.password() != FIXTURE_LOGIN_PASSWORD
    {
        return Err(Error::unauthorized("invalid credentials"));
    }

    User::try_from_strings(FIXTURE_LOGIN_USER_ID, FIXTURE_LOGIN_USERNAME)
        .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))
}

/// Map pool errors to domain errors.
fn map_pool_error(error: PoolError) -> Error {
    map_basic_pool_error(error, |message| {
        Error::service_unavailable(format!("user storage unavailable: {message}"))
    })
}

/// Map Diesel errors to domain errors.
fn map_diesel_error(error: diesel::result::Error) -> Error {
    map_basic_diesel_error(
        error,
        |message| Error::internal(format!("user storage query failed: {message}")),
        |message| Error::service_unavailable(format!("user storage unavailable: {message}")),
    )
}

#[async_trait]
impl LoginService for DieselLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let user = verify_fixture_credentials(credentials)?;
        self.ensure_user_exists(&user).await?;
        Ok(user)
    }
}
