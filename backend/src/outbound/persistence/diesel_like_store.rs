//! PostgreSQL-backed `LikeStore` implementation using Diesel ORM.
//!
//! This adapter records likes and answers per-post counts. Duplicate likes
//! surface from the composite primary key, so racing double-taps resolve at
//! the constraint.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{LikeStore, LikeStoreError};
use crate::domain::UserId;

use super::diesel_basic_error_mapping::{count_to_u64, map_basic_diesel_error, map_basic_pool_error};
use super::models::NewLikeRow;
use super::pool::{DbPool, PoolError};
use super::schema::likes;

/// Diesel-backed implementation of the like store port.
#[derive(Clone)]
pub struct DieselLikeStore {
    pool: DbPool,
}

impl DieselLikeStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to like store errors.
fn map_pool_error(error: PoolError) -> LikeStoreError {
    map_basic_pool_error(error, |message| LikeStoreError::connection(message))
}

/// Map Diesel errors to like store errors.
fn map_diesel_error(error: diesel::result::Error) -> LikeStoreError {
    map_basic_diesel_error(error, LikeStoreError::query, LikeStoreError::connection)
}

/// Map an insert failure, promoting unique violations to the duplicate variant.
fn map_insert_error(error: diesel::result::Error, user: &UserId, post_id: &Uuid) -> LikeStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) = error {
        return LikeStoreError::duplicate_like(user.to_string(), post_id.to_string());
    }
    map_diesel_error(error)
}

#[async_trait]
impl LikeStore for DieselLikeStore {
    async fn insert(&self, user: &UserId, post_id: &Uuid) -> Result<(), LikeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewLikeRow {
            user_id: *user.as_uuid(),
            post_id: *post_id,
        };

        diesel::insert_into(likes::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| map_insert_error(err, user, post_id))
    }

    async fn delete(&self, user: &UserId, post_id: &Uuid) -> Result<bool, LikeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            likes::table.filter(
                likes::user_id
                    .eq(user.as_uuid())
                    .and(likes::post_id.eq(post_id)),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }

    async fn exists(&self, user: &UserId, post_id: &Uuid) -> Result<bool, LikeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = likes::table
            .filter(
                likes::user_id
                    .eq(user.as_uuid())
                    .and(likes::post_id.eq(post_id)),
            )
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count > 0)
    }

    async fn count_for_post(&self, post_id: &Uuid) -> Result<u64, LikeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = likes::table
            .filter(likes::post_id.eq(post_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(count_to_u64(count))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping edge cases.

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let store_err = map_pool_error(pool_err);

        assert!(matches!(store_err, LikeStoreError::Connection { .. }));
        assert!(store_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let diesel_err = diesel::result::Error::NotFound;
        let store_err = map_diesel_error(diesel_err);

        assert!(matches!(store_err, LikeStoreError::Query { .. }));
        assert!(store_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate_like() {
        let user = UserId::random();
        let post_id = Uuid::new_v4();
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates unique constraint")),
        );

        let store_err = map_insert_error(diesel_err, &user, &post_id);

        let LikeStoreError::DuplicateLike {
            user: reported_user,
            post,
        } = store_err
        else {
            panic!("expected duplicate like error, got {store_err}");
        };
        assert_eq!(reported_user, user.to_string());
        assert_eq!(post, post_id.to_string());
    }

    #[rstest]
    fn other_database_errors_stay_query_errors() {
        let diesel_err = diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            Box::new(String::from("violates foreign key constraint")),
        );

        let store_err = map_insert_error(diesel_err, &UserId::random(), &Uuid::new_v4());

        assert!(matches!(store_err, LikeStoreError::Query { .. }));
    }
}
