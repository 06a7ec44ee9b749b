//! PostgreSQL-backed `PostStore` implementation using Diesel ORM.
//!
//! This adapter persists posts and serves the candidate reads behind author
//! timelines and feed composition. Rows pass through the validated domain
//! constructors on the way out, so stored text that no longer satisfies the
//! body rules surfaces as a query error instead of a malformed entity.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{PostStore, PostStoreError};
use crate::domain::{Post, PostBody, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewPostRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

/// Diesel-backed implementation of the post store port.
#[derive(Clone)]
pub struct DieselPostStore {
    pool: DbPool,
}

impl DieselPostStore {
    /// Create a new store with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to post store errors.
fn map_pool_error(error: PoolError) -> PostStoreError {
    map_basic_pool_error(error, |message| PostStoreError::connection(message))
}

/// Map Diesel errors to post store errors.
fn map_diesel_error(error: diesel::result::Error) -> PostStoreError {
    map_basic_diesel_error(error, PostStoreError::query, PostStoreError::connection)
}

/// Convert a database row into a validated domain post.
fn row_to_post(row: PostRow) -> Result<Post, PostStoreError> {
    let body = PostBody::new(row.body).map_err(|err| PostStoreError::query(err.to_string()))?;

    Ok(Post::new(
        row.id,
        UserId::from_uuid(row.user_id),
        body,
        row.created_at,
    ))
}

#[async_trait]
impl PostStore for DieselPostStore {
    async fn insert(&self, post: &Post) -> Result<(), PostStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewPostRow {
            id: post.id(),
            user_id: *post.author().as_uuid(),
            body: post.body().as_ref(),
            created_at: post.created_at(),
        };

        diesel::insert_into(posts::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, post_id: &Uuid) -> Result<Option<Post>, PostStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = posts::table
            .filter(posts::id.eq(post_id))
            .select(PostRow::as_select())
            .first::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_post).transpose()
    }

    async fn posts_by_author(&self, author: &UserId) -> Result<Vec<Post>, PostStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PostRow> = posts::table
            .filter(posts::user_id.eq(author.as_uuid()))
            .order((posts::created_at.desc(), posts::id.desc()))
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_post).collect()
    }

    async fn posts_by_authors(&self, authors: &[UserId]) -> Result<Vec<Post>, PostStoreError> {
        if authors.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let author_uuids: Vec<Uuid> = authors.iter().map(|id| *id.as_uuid()).collect();

        let rows: Vec<PostRow> = posts::table
            .filter(posts::user_id.eq_any(author_uuids))
            .order((posts::created_at.desc(), posts::id.desc()))
            .select(PostRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_post).collect()
    }

    async fn delete(&self, post_id: &Uuid) -> Result<bool, PostStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(posts::table.filter(posts::id.eq(post_id)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> PostRow {
        PostRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            body: String::from("hello feed"),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let pool_err = PoolError::checkout("connection refused");
        let store_err = map_pool_error(pool_err);

        assert!(matches!(store_err, PostStoreError::Connection { .. }));
        assert!(store_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let diesel_err = diesel::result::Error::NotFound;
        let store_err = map_diesel_error(diesel_err);

        assert!(matches!(store_err, PostStoreError::Query { .. }));
        assert!(store_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_builds_a_domain_post(valid_row: PostRow) {
        let expected_id = valid_row.id;
        let expected_author = valid_row.user_id;

        let post = row_to_post(valid_row).expect("valid row converts");

        assert_eq!(post.id(), expected_id);
        assert_eq!(post.author().as_uuid(), &expected_author);
        assert_eq!(post.body().as_ref(), "hello feed");
    }

    #[rstest]
    fn row_conversion_rejects_blank_bodies(mut valid_row: PostRow) {
        valid_row.body = String::from("   ");

        let error = row_to_post(valid_row).expect_err("blank body should fail");
        assert!(matches!(error, PostStoreError::Query { .. }));
    }
}
