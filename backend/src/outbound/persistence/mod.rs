//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Store ports are implemented against PostgreSQL via Diesel with async
//! support through `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: store implementations only translate between Diesel
//!   rows and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Constraint-backed uniqueness**: duplicate follow edges and likes are
//!   reported from the database unique constraints, so concurrent writers
//!   race on the constraint rather than on a read-then-write check.
//! - **Strongly typed errors**: database failures are mapped to the store
//!   port error types.
//!
//! # Example
//!
//! ```ignore
//! use backend::outbound::persistence::{DbPool, DieselFollowStore, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/social")).await?;
//! let follows = DieselFollowStore::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_comment_store;
mod diesel_follow_store;
mod diesel_identity_directory;
mod diesel_like_store;
mod diesel_login_service;
mod diesel_post_store;
mod models;
mod pool;
mod schema;

pub use diesel_comment_store::DieselCommentStore;
pub use diesel_follow_store::DieselFollowStore;
pub use diesel_identity_directory::DieselIdentityDirectory;
pub use diesel_like_store::DieselLikeStore;
pub use diesel_login_service::DieselLoginService;
pub use diesel_post_store::DieselPostStore;
pub use pool::{DbPool, PoolConfig, PoolError};
