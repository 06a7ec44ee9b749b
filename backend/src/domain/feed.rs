//! Home feed composition.
//!
//! Composition is a pure function over already-fetched posts so the ordering
//! rules can be exercised without a database. Adapters fetch candidate posts
//! for the viewer and every followed user, then delegate here.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::Post;

/// Order candidate posts into a home feed.
///
/// Posts are sorted newest first. Creation timestamps can collide when rows
/// are written in the same transaction batch, so ties break on the post id
/// (descending) to keep the ordering total and stable across reads.
/// Duplicate candidates, which occur when a fetch unions overlapping author
/// sets, are dropped after the first occurrence.
#[must_use]
pub fn compose_home_feed(mut candidates: Vec<Post>) -> Vec<Post> {
    candidates.sort_by(|a, b| {
        b.created_at()
            .cmp(&a.created_at())
            .then_with(|| b.id().cmp(&a.id()))
    });
    let mut seen: HashSet<Uuid> = HashSet::with_capacity(candidates.len());
    candidates.retain(|post| seen.insert(post.id()));
    candidates
}
