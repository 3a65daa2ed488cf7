//! This module provides the static Insights posts shown on the blog.
//!
//! Posts ship as a JSON seed compiled into the binary and are parsed once, on
//! first access. The list is read-only for the lifetime of the process and keeps
//! the seed's order, which is newest first by convention.

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;

use crate::types::{Post, PostId};

const SEED: &str = include_str!("../content/posts.json");

static POSTS: LazyLock<Vec<Post>> = LazyLock::new(|| {
    load(SEED).unwrap_or_else(|err| {
        log::error!("Failed to load Insights posts: {err}");
        Vec::new()
    })
});

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("malformed post seed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate post id {0}")]
    DuplicateId(PostId),
}

/// Parses a post seed, rejecting any id that appears twice.
pub fn load(json: &str) -> Result<Vec<Post>, ContentError> {
    let posts: Vec<Post> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(posts.len());
    for post in &posts {
        if !seen.insert(post.id) {
            return Err(ContentError::DuplicateId(post.id));
        }
    }
    Ok(posts)
}

/// All posts in seed order.
pub fn posts() -> &'static [Post] {
    &POSTS
}

pub fn post(id: PostId) -> Option<&'static Post> {
    posts().iter().find(|post| post.id == id)
}
