//! Public API surface for the blog-list backend.
//!
//! This file consolidates the domain types shared by the storage layer,
//! the aggregation functions and the HTTP API. All types derive
//! Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Blog identifier assigned by the repository at insert time.
///
/// Serialized as a plain string so API payloads carry `"id": "..."`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogId(pub String);

impl BlogId {
    pub fn new(value: impl Into<String>) -> Self {
        BlogId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted blog entry.
///
/// Invariant: `title` and `url` are non-empty and `likes` is always
/// present once stored (insert normalizes an absent value to 0). The
/// aggregation functions only read these records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

/// Insert candidate for a new blog entry.
///
/// `likes` stays optional here; normalizing it to 0 is an explicit step
/// of the repository `insert` contract, not a hidden storage default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: Option<u64>,
}

/// Projection of the blog with the most likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

/// Author with the most blog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: u64,
}

/// Author with the highest summed likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikeTotal {
    pub author: String,
    pub likes: u64,
}
