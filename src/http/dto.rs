//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST
//! API. The aggregation output types already derive Serialize and are
//! re-exported as-is.

use serde::{Deserialize, Serialize};

pub use crate::api::{AuthorBlogCount, AuthorLikeTotal, FavoriteBlog};
use crate::api::{Blog, NewBlog};

/// Request body for creating a new blog.
///
/// Every field is optional at the wire level so an incomplete payload
/// reaches the storage validation (and yields a 400 with a structured
/// body) instead of being rejected during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<u64>,
}

impl From<CreateBlogRequest> for NewBlog {
    fn from(request: CreateBlogRequest) -> Self {
        NewBlog {
            title: request.title.unwrap_or_default(),
            author: request.author.unwrap_or_default(),
            url: request.url.unwrap_or_default(),
            likes: request.likes,
        }
    }
}

/// Blog representation in API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDto {
    /// Identifier assigned at creation time
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
}

impl From<Blog> for BlogDto {
    fn from(blog: Blog) -> Self {
        Self {
            id: blog.id.0,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
        }
    }
}

/// Summary statistics over the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogStatsResponse {
    /// Number of stored blogs
    pub count: usize,
    /// Sum of likes across all blogs
    pub total_likes: u64,
    /// Blog with the most likes (null when the store is empty)
    pub favorite_blog: Option<FavoriteBlog>,
    /// Author with the most entries (null when the store is empty)
    pub most_blogs: Option<AuthorBlogCount>,
    /// Author with the highest summed likes (null when the store is empty)
    pub most_likes: Option<AuthorLikeTotal>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage connection status
    pub database: String,
}
