//! High-level database service layer.
//!
//! Repository-agnostic operations that work with any implementation of
//! [`BlogRepository`]. The HTTP handlers call these functions rather than
//! the trait directly, so cross-cutting behavior (logging, future
//! orchestration) stays consistent regardless of the storage backend.

use log::info;

use crate::api::{Blog, NewBlog};
use crate::db::repository::{BlogRepository, RepositoryResult};

/// Check if the storage backend is healthy.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if the connection is healthy
pub async fn health_check<R: BlogRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Fetch every stored blog in insertion order.
pub async fn list_blogs<R: BlogRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Blog>> {
    repo.find_all().await
}

/// Store a new blog entry.
///
/// Validation and `likes` normalization happen inside the repository's
/// `insert` contract; this layer adds logging.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `candidate` - The blog to store
///
/// # Returns
/// * `Ok(Blog)` - The stored blog including its assigned id
/// * `Err(RepositoryError::ValidationError)` - If title or url is missing
pub async fn create_blog<R: BlogRepository + ?Sized>(
    repo: &R,
    candidate: NewBlog,
) -> RepositoryResult<Blog> {
    let blog = repo.insert(candidate).await?;
    info!("stored blog '{}' by {} (id={})", blog.title, blog.author, blog.id);
    Ok(blog)
}

/// Count the stored blogs.
pub async fn count_blogs<R: BlogRepository + ?Sized>(repo: &R) -> RepositoryResult<usize> {
    repo.count().await
}
