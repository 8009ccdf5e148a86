//! Repository trait for blog storage backends.
//!
//! The trait is the storage contract the rest of the crate codes against:
//! the HTTP layer and service layer only ever see `dyn BlogRepository`,
//! so backends can be swapped without touching either.

use async_trait::async_trait;

use crate::api::{Blog, NewBlog};

mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Repository trait for blog persistence.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Fetch every stored blog in insertion order.
    ///
    /// # Returns
    /// * `Ok(Vec<Blog>)` - All blogs, oldest first
    /// * `Err(RepositoryError)` - If the operation fails
    async fn find_all(&self) -> RepositoryResult<Vec<Blog>>;

    /// Store a new blog entry.
    ///
    /// Assigns a fresh identifier and normalizes an absent `likes` to 0.
    ///
    /// # Arguments
    /// * `candidate` - The blog to store
    ///
    /// # Returns
    /// * `Ok(Blog)` - The stored blog including its assigned id
    /// * `Err(RepositoryError::ValidationError)` - If `title` or `url`
    ///   is missing or empty
    async fn insert(&self, candidate: NewBlog) -> RepositoryResult<Blog>;

    /// Count the stored blogs.
    async fn count(&self) -> RepositoryResult<usize>;

    /// Check if the storage backend is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` if the connection is healthy
    async fn health_check(&self) -> RepositoryResult<bool>;
}

/// Validate an insert candidate against the storage contract.
///
/// Only `title` and `url` are required; `author` is carried through as
/// provided.
pub(crate) fn validate_new_blog(candidate: &NewBlog) -> RepositoryResult<()> {
    if candidate.title.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "title is required",
            ErrorContext::new("insert_blog"),
        ));
    }
    if candidate.url.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "url is required",
            ErrorContext::new("insert_blog"),
        ));
    }
    Ok(())
}
