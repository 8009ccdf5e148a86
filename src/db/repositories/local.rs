//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. All blogs live in a
//! `Vec` behind an `RwLock`, which keeps insertion order (the document
//! order `find_all` and the aggregations rely on) and makes execution
//! fast, deterministic and isolated.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::api::{Blog, BlogId, NewBlog};
use crate::db::repository::{
    validate_new_blog, BlogRepository, RepositoryError, RepositoryResult,
};

/// In-memory local repository.
///
/// # Example
/// ```
/// use bloglist_backend::db::repositories::LocalRepository;
/// use bloglist_backend::db::repository::BlogRepository;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let repo = LocalRepository::new();
/// let blogs = repo.find_all().await.unwrap();
/// assert!(blogs.is_empty());
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    blogs: Vec<Blog>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            blogs: Vec::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Pre-populate the repository with existing blogs.
    ///
    /// Helper for test setup; ids are kept as given.
    pub fn seed(&self, blogs: impl IntoIterator<Item = Blog>) {
        let mut data = self.data.write().unwrap();
        data.blogs.extend(blogs);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all blogs from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        data.blogs.clear();
    }

    /// Get the number of blogs stored.
    pub fn len(&self) -> usize {
        self.data.read().unwrap().blogs.len()
    }

    /// Check whether the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_healthy(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().unwrap().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection(format!(
                "local repository marked unhealthy during {}",
                operation
            )))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for LocalRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Blog>> {
        self.ensure_healthy("find_all")?;
        Ok(self.data.read().unwrap().blogs.clone())
    }

    async fn insert(&self, candidate: NewBlog) -> RepositoryResult<Blog> {
        self.ensure_healthy("insert")?;
        validate_new_blog(&candidate)?;

        let blog = Blog {
            id: BlogId::new(Uuid::new_v4().to_string()),
            title: candidate.title,
            author: candidate.author,
            url: candidate.url,
            likes: candidate.likes.unwrap_or(0),
        };

        let mut data = self.data.write().unwrap();
        data.blogs.push(blog.clone());
        Ok(blog)
    }

    async fn count(&self) -> RepositoryResult<usize> {
        self.ensure_healthy("count")?;
        Ok(self.len())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, author: &str, url: &str, likes: Option<u64>) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            author: author.to_string(),
            url: url.to_string(),
            likes,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let repo = LocalRepository::new();

        let first = repo
            .insert(candidate("one", "a", "https://one", Some(1)))
            .await
            .unwrap();
        let second = repo
            .insert(candidate("two", "a", "https://two", Some(2)))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_insert_defaults_missing_likes_to_zero() {
        let repo = LocalRepository::new();

        let blog = repo
            .insert(candidate("no likes", "a", "https://x", None))
            .await
            .unwrap();

        assert_eq!(blog.likes, 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_title() {
        let repo = LocalRepository::new();

        let err = repo
            .insert(candidate("", "a", "https://x", Some(1)))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_insert_rejects_empty_url() {
        let repo = LocalRepository::new();

        let err = repo
            .insert(candidate("title", "a", "", Some(1)))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ValidationError { .. }));
    }

    #[tokio::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = LocalRepository::new();

        for title in ["first", "second", "third"] {
            repo.insert(candidate(title, "a", "https://x", Some(0)))
                .await
                .unwrap();
        }

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_unhealthy_repository_fails_reads() {
        let repo = LocalRepository::new();
        repo.set_healthy(false);

        assert!(!repo.health_check().await.unwrap());
        let err = repo.find_all().await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let repo = LocalRepository::new();
        repo.insert(candidate("t", "a", "https://x", Some(3)))
            .await
            .unwrap();

        repo.clear();

        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
