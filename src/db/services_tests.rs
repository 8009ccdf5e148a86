#[cfg(test)]
mod tests {
    use crate::api::NewBlog;
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::RepositoryError;
    use crate::db::services;

    fn candidate(title: &str, url: &str, likes: Option<u64>) -> NewBlog {
        NewBlog {
            title: title.to_string(),
            author: "someone".to_string(),
            url: url.to_string(),
            likes,
        }
    }

    #[tokio::test]
    async fn test_list_blogs_empty_repository() {
        let repo = LocalRepository::new();
        let blogs = services::list_blogs(&repo).await.unwrap();
        assert!(blogs.is_empty());
    }

    #[tokio::test]
    async fn test_create_blog_roundtrip() {
        let repo = LocalRepository::new();

        let stored = services::create_blog(&repo, candidate("testing in backend", "https://google.com", Some(4)))
            .await
            .unwrap();
        assert_eq!(stored.likes, 4);

        let blogs = services::list_blogs(&repo).await.unwrap();
        assert_eq!(blogs.len(), 1);
        assert_eq!(blogs[0], stored);
    }

    #[tokio::test]
    async fn test_create_blog_defaults_likes() {
        let repo = LocalRepository::new();

        let stored = services::create_blog(&repo, candidate("no likes", "https://x", None))
            .await
            .unwrap();

        assert_eq!(stored.likes, 0);
    }

    #[tokio::test]
    async fn test_create_blog_validation_failure_stores_nothing() {
        let repo = LocalRepository::new();

        let err = services::create_blog(&repo, candidate("", "https://x", Some(1)))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(services::count_blogs(&repo).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_health_check_reflects_repository_state() {
        let repo = LocalRepository::new();
        assert!(services::health_check(&repo).await.unwrap());

        repo.set_healthy(false);
        assert!(!services::health_check(&repo).await.unwrap());
    }

    #[tokio::test]
    async fn test_services_work_through_trait_objects() {
        use crate::db::repository::BlogRepository;
        use std::sync::Arc;

        let repo: Arc<dyn BlogRepository> = Arc::new(LocalRepository::new());
        services::create_blog(repo.as_ref(), candidate("via dyn", "https://x", Some(2)))
            .await
            .unwrap();

        assert_eq!(services::count_blogs(repo.as_ref()).await.unwrap(), 1);
    }
}
