//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer; the stats endpoint additionally runs the pure
//! aggregation functions over the fetched collection.

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{BlogDto, BlogStatsResponse, CreateBlogRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::services::stats;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// storage backend is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// GET /api/blogs
///
/// List all stored blogs as a JSON array.
pub async fn list_blogs(State(state): State<AppState>) -> HandlerResult<Vec<BlogDto>> {
    let blogs = db_services::list_blogs(state.repository.as_ref()).await?;

    Ok(Json(blogs.into_iter().map(Into::into).collect()))
}

/// POST /api/blogs
///
/// Create a new blog. Returns 201 with the stored entry, or 400 when
/// title or url is missing.
pub async fn create_blog(
    State(state): State<AppState>,
    Json(request): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogDto>), AppError> {
    let blog = db_services::create_blog(state.repository.as_ref(), request.into()).await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// GET /api/blogs/stats
///
/// Summary statistics over the whole collection, computed by the pure
/// aggregation functions.
pub async fn blog_stats(State(state): State<AppState>) -> HandlerResult<BlogStatsResponse> {
    let blogs = db_services::list_blogs(state.repository.as_ref()).await?;

    Ok(Json(BlogStatsResponse {
        count: blogs.len(),
        total_likes: stats::total_likes(&blogs),
        favorite_blog: stats::favorite_blog(&blogs),
        most_blogs: stats::most_blogs(&blogs),
        most_likes: stats::most_likes(&blogs),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Blog, BlogId};
    use crate::db::repositories::LocalRepository;
    use crate::db::repository::BlogRepository;
    use axum::response::IntoResponse;
    use std::sync::Arc;

    fn seeded_state() -> (Arc<LocalRepository>, AppState) {
        let repo = Arc::new(LocalRepository::new());
        repo.seed([
            Blog {
                id: BlogId::new("67ad639c85e7cfba3d8a5fa1"),
                title: "fullstackopen web dev".to_string(),
                author: "noname".to_string(),
                url: "https://google.com".to_string(),
                likes: 24,
            },
            Blog {
                id: BlogId::new("67ade90bee12ff7184e900a6"),
                title: "github is cool".to_string(),
                author: "noname".to_string(),
                url: "https://google.com".to_string(),
                likes: 289,
            },
            Blog {
                id: BlogId::new("67ad85b1047e109d4960f047"),
                title: "learning part4-testing backend".to_string(),
                author: "youm".to_string(),
                url: "https://google.com".to_string(),
                likes: 67,
            },
        ]);
        let state = AppState::new(repo.clone() as Arc<dyn BlogRepository>);
        (repo, state)
    }

    #[tokio::test]
    async fn test_list_blogs_returns_all_records_with_ids() {
        let (_repo, state) = seeded_state();

        let Json(blogs) = list_blogs(State(state)).await.unwrap();

        assert_eq!(blogs.len(), 3);
        assert!(blogs.iter().all(|b| !b.id.is_empty()));
        assert_eq!(blogs[0].title, "fullstackopen web dev");
    }

    #[tokio::test]
    async fn test_create_blog_returns_created() {
        let (repo, state) = seeded_state();

        let request = CreateBlogRequest {
            title: Some("testing in backend".to_string()),
            author: Some("someone".to_string()),
            url: Some("https://google.com".to_string()),
            likes: Some(4),
        };
        let (status, Json(blog)) = create_blog(State(state), Json(request)).await.unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(blog.likes, 4);
        assert_eq!(repo.len(), 4);
    }

    #[tokio::test]
    async fn test_create_blog_without_likes_defaults_to_zero() {
        let (_repo, state) = seeded_state();

        let request = CreateBlogRequest {
            title: Some("testing a blog without like property".to_string()),
            author: Some("someone".to_string()),
            url: Some("https://google.com".to_string()),
            likes: None,
        };
        let (_, Json(blog)) = create_blog(State(state), Json(request)).await.unwrap();

        assert_eq!(blog.likes, 0);
    }

    #[tokio::test]
    async fn test_create_blog_without_title_or_url_is_bad_request() {
        let (repo, state) = seeded_state();

        let missing_title = CreateBlogRequest {
            author: Some("someone".to_string()),
            url: Some("https://google.com".to_string()),
            ..Default::default()
        };
        let err = create_blog(State(state.clone()), Json(missing_title))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        let missing_url = CreateBlogRequest {
            title: Some("testing blog without url".to_string()),
            author: Some("someone".to_string()),
            ..Default::default()
        };
        let err = create_blog(State(state), Json(missing_url)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        assert_eq!(repo.len(), 3);
    }

    #[tokio::test]
    async fn test_blog_stats_matches_aggregations() {
        let (_repo, state) = seeded_state();

        let Json(response) = blog_stats(State(state)).await.unwrap();

        assert_eq!(response.count, 3);
        assert_eq!(response.total_likes, 380);
        assert_eq!(response.favorite_blog.unwrap().likes, 289);
        let most = response.most_blogs.unwrap();
        assert_eq!((most.author.as_str(), most.blogs), ("noname", 2));
        assert_eq!(response.most_likes.unwrap().likes, 313);
    }

    #[tokio::test]
    async fn test_blog_stats_on_empty_store() {
        let state = AppState::new(Arc::new(LocalRepository::new()));

        let Json(response) = blog_stats(State(state)).await.unwrap();

        assert_eq!(response.count, 0);
        assert_eq!(response.total_likes, 0);
        assert!(response.favorite_blog.is_none());
        assert!(response.most_blogs.is_none());
        assert!(response.most_likes.is_none());
    }

    #[tokio::test]
    async fn test_health_check_reports_database_state() {
        let (repo, state) = seeded_state();

        let Json(health) = health_check(State(state.clone())).await.unwrap();
        assert_eq!(health.database, "connected");

        repo.set_healthy(false);
        let Json(health) = health_check(State(state)).await.unwrap();
        assert_eq!(health.database, "disconnected");
    }
}
