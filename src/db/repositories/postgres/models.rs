use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::blogs;
use crate::api::{Blog, BlogId};
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = blogs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)] // created_at is database bookkeeping, not exposed through the API
pub struct BlogRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = blogs)]
pub struct NewBlogRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
}

impl BlogRow {
    /// Convert a database row into the domain type.
    ///
    /// The table carries a CHECK constraint keeping `likes` non-negative,
    /// so a failing conversion means the row was written outside this
    /// application.
    pub fn into_blog(self) -> RepositoryResult<Blog> {
        let likes = u64::try_from(self.likes).map_err(|_| {
            RepositoryError::internal_with_context(
                format!("negative likes value {} in storage", self.likes),
                ErrorContext::new("into_blog").with_entity_id(&self.id),
            )
        })?;

        Ok(Blog {
            id: BlogId::new(self.id),
            title: self.title,
            author: self.author,
            url: self.url,
            likes,
        })
    }
}
