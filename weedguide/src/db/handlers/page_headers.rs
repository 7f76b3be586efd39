//! Database repository for the page banner.

use crate::db::{
    errors::Result,
    models::page_headers::{PageHeader, PageHeaderCreateDBRequest},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct PageHeaders<'c> {
    db: &'c mut PgConnection,
}

impl<'c> PageHeaders<'c> {
    /// Create a new PageHeaders repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(title = %request.title), err)]
    pub async fn create(&mut self, request: &PageHeaderCreateDBRequest) -> Result<PageHeader> {
        let header = sqlx::query_as::<_, PageHeader>(
            r#"
            INSERT INTO page_headers (image_url, title, subtitle)
            VALUES ($1, $2, $3)
            RETURNING id, image_url, title, subtitle
            "#,
        )
        .bind(&request.image_url)
        .bind(&request.title)
        .bind(&request.subtitle)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(header)
    }

    /// Get the banner that drives the page.
    ///
    /// Only one row is expected. If several exist the oldest (lowest ID) wins, so the
    /// choice is stable across requests.
    #[instrument(skip(self), err)]
    pub async fn first(&mut self) -> Result<Option<PageHeader>> {
        let header = sqlx::query_as::<_, PageHeader>(
            r#"
            SELECT id, image_url, title, subtitle
            FROM page_headers
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(header)
    }
}
