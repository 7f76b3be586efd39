//! Database repository for weed common names.

use crate::{
    db::{
        errors::Result,
        models::common_names::{CommonNameCreateDBRequest, WeedCommonName},
    },
    types::WeedId,
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct WeedCommonNames<'c> {
    db: &'c mut PgConnection,
}

impl<'c> WeedCommonNames<'c> {
    /// Create a new WeedCommonNames repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(weed_id = request.weed_id, is_primary = request.is_primary), err)]
    pub async fn create(&mut self, request: &CommonNameCreateDBRequest) -> Result<WeedCommonName> {
        let name = sqlx::query_as::<_, WeedCommonName>(
            r#"
            INSERT INTO weed_common_names (common_name, is_primary, weed_id)
            VALUES ($1, $2, $3)
            RETURNING id, common_name, is_primary, weed_id
            "#,
        )
        .bind(&request.common_name)
        .bind(request.is_primary)
        .bind(request.weed_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(name)
    }

    /// List the common names of several weeds at once, grouped by weed and in
    /// insertion order within each weed.
    #[instrument(skip(self), fields(count = weed_ids.len()), err)]
    pub async fn list_for_weeds(&mut self, weed_ids: &[WeedId]) -> Result<Vec<WeedCommonName>> {
        if weed_ids.is_empty() {
            return Ok(Vec::new());
        }

        let names = sqlx::query_as::<_, WeedCommonName>(
            r#"
            SELECT id, common_name, is_primary, weed_id
            FROM weed_common_names
            WHERE weed_id = ANY($1)
            ORDER BY weed_id ASC, id ASC
            "#,
        )
        .bind(weed_ids)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(names)
    }
}
