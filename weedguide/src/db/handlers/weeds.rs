//! Database repository for weed species.

use crate::{
    db::{
        errors::Result,
        models::weeds::{Weed, WeedCreateDBRequest},
    },
    types::WeedId,
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Weeds<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Weeds<'c> {
    /// Create a new Weeds repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(scientific_name = %request.scientific_name), err)]
    pub async fn create(&mut self, request: &WeedCreateDBRequest) -> Result<Weed> {
        let weed = sqlx::query_as::<_, Weed>(
            r#"
            INSERT INTO weeds (
                scientific_name, description, removal_method, comments,
                location_desc, location_map, display_order
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, scientific_name, description, removal_method, comments,
                      location_desc, location_map, display_order
            "#,
        )
        .bind(&request.scientific_name)
        .bind(&request.description)
        .bind(&request.removal_method)
        .bind(&request.comments)
        .bind(&request.location_desc)
        .bind(&request.location_map)
        .bind(request.display_order)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(weed)
    }

    #[instrument(skip(self), err)]
    pub async fn get_by_id(&mut self, id: WeedId) -> Result<Option<Weed>> {
        let weed = sqlx::query_as::<_, Weed>(
            r#"
            SELECT id, scientific_name, description, removal_method, comments,
                   location_desc, location_map, display_order
            FROM weeds
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(weed)
    }

    /// List every weed in presentation order.
    ///
    /// Ordered by `display_order` ascending; rows sharing a `display_order` fall back to
    /// insertion order (`id`) so the page does not reshuffle between requests.
    #[instrument(skip(self), err)]
    pub async fn list_ordered(&mut self) -> Result<Vec<Weed>> {
        let weeds = sqlx::query_as::<_, Weed>(
            r#"
            SELECT id, scientific_name, description, removal_method, comments,
                   location_desc, location_map, display_order
            FROM weeds
            ORDER BY display_order ASC, id ASC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(weeds)
    }

    /// Delete a weed. Its common names and photos are removed with it.
    #[instrument(skip(self), err)]
    pub async fn delete(&mut self, id: WeedId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM weeds WHERE id = $1")
            .bind(id)
            .execute(&mut *self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
