//! Database repository for weed gallery photos.

use crate::{
    db::{
        errors::Result,
        models::photos::{PhotoCreateDBRequest, WeedPhoto},
    },
    types::WeedId,
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct WeedPhotos<'c> {
    db: &'c mut PgConnection,
}

impl<'c> WeedPhotos<'c> {
    /// Create a new WeedPhotos repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    #[instrument(skip(self, request), fields(weed_id = request.weed_id), err)]
    pub async fn create(&mut self, request: &PhotoCreateDBRequest) -> Result<WeedPhoto> {
        let photo = sqlx::query_as::<_, WeedPhoto>(
            r#"
            INSERT INTO weed_photos (photo_url, caption, display_order, weed_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, photo_url, caption, display_order, weed_id
            "#,
        )
        .bind(&request.photo_url)
        .bind(&request.caption)
        .bind(request.display_order)
        .bind(request.weed_id)
        .fetch_one(&mut *self.db)
        .await?;

        Ok(photo)
    }

    /// List the photos of several weeds at once, grouped by weed and in gallery
    /// order within each weed.
    #[instrument(skip(self), fields(count = weed_ids.len()), err)]
    pub async fn list_for_weeds(&mut self, weed_ids: &[WeedId]) -> Result<Vec<WeedPhoto>> {
        if weed_ids.is_empty() {
            return Ok(Vec::new());
        }

        let photos = sqlx::query_as::<_, WeedPhoto>(
            r#"
            SELECT id, photo_url, caption, display_order, weed_id
            FROM weed_photos
            WHERE weed_id = ANY($1)
            ORDER BY weed_id ASC, display_order ASC, id ASC
            "#,
        )
        .bind(weed_ids)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{add_photo, create_test_weed};
    use sqlx::PgPool;

    #[sqlx::test]
    #[test_log::test]
    async fn test_photos_listed_in_gallery_order(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let weed = create_test_weed(&mut conn, "Hedera helix", 1).await;
        add_photo(&mut conn, weed.id, "https://example.org/c.jpg", 3).await;
        add_photo(&mut conn, weed.id, "https://example.org/a.jpg", 1).await;
        add_photo(&mut conn, weed.id, "https://example.org/b.jpg", 2).await;

        let photos = WeedPhotos::new(&mut conn).list_for_weeds(&[weed.id]).await.unwrap();
        let urls: Vec<&str> = photos.iter().map(|p| p.photo_url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://example.org/a.jpg", "https://example.org/b.jpg", "https://example.org/c.jpg"]
        );
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_create_photo(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        let weed = create_test_weed(&mut conn, "Rubus armeniacus", 1).await;

        let photo = WeedPhotos::new(&mut conn)
            .create(&PhotoCreateDBRequest {
                weed_id: weed.id,
                photo_url: "https://example.org/bramble.jpg".to_string(),
                caption: "Thicket by the fence".to_string(),
                display_order: 1,
            })
            .await
            .unwrap();

        assert_eq!(photo.weed_id, weed.id);
        assert_eq!(photo.caption, "Thicket by the fence");
    }
}
