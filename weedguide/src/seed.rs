//! First-run population of the database from a catalog file.
//!
//! A catalog is a YAML document holding the page banner and the weeds to list:
//!
//! ```yaml
//! header:
//!   image_url: https://images.example.org/banner.jpg
//!   title: Invasive Weeds
//!   subtitle: Know them, find them, remove them
//! weeds:
//!   - scientific_name: Hedera helix
//!     description: Evergreen climbing vine.
//!     removal_method: Cut and pull.
//!     location_desc: Creek trail.
//!     location_map: https://maps.example.org/ivy.png
//!     common_names:
//!       - name: English ivy
//!         primary: true
//!       - name: Common ivy
//!     photos:
//!       - url: https://images.example.org/ivy.jpg
//!         caption: Ivy on an oak
//! ```
//!
//! Seeding only happens while both `page_headers` and `weeds` are empty, so edits made
//! directly in the database are never overwritten on restart.

use crate::db::{
    errors::Result,
    handlers::{PageHeaders, WeedCommonNames, WeedPhotos, Weeds},
    models::{
        common_names::CommonNameCreateDBRequest, page_headers::PageHeaderCreateDBRequest, photos::PhotoCreateDBRequest,
        weeds::WeedCreateDBRequest,
    },
};
use anyhow::Context;
use figment::{
    Figment,
    providers::{Format, Yaml},
};
use serde::Deserialize;
use sqlx::PgPool;
use std::path::Path;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub header: Option<PageHeaderCreateDBRequest>,
    #[serde(default)]
    pub weeds: Vec<WeedSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeedSeed {
    pub scientific_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub removal_method: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub location_desc: String,
    #[serde(default)]
    pub location_map: String,
    /// Defaults to the weed's 1-based position in the file
    pub display_order: Option<i32>,
    #[serde(default)]
    pub common_names: Vec<NameSeed>,
    #[serde(default)]
    pub photos: Vec<PhotoSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameSeed {
    pub name: String,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhotoSeed {
    pub url: String,
    #[serde(default)]
    pub caption: String,
    /// Defaults to the photo's 1-based position within its weed
    pub display_order: Option<i32>,
}

impl Catalog {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(path.is_file(), "Catalog file {} does not exist", path.display());

        Figment::from(Yaml::file(path))
            .extract()
            .with_context(|| format!("Failed to parse catalog file {}", path.display()))
    }
}

fn position_order(index: usize) -> i32 {
    i32::try_from(index + 1).unwrap_or(i32::MAX)
}

/// Insert the catalog in one transaction, unless the site already has content.
///
/// Returns whether anything was written.
#[instrument(skip_all, err)]
pub async fn seed_database(catalog: &Catalog, db: &PgPool) -> Result<bool> {
    let mut tx = db.begin().await?;

    let has_content = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM page_headers) OR EXISTS (SELECT 1 FROM weeds)")
        .fetch_one(&mut *tx)
        .await?;

    if has_content {
        info!("Database already has content, skipping seeding");
        tx.commit().await?;
        return Ok(false);
    }

    info!(weeds = catalog.weeds.len(), "Seeding database from catalog");

    if let Some(header) = &catalog.header {
        PageHeaders::new(&mut tx).create(header).await?;
    }

    for (index, seed) in catalog.weeds.iter().enumerate() {
        let weed = Weeds::new(&mut tx)
            .create(&WeedCreateDBRequest {
                scientific_name: seed.scientific_name.clone(),
                description: seed.description.clone(),
                removal_method: seed.removal_method.clone(),
                comments: seed.comments.clone(),
                location_desc: seed.location_desc.clone(),
                location_map: seed.location_map.clone(),
                display_order: seed.display_order.unwrap_or_else(|| position_order(index)),
            })
            .await?;

        for name in &seed.common_names {
            WeedCommonNames::new(&mut tx)
                .create(&CommonNameCreateDBRequest {
                    weed_id: weed.id,
                    common_name: name.name.clone(),
                    is_primary: name.primary,
                })
                .await?;
        }

        for (photo_index, photo) in seed.photos.iter().enumerate() {
            WeedPhotos::new(&mut tx)
                .create(&PhotoCreateDBRequest {
                    weed_id: weed.id,
                    photo_url: photo.url.clone(),
                    caption: photo.caption.clone(),
                    display_order: photo.display_order.unwrap_or_else(|| position_order(photo_index)),
                })
                .await?;
        }

        debug!(weed_id = weed.id, scientific_name = %weed.scientific_name, "Seeded weed");
    }

    tx.commit().await?;
    Ok(true)
}
