//! Assembly of the page content from the four tables.
//!
//! [`load_page`] runs one query per table: the banner, the ordered weeds, and the
//! common names and photos of all listed weeds keyed on their IDs. Children are then
//! grouped under their weed in memory, keeping the order each query returned.

use crate::{
    db::{
        errors::Result,
        handlers::{PageHeaders, WeedCommonNames, WeedPhotos, Weeds},
        models::{common_names::WeedCommonName, page_headers::PageHeader, photos::WeedPhoto, weeds::Weed},
    },
    names,
    types::WeedId,
};
use serde::Serialize;
use sqlx::PgConnection;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Everything the page shows
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    pub header: Option<PageHeader>,
    pub weeds: Vec<WeedEntry>,
}

/// A weed together with its names and gallery
#[derive(Debug, Clone, Serialize)]
pub struct WeedEntry {
    pub weed: Weed,
    /// First primary common name, used as the heading
    pub primary_name: Option<String>,
    pub common_names: Vec<WeedCommonName>,
    pub photos: Vec<WeedPhoto>,
}

impl WeedEntry {
    pub fn new(weed: Weed, common_names: Vec<WeedCommonName>, photos: Vec<WeedPhoto>) -> Self {
        let primary_name = names::primary_name(&common_names).map(str::to_owned);
        Self {
            weed,
            primary_name,
            common_names,
            photos,
        }
    }
}

/// Attach each name and photo to its weed, preserving the order of all three inputs.
///
/// Children whose weed is not in `weeds` are dropped.
pub fn group_children(weeds: Vec<Weed>, names: Vec<WeedCommonName>, photos: Vec<WeedPhoto>) -> Vec<WeedEntry> {
    let mut names_by_weed: HashMap<WeedId, Vec<WeedCommonName>> = HashMap::new();
    for name in names {
        names_by_weed.entry(name.weed_id).or_default().push(name);
    }

    let mut photos_by_weed: HashMap<WeedId, Vec<WeedPhoto>> = HashMap::new();
    for photo in photos {
        photos_by_weed.entry(photo.weed_id).or_default().push(photo);
    }

    weeds
        .into_iter()
        .map(|weed| {
            let names = names_by_weed.remove(&weed.id).unwrap_or_default();
            let photos = photos_by_weed.remove(&weed.id).unwrap_or_default();
            WeedEntry::new(weed, names, photos)
        })
        .collect()
}

/// Load the banner and all weeds, in display order, with their names and photos.
///
/// A missing banner or an empty weed table is not an error; the page simply has less
/// to show.
#[instrument(skip_all, err)]
pub async fn load_page(conn: &mut PgConnection) -> Result<Page> {
    let header = PageHeaders::new(conn).first().await?;
    let weeds = Weeds::new(conn).list_ordered().await?;

    let weed_ids: Vec<WeedId> = weeds.iter().map(|w| w.id).collect();
    let names = WeedCommonNames::new(conn).list_for_weeds(&weed_ids).await?;
    let photos = WeedPhotos::new(conn).list_for_weeds(&weed_ids).await?;

    debug!(
        weeds = weeds.len(),
        names = names.len(),
        photos = photos.len(),
        has_header = header.is_some(),
        "Loaded page content"
    );

    Ok(Page {
        header,
        weeds: group_children(weeds, names, photos),
    })
}
