//! Database models for weed gallery photos.

use crate::types::{PhotoId, WeedId};
use serde::{Deserialize, Serialize};

/// Database representation of a gallery photo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeedPhoto {
    pub id: PhotoId,
    pub photo_url: String,
    pub caption: String,
    /// Position within the weed's gallery
    pub display_order: i32,
    pub weed_id: WeedId,
}

/// Request to attach a photo to a weed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoCreateDBRequest {
    pub weed_id: WeedId,
    pub photo_url: String,
    pub caption: String,
    pub display_order: i32,
}
