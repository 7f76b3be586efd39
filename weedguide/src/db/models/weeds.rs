//! Database models for weed species.

use crate::types::WeedId;
use serde::{Deserialize, Serialize};

/// Database representation of a weed species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Weed {
    pub id: WeedId,
    pub scientific_name: String,
    pub description: String,
    pub removal_method: String,
    pub comments: String,
    pub location_desc: String,
    /// URL of a map image showing where the weed is found
    pub location_map: String,
    /// Position on the page; lower values are shown first
    pub display_order: i32,
}

/// Request to create a weed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeedCreateDBRequest {
    pub scientific_name: String,
    pub description: String,
    pub removal_method: String,
    pub comments: String,
    pub location_desc: String,
    pub location_map: String,
    pub display_order: i32,
}
