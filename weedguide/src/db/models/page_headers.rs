//! Database models for the page banner.

use crate::types::PageHeaderId;
use serde::{Deserialize, Serialize};

/// Database representation of the page banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PageHeader {
    pub id: PageHeaderId,
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
}

/// Request to create a page banner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageHeaderCreateDBRequest {
    pub image_url: String,
    pub title: String,
    pub subtitle: String,
}
