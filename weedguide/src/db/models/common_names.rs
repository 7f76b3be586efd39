//! Database models for weed common names.

use crate::types::{CommonNameId, WeedId};
use serde::{Deserialize, Serialize};

/// Database representation of a common name.
///
/// A weed is expected to have at most one primary name, but the schema does not
/// enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WeedCommonName {
    pub id: CommonNameId,
    pub common_name: String,
    pub is_primary: bool,
    pub weed_id: WeedId,
}

/// Request to attach a common name to a weed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonNameCreateDBRequest {
    pub weed_id: WeedId,
    pub common_name: String,
    pub is_primary: bool,
}
