//! Database record models matching table schemas.
//!
//! Each struct derives `sqlx::FromRow` for query results and `Serialize` so it
//! can be handed straight to the page template. Create requests carry the
//! columns a caller supplies; IDs are always assigned by the database.
//!
//! - [`page_headers`]: the banner shown at the top of the page
//! - [`weeds`]: one row per species
//! - [`common_names`]: primary and alias names for a weed
//! - [`photos`]: gallery photos for a weed

pub mod common_names;
pub mod page_headers;
pub mod photos;
pub mod weeds;
