//! Repository implementations for database access.
//!
//! Each repository:
//! - Wraps a borrowed SQLx connection (or transaction)
//! - Provides strongly-typed operations for one table
//! - Returns records from [`crate::db::models`]
//!
//! # Available Repositories
//!
//! - [`PageHeaders`]: the page banner
//! - [`Weeds`]: weed species, listed in display order
//! - [`WeedCommonNames`]: primary and alias names
//! - [`WeedPhotos`]: gallery photos
//!
//! # Common Pattern
//!
//! ```ignore
//! use weedguide::db::handlers::{PageHeaders, Weeds};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut tx = pool.begin().await?;
//!     let header = PageHeaders::new(&mut tx).first().await?;
//!     let weeds = Weeds::new(&mut tx).list_ordered().await?;
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod common_names;
pub mod page_headers;
pub mod photos;
pub mod weeds;

pub use common_names::WeedCommonNames;
pub use page_headers::PageHeaders;
pub use photos::WeedPhotos;
pub use weeds::Weeds;
