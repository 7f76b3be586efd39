//! Common type definitions.
//!
//! All entity IDs are `SERIAL` integer keys wrapped in type aliases so that
//! signatures say which table an identifier belongs to:
//!
//! - [`PageHeaderId`]: page banner row
//! - [`WeedId`]: weed species row
//! - [`CommonNameId`]: common name row
//! - [`PhotoId`]: gallery photo row

// Type aliases for IDs
pub type PageHeaderId = i32;
pub type WeedId = i32;
pub type CommonNameId = i32;
pub type PhotoId = i32;
