//! Axum route handlers.
//!
//! - [`page`]: `GET /`, the rendered weed list
//! - [`static_assets`]: `GET /static/{*path}`, embedded CSS and images
//!
//! Handlers return [`crate::errors::Result`], which turns failures into a status code and a
//! plain-text message that never carries database or template details.

pub mod page;
pub mod static_assets;
