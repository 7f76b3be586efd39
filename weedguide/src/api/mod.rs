//! HTTP layer.
//!
//! The site is a single server-rendered page plus the assets it links to; all route handlers
//! live in [`handlers`].

pub mod handlers;
