//! Database layer for data persistence and access.
//!
//! Data access uses SQLx against PostgreSQL and follows the repository pattern used
//! throughout the crate: one repository per table, each borrowing a connection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (page and asset handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Catalog   │  (crate::catalog - assembles the page)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository implementations
//! - [`models`]: Database record structures matching table schemas
//! - [`errors`]: Database-specific error types
//!
//! # Relationships
//!
//! Common names and photos reference their weed by foreign key only. Children are
//! loaded with explicit queries keyed on a set of weed IDs and grouped in memory;
//! no record holds a reference back to its parent. Deleting a weed cascades to its
//! children at the schema level.
//!
//! ## Example Usage
//!
//! ```ignore
//! use weedguide::db::handlers::Weeds;
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let weeds = Weeds::new(&mut conn).list_ordered().await?;
//!     for weed in weeds {
//!         println!("{} (order {})", weed.scientific_name, weed.display_order);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Migrations
//!
//! The schema lives in the `migrations/` directory and is embedded by
//! [`crate::migrator`]:
//!
//! ```ignore
//! weedguide::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
