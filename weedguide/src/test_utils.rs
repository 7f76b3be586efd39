//! Shared fixtures for unit and database tests.

use crate::{
    config::{Config, DatabaseConfig, PoolSettings},
    db::{
        handlers::{PageHeaders, WeedCommonNames, WeedPhotos, Weeds},
        models::{
            common_names::{CommonNameCreateDBRequest, WeedCommonName},
            page_headers::{PageHeader, PageHeaderCreateDBRequest},
            photos::{PhotoCreateDBRequest, WeedPhoto},
            weeds::{Weed, WeedCreateDBRequest},
        },
    },
    types::WeedId,
};
use axum_test::TestServer;
use sqlx::{PgConnection, PgPool};

pub async fn create_test_app(pool: PgPool) -> TestServer {
    let app = crate::Application::new_with_pool(create_test_config(), pool)
        .await
        .expect("Failed to create application");

    app.into_test_server()
}

pub fn create_test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            // Unused: tests hand the application a pool directly
            url: "postgresql://localhost/weedguide-test".to_string(),
            pool: PoolSettings {
                max_connections: 2,
                ..Default::default()
            },
        },
        // sqlx::test has already applied the migrations
        run_migrations: false,
        ..Default::default()
    }
}

/// A weed that never touched the database, for rendering and grouping tests
pub fn sample_weed(id: WeedId, scientific_name: &str, display_order: i32) -> Weed {
    Weed {
        id,
        scientific_name: scientific_name.to_string(),
        description: format!("About {scientific_name}"),
        removal_method: format!("Removing {scientific_name}"),
        comments: String::new(),
        location_desc: "Along the trail".to_string(),
        location_map: String::new(),
        display_order,
    }
}

pub async fn create_test_header(conn: &mut PgConnection, title: &str) -> PageHeader {
    PageHeaders::new(conn)
        .create(&PageHeaderCreateDBRequest {
            image_url: "https://example.org/banner.jpg".to_string(),
            title: title.to_string(),
            subtitle: format!("{title} subtitle"),
        })
        .await
        .expect("Failed to create test header")
}

pub async fn create_test_weed(conn: &mut PgConnection, scientific_name: &str, display_order: i32) -> Weed {
    Weeds::new(conn)
        .create(&WeedCreateDBRequest {
            scientific_name: scientific_name.to_string(),
            description: format!("About {scientific_name}"),
            removal_method: format!("Removing {scientific_name}"),
            comments: String::new(),
            location_desc: "Along the trail".to_string(),
            location_map: "https://example.org/map.png".to_string(),
            display_order,
        })
        .await
        .expect("Failed to create test weed")
}

pub async fn add_common_name(conn: &mut PgConnection, weed_id: WeedId, name: &str, is_primary: bool) -> WeedCommonName {
    WeedCommonNames::new(conn)
        .create(&CommonNameCreateDBRequest {
            weed_id,
            common_name: name.to_string(),
            is_primary,
        })
        .await
        .expect("Failed to create test common name")
}

pub async fn add_photo(conn: &mut PgConnection, weed_id: WeedId, url: &str, display_order: i32) -> WeedPhoto {
    WeedPhotos::new(conn)
        .create(&PhotoCreateDBRequest {
            weed_id,
            photo_url: url.to_string(),
            caption: format!("Photo {display_order}"),
            display_order,
        })
        .await
        .expect("Failed to create test photo")
}
