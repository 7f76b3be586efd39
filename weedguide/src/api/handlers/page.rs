//! HTTP handler for the weed list page.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::{AppState, catalog, db::errors::DbError, errors::Result, templates};

/// Render the banner and every weed in display order
#[instrument(skip_all, err)]
pub async fn show_page(State(state): State<AppState>) -> Result<Html<String>> {
    let mut conn = state.db.acquire().await.map_err(DbError::from)?;
    let page = catalog::load_page(&mut conn).await?;
    // Release the connection before rendering
    drop(conn);

    let html = templates::render_index(&state.templates, &page, &state.config.site)?;
    Ok(Html(html))
}
