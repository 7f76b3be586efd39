//! Server-side page rendering with minijinja.
//!
//! Templates are compiled into the binary and loaded into a single
//! [`Environment`] at startup. HTML auto-escaping follows the template's `.html`
//! extension, so database text is always escaped.

use crate::{catalog::Page, config::SiteConfig, db::models::common_names::WeedCommonName, names};
use chrono::{Datelike, Utc};
use minijinja::{Environment, context, value::ViaDeserialize};

pub const INDEX_TEMPLATE: &str = "index.html";

/// Build the template environment with every page template and filter registered
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE, include_str!("../templates/index.html"))?;
    env.add_filter("comma_separated", comma_separated_filter);
    Ok(env)
}

fn comma_separated_filter(names: ViaDeserialize<Vec<WeedCommonName>>) -> String {
    names::comma_separated(&names.0)
}

/// Render the weed list page. The footer year is taken from the current UTC date.
pub fn render_index(env: &Environment<'_>, page: &Page, site: &SiteConfig) -> Result<String, minijinja::Error> {
    render_index_for_year(env, page, site, Utc::now().year())
}

fn render_index_for_year(env: &Environment<'_>, page: &Page, site: &SiteConfig, current_year: i32) -> Result<String, minijinja::Error> {
    let template = env.get_template(INDEX_TEMPLATE)?;
    template.render(context! {
        site => site,
        header => page.header,
        weeds => page.weeds,
        current_year => current_year,
    })
}
