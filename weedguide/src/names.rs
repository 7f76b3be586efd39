//! Formatting of a weed's common names.
//!
//! A weed has one primary common name, used as its heading, and any number of
//! aliases. The page lists the aliases as a single comma-separated line; that
//! line is produced here and exposed to templates as the `comma_separated`
//! filter.

use crate::db::models::common_names::WeedCommonName;

/// Separator placed between alias names
pub const NAME_SEPARATOR: &str = ", ";

/// Join every non-primary name with `", "`, in iteration order.
///
/// Primary names are skipped entirely, whichever position they hold. Returns an
/// empty string when there are no names or all of them are primary.
pub fn comma_separated<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a WeedCommonName>,
{
    names
        .into_iter()
        .filter(|name| !name.is_primary)
        .map(|name| name.common_name.as_str())
        .collect::<Vec<_>>()
        .join(NAME_SEPARATOR)
}

/// The first name flagged as primary, if any.
///
/// Nothing stops a weed from having several primary names; the earliest one wins.
pub fn primary_name<'a, I>(names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a WeedCommonName>,
{
    names
        .into_iter()
        .find(|name| name.is_primary)
        .map(|name| name.common_name.as_str())
}
