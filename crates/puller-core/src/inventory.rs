//! Inventory output parsing and lookup.
//!
//! The inventory command prints a JSON array that may contain `//` and
//! `/* */` comments and trailing commas. It is read with `json5`, which
//! accepts both.

use std::path::Path;

use crate::domain::AppRecord;
use crate::error::PullerError;

/// Parse inventory output into records, preserving order.
pub fn parse_inventory(output: &str) -> Result<Vec<AppRecord>, PullerError> {
    json5::from_str(output).map_err(|e| PullerError::InventoryParse(e.to_string()))
}

/// Return the directory of the first record named `name`.
///
/// Duplicate names are not rejected; the earliest entry wins.
pub fn find_app<'a>(apps: &'a [AppRecord], name: &str) -> Option<&'a Path> {
    apps.iter()
        .find(|app| app.name == name)
        .map(|app| app.dir.as_path())
}
