//! The list, search, and show commands.

use crate::display;
use anyhow::{Context, Result};
use devreg_catalog::Registry;
use devreg_core::DeveloperRecord;

/// List every developer in the catalog.
pub fn list(registry: &Registry, detail: bool) -> Result<()> {
    let records = registry.list_all()?;
    if records.is_empty() {
        display::info("No developers found.");
        return Ok(());
    }

    print_records(records.iter(), detail);

    display::info(format!("{} developer(s) listed.", records.len()));
    display::blank_line();

    Ok(())
}

/// Search developers by a case-insensitive keyword against user name and
/// name.
pub fn search(registry: &Registry, keyword: &str, detail: bool) -> Result<()> {
    let records = registry.list_all()?;
    if records.is_empty() {
        display::info("No developers found.");
        return Ok(());
    }

    let matches: Vec<&DeveloperRecord> =
        records.iter().filter(|r| r.matches(keyword)).collect();

    print_records(matches.iter().copied(), detail);

    if matches.is_empty() {
        display::info("No developers found.");
    } else {
        display::info(format!("{} developer(s) found.", matches.len()));
    }
    display::blank_line();

    Ok(())
}

/// Show the detail block for one developer. The invoking user's identity is
/// resolved here, at the command boundary, never in the registry.
pub fn show(registry: &Registry, username: Option<String>) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => current_user().context("cannot determine the invoking user; pass a username")?,
    };

    let record = registry.get(&username)?;
    display::detail(&record);
    display::blank_line();

    Ok(())
}

fn print_records<'a>(records: impl Iterator<Item = &'a DeveloperRecord>, detail: bool) {
    if !detail {
        display::blank_line();
    }
    for record in records {
        if detail {
            display::detail(record);
        } else {
            display::info(record.user_name());
        }
    }
    display::blank_line();
}

fn current_user() -> Option<String> {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
}
