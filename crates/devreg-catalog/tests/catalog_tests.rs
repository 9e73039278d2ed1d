//! Discovery tests against real temp catalogs.

use devreg_catalog::Catalog;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SONER_YAML: &str = r#"
USERNAME: soner
NAME: Safak Oner
POSITION: Lead Software Engineer
EMAIL: safak@safakoner.com
SITE: Headquarter
URL: https://www.safakoner.com
INFO:
  userName: soner
  name: Safak Oner
  position: Lead Software Engineer
  email: safak@safakoner.com
  url: https://www.safakoner.com
"#;

fn write_entry(dir: &Path, file_name: &str, content: &str) {
    fs::write(dir.join(file_name), content).unwrap();
}

fn soner_catalog() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_entry(dir.path(), "sonerLib.yaml", SONER_YAML);
    dir
}

// =============================================================================
// Enumeration
// =============================================================================

#[test]
fn test_list_identifiers_sorted() {
    let dir = soner_catalog();
    write_entry(dir.path(), "aliceLib.yaml", SONER_YAML);

    let catalog = Catalog::new(dir.path());
    assert_eq!(catalog.list_identifiers().unwrap(), vec!["aliceLib", "sonerLib"]);
}

#[test]
fn test_list_identifiers_excludes_index_and_test_entries() {
    let dir = soner_catalog();
    write_entry(dir.path(), "index.yaml", "# catalog index\n");
    write_entry(dir.path(), "catalogTest.yaml", SONER_YAML);

    let catalog = Catalog::new(dir.path());
    let identifiers = catalog.list_identifiers().unwrap();

    assert_eq!(identifiers, vec!["sonerLib"]);
}

#[test]
fn test_list_identifiers_skips_foreign_files_and_dirs() {
    let dir = soner_catalog();
    write_entry(dir.path(), "notes.txt", "not a source");
    fs::create_dir(dir.path().join("archiveLib.yaml")).unwrap();

    let catalog = Catalog::new(dir.path());
    assert_eq!(catalog.list_identifiers().unwrap(), vec!["sonerLib"]);
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let catalog = Catalog::new("/nonexistent/devreg-catalog");
    assert!(catalog.list_identifiers().is_err());
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn test_resolve_raw_username() {
    let dir = soner_catalog();
    let catalog = Catalog::new(dir.path());

    assert_eq!(catalog.resolve("soner").unwrap(), Some("sonerLib".to_string()));
}

#[test]
fn test_resolve_username_with_domain() {
    let dir = soner_catalog();
    let catalog = Catalog::new(dir.path());

    assert_eq!(
        catalog.resolve("soner@safakoner.com").unwrap(),
        catalog.resolve("soner").unwrap()
    );
}

#[test]
fn test_resolve_canonical_identifier() {
    let dir = soner_catalog();
    let catalog = Catalog::new(dir.path());

    assert_eq!(catalog.resolve("sonerLib").unwrap(), Some("sonerLib".to_string()));
}

#[test]
fn test_resolve_unknown_is_none() {
    let dir = soner_catalog();
    let catalog = Catalog::new(dir.path());

    assert_eq!(catalog.resolve("unknown").unwrap(), None);
}
