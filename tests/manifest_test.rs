//! Manifest loading tests.

#![cfg(feature = "cli")]

use std::fs;

use tempfile::TempDir;

use ussgen::diagnostics::MemoryDiagnostics;
use ussgen::error::Error;
use ussgen::manifest::Manifest;
use ussgen::sheet::SheetConfig;

#[test]
fn test_manifest_from_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("menu.json");
    fs::write(
        &path,
        r##"{
            "name": "Menu",
            "selectors": [
                {
                    "selector": "#menu",
                    "rules": { "flex-direction": "row", "-unity-slice-top": 4 },
                    "states": { "focus": { "border-color": "#ffffff" } }
                }
            ]
        }"##,
    )
    .unwrap();

    let sheet = Manifest::from_path(&path)
        .unwrap()
        .into_sheet(SheetConfig::new().with_indent(2))
        .unwrap();

    assert_eq!(sheet.name(), "Menu");
    assert_eq!(
        sheet.to_text(),
        "#menu {\n  flex-direction: row;\n  -unity-slice-top: 4;\n}\n#menu:focus {\n  border-color: #ffffff;\n}"
    );
}

#[test]
fn test_manifest_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = Manifest::from_path(&tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_manifest_export_round_trip_to_disk() {
    let tmp = TempDir::new().unwrap();
    let sheet = Manifest::from_json(r#"{"name": "Hud", "selectors": [{"selector": ".hud", "rules": {"opacity": 0.75}}]}"#)
        .unwrap()
        .into_sheet(SheetConfig::default())
        .unwrap();

    assert!(sheet.export(tmp.path(), false));
    assert_eq!(
        fs::read_to_string(tmp.path().join("Hud.uss")).unwrap(),
        ".hud {\n    opacity: 0.75;\n}\n"
    );
}

#[test]
fn test_manifest_padding_auto_is_invalid() {
    let sink = MemoryDiagnostics::new();
    let sheet = Manifest::from_json(r#"{"name": "Row", "selectors": [{"selector": ".row", "rules": {"padding": "auto"}}]}"#)
        .unwrap()
        .into_sheet_with(SheetConfig::default(), &sink)
        .unwrap();

    let invalid = sheet.invalid_rules();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].to_text(), "padding: auto;");
    assert_eq!(sink.len(), 1);
    assert!(sink.messages()[0].contains("padding"));
}
