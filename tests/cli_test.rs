//! Tests for the CLI commands, run against in-memory output
//!
//! Color is switched off so verdicts compare as plain text.

use std::fs;

use tempfile::TempDir;

use mobile::cli::commands::{
    color_override, resolve_settings, write_compare, write_mirror, write_show,
};
use mobile::cli::{CliError, Commands};
use mobile::config::Settings;
use mobile::util::testing;

fn plain() {
    testing::init_test_setup();
    colored::control::set_override(false);
}

fn malformed_config() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mobile.toml");
    fs::write(&path, "tree = [").unwrap();
    (dir, path)
}

// ============================================================
// Settings Resolution Tests
// ============================================================

#[test]
fn given_malformed_config_when_resolving_for_demo_then_falls_back_to_defaults() {
    let (_dir, path) = malformed_config();

    let bare = resolve_settings(None, Some(path.as_path())).unwrap();
    let demo = resolve_settings(Some(&Commands::Demo), Some(path.as_path())).unwrap();

    assert_eq!(bare, Settings::default());
    assert_eq!(demo, Settings::default());
}

#[test]
fn given_malformed_config_when_resolving_for_show_then_config_error() {
    let (_dir, path) = malformed_config();
    let show = Commands::Show {
        mobile: "(1)".into(),
        tree: false,
    };

    let err = resolve_settings(Some(&show), Some(path.as_path())).unwrap_err();

    assert_eq!(err.exit_code(), mobile::exitcode::CONFIG);
    assert!(matches!(err, CliError::Application(_)));
}

#[test]
fn given_malformed_config_when_running_demo_then_writes_report() {
    plain();
    let (_dir, path) = malformed_config();
    let settings = resolve_settings(None, Some(path.as_path())).unwrap();
    assert_eq!(color_override(&settings), None);

    let mut out = Vec::new();
    mobile::application::run_demo(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Total mass: 6.0\n"));
    assert_eq!(text.lines().count(), 10);
}

#[test]
fn given_color_setting_when_resolving_override_then_only_disables() {
    let on = Settings::default();
    let off = Settings {
        color: false,
        ..Settings::default()
    };
    assert_eq!(color_override(&on), None);
    assert_eq!(color_override(&off), Some(false));
}

// ============================================================
// Show Tests
// ============================================================

#[test]
fn given_unbalanced_mobile_when_show_then_prints_summary() {
    plain();
    let mut out = Vec::new();

    write_show(&mut out, "[(3),4,(2),5]", false, &Settings::default()).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Total mass: 5.0\nHeight:     2\n2.0 3.0 \n[(3),4,(2),5]\nNot balanced!\n"
    );
}

#[test]
fn given_tree_flag_when_show_then_appends_tree_view() {
    plain();
    let mut out = Vec::new();

    write_show(&mut out, "[(3),4,(2),6]", true, &Settings::default()).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Balanced!\nTree:\ncomposite (weight 5, balanced)\n"));
    assert!(text.contains("left @ 6: weight 2"));
}

#[test]
fn given_tree_setting_when_show_without_flag_then_appends_tree_view() {
    plain();
    let settings = Settings {
        tree: true,
        ..Settings::default()
    };
    let mut out = Vec::new();

    write_show(&mut out, "(4)", false, &settings).unwrap();

    assert!(String::from_utf8(out).unwrap().ends_with("Tree:\nweight 4\n"));
}

#[test]
fn given_malformed_notation_when_show_then_data_error() {
    let mut out = Vec::new();
    let err = write_show(&mut out, "[(1),2", false, &Settings::default()).unwrap_err();
    assert_eq!(err.exit_code(), mobile::exitcode::DATAERR);
    assert!(out.is_empty());
}

// ============================================================
// Mirror and Compare Tests
// ============================================================

#[test]
fn given_sample_mobile_when_mirror_then_prints_reflection() {
    let mut out = Vec::new();

    write_mirror(&mut out, "[[(3),4,(2),6],2,(1),10]").unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "[(1),10,[(2),6,(3),4],2]\n");
}

#[test]
fn given_equal_mobiles_when_compare_then_equal_with_hashes() {
    plain();
    let mut out = Vec::new();

    write_compare(&mut out, "[[(3),4,(2),6],2,(1),10]", "[[(3),4,(2),6],2,(1),10]").unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Equal!\nhash: 676 676\n");
}

#[test]
fn given_different_variants_when_compare_then_not_equal() {
    plain();
    let mut out = Vec::new();

    write_compare(&mut out, "(2)", "[(1),1,(1),1]").unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Not equal!\nhash: 34 78\n");
}
