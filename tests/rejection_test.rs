mod common;

use std::fs;

use predicates::prelude::*;

use common::{ROOT_ENTRIES, appgen, app_names, luna_root};

#[test]
fn test_no_arguments_prints_usage() {
    let root = luna_root();

    appgen(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("usage: appgen <ProjectName>"));

    assert_eq!(app_names(root.path()), vec!["Triangle"]);
}

#[test]
fn test_two_arguments_print_usage() {
    let root = luna_root();

    appgen(root.path())
        .args(["Foo", "Bar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("usage:"));

    assert_eq!(app_names(root.path()), vec!["Triangle"]);
}

#[test]
fn test_second_invocation_conflicts() {
    let root = luna_root();
    appgen(root.path()).arg("Foo").assert().success();
    let before = fs::read_to_string(root.path().join("Apps/Foo/Foo.vcxproj")).unwrap();

    appgen(root.path())
        .arg("Foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'Foo' already exists"));

    let after = fs::read_to_string(root.path().join("Apps/Foo/Foo.vcxproj")).unwrap();
    assert_eq!(before, after);
    assert_eq!(app_names(root.path()), vec!["Foo", "Triangle"]);
}

#[test]
fn test_each_missing_root_entry_is_reported() {
    for missing in ROOT_ENTRIES.iter().filter(|e| **e != "Apps") {
        let root = luna_root();
        let path = root.path().join(missing);
        if path.is_dir() {
            fs::remove_dir_all(&path).unwrap();
        } else {
            fs::remove_file(&path).unwrap();
        }

        appgen(root.path())
            .arg("Foo")
            .assert()
            .success()
            .stdout(predicate::str::contains("Run this tool from the repository root"))
            .stdout(predicate::str::contains(*missing));

        assert_eq!(app_names(root.path()), vec!["Triangle"], "missing {missing}");
    }
}

#[test]
fn test_missing_apps_dir_is_reported_without_writes() {
    let root = luna_root();
    fs::remove_dir_all(root.path().join("Apps")).unwrap();

    appgen(root.path())
        .arg("Foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("missing: Apps"));

    assert!(!root.path().join("Apps").exists());
}

#[test]
fn test_path_like_names_are_rejected() {
    let root = luna_root();

    appgen(root.path())
        .arg("../Escape")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid character '/'"));

    assert!(!root.path().join("Escape").exists());
    assert_eq!(app_names(root.path()), vec!["Triangle"]);
}

#[test]
fn test_strict_mode_exits_non_zero_on_rejection() {
    let root = luna_root();

    appgen(root.path())
        .args(["--strict", "Triangle"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("already exists"));

    appgen(root.path()).arg("--strict").assert().code(2);
}

#[test]
fn test_strict_mode_succeeds_on_creation() {
    let root = luna_root();

    appgen(root.path()).args(["--strict", "Foo"]).assert().success();
}
