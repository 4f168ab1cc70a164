#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;

pub const ROOT_ENTRIES: &[&str] = &["README.md", "Apps", "Engine", "External", "Programs"];

pub const TEMPLATE_FILES: &[&str] = &[
    "Stdafx.h",
    "Stdafx.cpp",
    "TEMPLATEApp.h",
    "TEMPLATEApp.cpp",
    "Main.cpp",
    "TEMPLATE.vcxproj",
    "TEMPLATE.vcxproj.filters",
    "packages.config",
];

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/templates")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

/// A repository root with the expected layout, the fixture templates, and
/// one pre-existing application.
pub fn luna_root() -> TempDir {
    let root = TempDir::new().unwrap();
    root.child("README.md").write_str("# Luna\n").unwrap();
    root.child("Apps/Triangle/Main.cpp").write_str("// existing\n").unwrap();
    root.child("Engine").create_dir_all().unwrap();
    root.child("External").create_dir_all().unwrap();
    copy_dir(
        &fixtures_dir(),
        &root.path().join("Programs/AppGen/Templates"),
    );
    root
}

pub fn appgen(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("appgen").unwrap();
    cmd.current_dir(root).env_remove("APPGEN_ROOT").env_remove("RUST_LOG");
    cmd
}

pub fn app_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root.join("Apps"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn is_canonical_guid(s: &str) -> bool {
    let groups: Vec<&str> = s.split('-').collect();
    groups.iter().map(|g| g.len()).collect::<Vec<_>>() == [8, 4, 4, 4, 12]
        && groups
            .iter()
            .all(|g| g.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)))
}
