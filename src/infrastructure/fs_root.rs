use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::application::port::RootInspector;
use crate::domain::error::AppGenError;

pub struct FsRootInspector {
    root: PathBuf,
    apps_dir: PathBuf,
}

impl FsRootInspector {
    pub fn new(root: PathBuf, apps_dir: PathBuf) -> Self {
        Self { root, apps_dir }
    }
}

fn list_names(dir: &Path) -> Result<BTreeSet<String>, AppGenError> {
    let to_err = |source: std::io::Error| AppGenError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(to_err)? {
        let entry = entry.map_err(to_err)?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

impl RootInspector for FsRootInspector {
    fn root_entries(&self) -> Result<BTreeSet<String>, AppGenError> {
        list_names(&self.root)
    }

    fn existing_apps(&self) -> Result<BTreeSet<String>, AppGenError> {
        list_names(&self.apps_dir)
    }
}
