use std::fs;
use std::io;
use std::path::PathBuf;

use crate::application::port::ProjectWriter;
use crate::domain::error::AppGenError;
use crate::domain::model::{ProjectPlan, is_contained_relative};

/// 計画を作成先と同じ階層の隠しステージングディレクトリに書き込み、
/// 全ファイルの書き込み後にリネームで配置する。
///
/// 書き込みに失敗した場合は `TempDir` の破棄時にステージングディレクトリが削除されるため、
/// `Apps/<name>` は完全な状態で現れるか、まったく現れないかのどちらかになる。
pub struct StagedProjectWriter {
    apps_dir: PathBuf,
}

impl StagedProjectWriter {
    pub fn new(apps_dir: PathBuf) -> Self {
        Self { apps_dir }
    }
}

impl ProjectWriter for StagedProjectWriter {
    fn write(&self, plan: &ProjectPlan) -> Result<PathBuf, AppGenError> {
        let target = self.apps_dir.join(plan.name.as_str());

        if let Some(file) = plan
            .files
            .iter()
            .find(|f| !is_contained_relative(&f.relative_path))
        {
            return Err(AppGenError::UnsafePath {
                path: file.relative_path.clone(),
            });
        }

        let staging = tempfile::Builder::new()
            .prefix(&format!(".{}-", plan.name))
            .tempdir_in(&self.apps_dir)
            .map_err(|source| AppGenError::Write {
                path: self.apps_dir.clone(),
                source,
            })?;
        tracing::debug!(staging = %staging.path().display(), "staging project");

        for file in &plan.files {
            let staged = staging.path().join(&file.relative_path);
            let to_err = |source: io::Error| AppGenError::Write {
                path: target.join(&file.relative_path),
                source,
            };
            if let Some(parent) = staged.parent() {
                fs::create_dir_all(parent).map_err(to_err)?;
            }
            fs::write(&staged, file.contents.as_bytes()).map_err(to_err)?;
        }

        // rename(2) は空ディレクトリを黙って置き換えるため、既存の作成先は明示的に拒否する。
        if fs::symlink_metadata(&target).is_ok() {
            return Err(AppGenError::Commit {
                path: target,
                source: io::Error::new(io::ErrorKind::AlreadyExists, "target already exists"),
            });
        }
        fs::rename(staging.path(), &target).map_err(|source| AppGenError::Commit {
            path: target.clone(),
            source,
        })?;

        Ok(target)
    }
}
