use std::path::Path;

use crate::domain::error::AppGenError;
use crate::domain::model::{FileContents, ProjectPlan};

use super::port::TemplateSource;

/// バイナリアセットを変更せずに `target_dir` 配下として計画に追加する。
pub struct AssetCopier<'a, S: TemplateSource> {
    source: &'a S,
    files: &'a [String],
    target_dir: &'a Path,
}

impl<'a, S: TemplateSource> AssetCopier<'a, S> {
    pub fn new(source: &'a S, files: &'a [String], target_dir: &'a Path) -> Self {
        Self {
            source,
            files,
            target_dir,
        }
    }

    pub fn copy_into(&self, plan: &mut ProjectPlan) -> Result<(), AppGenError> {
        for file in self.files {
            let bytes = self.source.read_asset(file)?;
            tracing::debug!(asset = %file, size = bytes.len(), "copied asset");
            plan.push(self.target_dir.join(file), FileContents::Binary(bytes))?;
        }
        Ok(())
    }
}
