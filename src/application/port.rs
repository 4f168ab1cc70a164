use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::domain::error::AppGenError;
use crate::domain::model::{ProjectGuid, ProjectPlan};

/// リポジトリルートとアプリディレクトリの読み取り専用ポート。
pub trait RootInspector {
    fn root_entries(&self) -> Result<BTreeSet<String>, AppGenError>;
    fn existing_apps(&self) -> Result<BTreeSet<String>, AppGenError>;
}

/// 一覧のエントリ名でテンプレートとアセットを取得するポート。
pub trait TemplateSource {
    fn read_template(&self, entry: &str) -> Result<String, AppGenError>;
    fn read_asset(&self, entry: &str) -> Result<Vec<u8>, AppGenError>;
}

pub trait IdGenerator {
    fn generate(&self) -> ProjectGuid;
}

/// 完成した計画を書き出し、作成したプロジェクトディレクトリを返すポート。
pub trait ProjectWriter {
    fn write(&self, plan: &ProjectPlan) -> Result<PathBuf, AppGenError>;
}
