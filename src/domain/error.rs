use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// AppGenError は雛形生成を中断するエラー型。
///
/// いずれかが発生した場合、`Apps/` 配下には何も残らない。
#[derive(Debug, Error)]
pub enum AppGenError {
    /// ディレクトリ一覧の取得失敗
    #[error("failed to list {path}: {source}")]
    ListDirectory { path: PathBuf, source: io::Error },

    /// テンプレートの読み込み失敗（UTF-8 でない場合を含む）
    #[error("failed to read template {path}: {source}")]
    ReadTemplate { path: PathBuf, source: io::Error },

    /// アセットの読み込み失敗
    #[error("failed to read asset {path}: {source}")]
    ReadAsset { path: PathBuf, source: io::Error },

    /// ステージングディレクトリへの書き込み失敗
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    /// ステージングディレクトリを最終位置へ移動できなかった場合
    #[error("failed to move staged project into {path}: {source}")]
    Commit { path: PathBuf, source: io::Error },

    /// 出力パスが絶対パス、または `..` などを含みプロジェクト外を指す場合
    #[error("output path {path} must stay inside the project directory")]
    UnsafePath { path: PathBuf },

    /// 置換後に二つの出力ファイルが同じパスになった場合
    #[error("more than one file would be written to {path}")]
    DuplicateOutput { path: PathBuf },
}

impl AppGenError {
    pub fn path(&self) -> &PathBuf {
        match self {
            AppGenError::ListDirectory { path, .. }
            | AppGenError::ReadTemplate { path, .. }
            | AppGenError::ReadAsset { path, .. }
            | AppGenError::Write { path, .. }
            | AppGenError::Commit { path, .. }
            | AppGenError::UnsafePath { path }
            | AppGenError::DuplicateOutput { path } => path,
        }
    }
}
