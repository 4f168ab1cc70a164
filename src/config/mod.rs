use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::model::is_contained_relative;

/// リポジトリルートで探す既定の設定ファイル名。
pub const DEFAULT_CONFIG_FILE: &str = "appgen.yaml";

/// リポジトリのレイアウトと新規アプリの固定ファイル一覧を保持する構造体。
///
/// パスはすべてコマンドラインで指定されたリポジトリルートからの相対パス。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// 新規アプリを作成するディレクトリ
    pub apps_dir: PathBuf,
    /// テンプレートファイルを置くディレクトリ
    pub templates_dir: PathBuf,
    /// 実行を続けるためにルートに存在すべきエントリ
    pub expected_root_entries: Vec<String>,
    /// `templates_dir` からの相対パスで並べたテンプレート一覧（コピー順）
    pub template_files: Vec<String>,
    /// アセットコピーの設定
    pub assets: AssetConfig,
}

/// アセットコピーの設定。

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// `--with-assets` なしでもアセットをコピーする
    pub enabled: bool,
    /// コピー元ディレクトリ
    pub source_dir: PathBuf,
    /// コピー先となる新規プロジェクト内のサブディレクトリ
    pub target_dir: PathBuf,
    /// コピーするアセット一覧
    pub files: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            apps_dir: PathBuf::from("Apps"),
            templates_dir: PathBuf::from("Programs/AppGen/Templates"),
            expected_root_entries: ["README.md", "Apps", "Engine", "External", "Programs"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            template_files: [
                "Stdafx.h",
                "Stdafx.cpp",
                "TEMPLATEApp.h",
                "TEMPLATEApp.cpp",
                "Main.cpp",
                "TEMPLATE.vcxproj",
                "TEMPLATE.vcxproj.filters",
                "packages.config",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            assets: AssetConfig::default(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            source_dir: PathBuf::from("Programs/AppGen/Templates/Assets"),
            target_dir: PathBuf::from("Assets"),
            files: vec!["tile-sdk.png".to_string()],
        }
    }
}

/// 具体的なリポジトリルートに結び付けた設定。
#[derive(Debug, Clone)]
pub struct ResolvedLayout {
    pub root: PathBuf,
    pub apps_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub assets_source_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn resolve(&self, root: &Path) -> ResolvedLayout {
        ResolvedLayout {
            root: root.to_path_buf(),
            apps_dir: root.join(&self.apps_dir),
            templates_dir: root.join(&self.templates_dir),
            assets_source_dir: root.join(&self.assets.source_dir),
        }
    }
}

/// 設定ファイルを読み込む。
///
/// ファイルが存在しない場合はデフォルト値を返す。
/// 読み込みやパースに失敗した場合、出力先がプロジェクト外を指す場合はエラーを返す。
pub fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(GeneratorConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
    let config: GeneratorConfig = serde_yaml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("failed to parse config {}: {}", path.display(), e))?;
    validate_output_paths(&config)
        .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// 新規プロジェクト内に書き出されるパスを検証する。
///
/// 絶対パスや `..` を含むパスは `Apps/<name>` の外へ書き込めるため拒否する。
fn validate_output_paths(config: &GeneratorConfig) -> anyhow::Result<()> {
    if !is_contained_relative(&config.assets.target_dir) {
        anyhow::bail!(
            "assets.target_dir '{}' must be a relative path inside the project",
            config.assets.target_dir.display()
        );
    }
    for entry in &config.template_files {
        if !is_contained_relative(Path::new(entry)) {
            anyhow::bail!("template_files entry '{entry}' must be a relative path inside the project");
        }
    }
    for entry in &config.assets.files {
        if !is_contained_relative(Path::new(entry)) {
            anyhow::bail!("assets.files entry '{entry}' must be a relative path inside the project");
        }
    }
    Ok(())
}
