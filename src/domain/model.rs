use std::fmt;
use std::path::{Component, Path, PathBuf};

use uuid::Uuid;

use super::error::AppGenError;
use super::validation::{ValidationError, validate_project_name};

/// 作成するアプリ名。`Apps/` 配下のディレクトリ名も兼ねる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        validate_project_name(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 生成されるプロジェクトファイルに書き込むプロジェクト識別子。
///
/// 常に Visual Studio と同じ大文字ハイフン区切り形式で表示する。
/// 例: `3F2504E0-4F89-41D3-9A0C-0305E82C3301`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectGuid(Uuid);

impl ProjectGuid {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ProjectGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Uuid::encode_buffer();
        f.write_str(self.0.hyphenated().encode_upper(&mut buf))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContents {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContents::Text(text) => text.as_bytes(),
            FileContents::Binary(bytes) => bytes,
        }
    }
}

/// `path` が空でなく通常の名前要素のみで構成される場合に true を返す。
/// このパスはディレクトリに結合してもその外を指さない。
pub fn is_contained_relative(path: &Path) -> bool {
    let mut components = path.components().peekable();
    components.peek().is_some() && components.all(|c| matches!(c, Component::Normal(_)))
}

/// 新規プロジェクトディレクトリからの相対パスで表す出力ファイル。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub relative_path: PathBuf,
    pub contents: FileContents,
}

/// 1つの新規プロジェクトで書き出す内容の全体。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    pub name: ProjectName,
    pub guid: ProjectGuid,
    pub files: Vec<PlannedFile>,
}

impl ProjectPlan {
    pub fn new(name: ProjectName, guid: ProjectGuid) -> Self {
        Self {
            name,
            guid,
            files: Vec::new(),
        }
    }

    /// ファイルを追加する。
    ///
    /// プロジェクト外を指すパスと、追加済みのファイルと重複するパスは拒否する。
    pub fn push(
        &mut self,
        relative_path: impl Into<PathBuf>,
        contents: FileContents,
    ) -> Result<(), AppGenError> {
        let relative_path = relative_path.into();
        if !is_contained_relative(&relative_path) {
            return Err(AppGenError::UnsafePath {
                path: relative_path,
            });
        }
        if self.relative_paths().any(|p| p == &relative_path) {
            return Err(AppGenError::DuplicateOutput {
                path: relative_path,
            });
        }
        self.files.push(PlannedFile {
            relative_path,
            contents,
        });
        Ok(())
    }

    pub fn relative_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().map(|f| &f.relative_path)
    }
}
