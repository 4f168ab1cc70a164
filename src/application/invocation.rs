use std::fmt;

use crate::domain::error::AppGenError;
use crate::domain::model::ProjectName;
use crate::domain::validation::ValidationError;

use super::port::RootInspector;

/// 書き込み前に実行を打ち切る想定内の結果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Usage,
    WrongRoot { missing: Vec<String> },
    InvalidName(ValidationError),
    AlreadyExists(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Usage => write!(f, "wrong number of arguments"),
            Rejection::WrongRoot { missing } => write!(
                f,
                "Run this tool from the repository root (missing: {})",
                missing.join(", ")
            ),
            Rejection::InvalidName(e) => write!(f, "{e}"),
            Rejection::AlreadyExists(name) => write!(f, "Project '{name}' already exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Proceed(ProjectName),
    Reject(Rejection),
}

pub struct InvocationValidator<'a, R: RootInspector> {
    inspector: &'a R,
    expected_root_entries: &'a [String],
}

impl<'a, R: RootInspector> InvocationValidator<'a, R> {
    pub fn new(inspector: &'a R, expected_root_entries: &'a [String]) -> Self {
        Self {
            inspector,
            expected_root_entries,
        }
    }

    /// 引数の数、ルートのエントリ、名前の形式、名前の重複の順に検証する。
    ///
    /// アプリディレクトリの一覧はルートの検証を通過した後にのみ取得する。
    pub fn validate(&self, names: &[String]) -> Result<Verdict, AppGenError> {
        let [raw_name] = names else {
            return Ok(Verdict::Reject(Rejection::Usage));
        };

        let entries = self.inspector.root_entries()?;
        let missing: Vec<String> = self
            .expected_root_entries
            .iter()
            .filter(|e| !entries.contains(e.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Ok(Verdict::Reject(Rejection::WrongRoot { missing }));
        }

        let name = match ProjectName::new(raw_name) {
            Ok(name) => name,
            Err(e) => return Ok(Verdict::Reject(Rejection::InvalidName(e))),
        };

        if self.inspector.existing_apps()?.contains(name.as_str()) {
            return Ok(Verdict::Reject(Rejection::AlreadyExists(
                name.as_str().to_string(),
            )));
        }

        Ok(Verdict::Proceed(name))
    }
}
