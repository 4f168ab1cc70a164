use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Project name must be {0} characters or less")]
    TooLong(usize),
    #[error("Project name '{0}' must not start or end with whitespace")]
    SurroundingWhitespace(String),
    #[error("Project name '{0}' is not a usable directory name")]
    ReservedName(String),
    #[error("Project name '{name}' contains invalid character {found:?}")]
    InvalidCharacter { name: String, found: char },
    #[error("Project name '{0}' must not end with a dot")]
    TrailingDot(String),
}

const MAX_PROJECT_NAME_LENGTH: usize = 64;

// パス区切り文字と、Windows がファイル名に使えない文字。
const FORBIDDEN_CHARACTERS: &[char] = &['/', '\\', '<', '>', ':', '"', '|', '?', '*'];

/// プロジェクト名がそのまま1つのパス要素として使えるか検証する。
pub fn validate_project_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if name.chars().count() > MAX_PROJECT_NAME_LENGTH {
        return Err(ValidationError::TooLong(MAX_PROJECT_NAME_LENGTH));
    }

    if name.trim() != name {
        return Err(ValidationError::SurroundingWhitespace(name.to_string()));
    }

    if name == "." || name == ".." {
        return Err(ValidationError::ReservedName(name.to_string()));
    }

    if let Some(found) = name
        .chars()
        .find(|c| c.is_control() || FORBIDDEN_CHARACTERS.contains(c))
    {
        return Err(ValidationError::InvalidCharacter {
            name: name.to_string(),
            found,
        });
    }

    if name.ends_with('.') {
        return Err(ValidationError::TrailingDot(name.to_string()));
    }

    Ok(())
}
