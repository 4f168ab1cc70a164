use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::model::{ProjectGuid, ProjectName};

/// テンプレートの内容とファイル名で認識するプレースホルダ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Guid,
    Name,
    Generic,
}

impl Token {
    /// 長い順。`TEMPLATE` は他の2つの接頭辞。
    pub const ALL: [Token; 3] = [Token::Guid, Token::Name, Token::Generic];

    pub fn literal(self) -> &'static str {
        match self {
            Token::Guid => "TEMPLATE_GUID",
            Token::Name => "TEMPLATE_NAME",
            Token::Generic => "TEMPLATE",
        }
    }

    fn from_literal(literal: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.literal() == literal)
    }
}

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut literals: Vec<&str> = Token::ALL.iter().map(|t| t.literal()).collect();
    // 選択は左優先のため、重なるプレースホルダは並び順で決まる。
    literals.sort_by_key(|l| std::cmp::Reverse(l.len()));
    let alternation = literals
        .iter()
        .map(|l| regex::escape(l))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("token alternation is a valid regex")
});

/// 1回の実行で各トークンに代入する値。
#[derive(Debug, Clone)]
pub struct Substitution {
    name: String,
    guid: String,
}

impl Substitution {
    pub fn new(name: &ProjectName, guid: &ProjectGuid) -> Self {
        Self {
            name: name.as_str().to_string(),
            guid: guid.to_string(),
        }
    }

    pub fn value_for(&self, token: Token) -> &str {
        match token {
            Token::Guid => &self.guid,
            Token::Name | Token::Generic => &self.name,
        }
    }

    /// 左から右への1回の走査で全てのプレースホルダを置換する。
    /// 置換後の文字列は再走査しないため、`TEMPLATE` を含むプロジェクト名もそのまま残る。
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        TOKEN_PATTERN.replace_all(input, |caps: &Captures<'_>| {
            Token::from_literal(&caps[0])
                .map(|t| self.value_for(t))
                .unwrap_or(&caps[0])
                .to_string()
        })
    }
}
