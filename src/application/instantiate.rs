use crate::domain::error::AppGenError;
use crate::domain::model::{FileContents, ProjectPlan};
use crate::domain::token::Substitution;

use super::port::TemplateSource;

/// 一覧の各テンプレートを置換した上で計画に追加する。
pub struct TemplateInstantiator<'a, S: TemplateSource> {
    source: &'a S,
    manifest: &'a [String],
}

impl<'a, S: TemplateSource> TemplateInstantiator<'a, S> {
    pub fn new(source: &'a S, manifest: &'a [String]) -> Self {
        Self { source, manifest }
    }

    /// 読み込めないテンプレートや出力パスの不正があった時点で中断する。
    /// その場合、計画は呼び出し側で破棄される。
    pub fn instantiate(
        &self,
        plan: &mut ProjectPlan,
        substitution: &Substitution,
    ) -> Result<(), AppGenError> {
        for entry in self.manifest {
            let template = self.source.read_template(entry)?;
            let contents = substitution.apply(&template).into_owned();
            let destination = substitution.apply(entry).into_owned();
            tracing::debug!(template = %entry, destination = %destination, "instantiated template");
            plan.push(destination, FileContents::Text(contents))?;
        }
        Ok(())
    }
}
