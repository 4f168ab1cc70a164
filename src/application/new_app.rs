use std::path::PathBuf;

use crate::config::GeneratorConfig;
use crate::domain::error::AppGenError;
use crate::domain::model::{ProjectGuid, ProjectName, ProjectPlan};
use crate::domain::token::Substitution;

use super::assets::AssetCopier;
use super::instantiate::TemplateInstantiator;
use super::invocation::{InvocationValidator, Rejection, Verdict};
use super::port::{IdGenerator, ProjectWriter, RootInspector, TemplateSource};

pub struct NewAppArgs {
    pub names: Vec<String>,
    pub with_assets: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewAppOutcome {
    Created {
        name: ProjectName,
        guid: ProjectGuid,
        path: PathBuf,
        files: Vec<PathBuf>,
    },
    Planned {
        name: ProjectName,
        guid: ProjectGuid,
        files: Vec<PathBuf>,
    },
    Rejected(Rejection),
}

pub struct NewAppUseCase<R, S, G, W>
where
    R: RootInspector,
    S: TemplateSource,
    G: IdGenerator,
    W: ProjectWriter,
{
    config: GeneratorConfig,
    inspector: R,
    source: S,
    ids: G,
    writer: W,
}

impl<R, S, G, W> NewAppUseCase<R, S, G, W>
where
    R: RootInspector,
    S: TemplateSource,
    G: IdGenerator,
    W: ProjectWriter,
{
    pub fn new(config: GeneratorConfig, inspector: R, source: S, ids: G, writer: W) -> Self {
        Self {
            config,
            inspector,
            source,
            ids,
            writer,
        }
    }

    pub fn execute(&self, args: NewAppArgs) -> Result<NewAppOutcome, AppGenError> {
        let validator =
            InvocationValidator::new(&self.inspector, &self.config.expected_root_entries);
        let name = match validator.validate(&args.names)? {
            Verdict::Proceed(name) => name,
            Verdict::Reject(rejection) => {
                tracing::debug!(%rejection, "invocation rejected");
                return Ok(NewAppOutcome::Rejected(rejection));
            }
        };

        let guid = self.ids.generate();
        let plan = self.plan(name, guid, args.with_assets || self.config.assets.enabled)?;
        let files: Vec<PathBuf> = plan.relative_paths().cloned().collect();

        if args.dry_run {
            return Ok(NewAppOutcome::Planned {
                name: plan.name,
                guid: plan.guid,
                files,
            });
        }

        let path = self.writer.write(&plan)?;
        tracing::info!(name = %plan.name, guid = %plan.guid, path = %path.display(), "created project");

        Ok(NewAppOutcome::Created {
            name: plan.name,
            guid: plan.guid,
            path,
            files,
        })
    }

    fn plan(
        &self,
        name: ProjectName,
        guid: ProjectGuid,
        with_assets: bool,
    ) -> Result<ProjectPlan, AppGenError> {
        let substitution = Substitution::new(&name, &guid);
        let mut plan = ProjectPlan::new(name, guid);

        TemplateInstantiator::new(&self.source, &self.config.template_files)
            .instantiate(&mut plan, &substitution)?;

        if with_assets {
            AssetCopier::new(
                &self.source,
                &self.config.assets.files,
                &self.config.assets.target_dir,
            )
            .copy_into(&mut plan)?;
        }

        Ok(plan)
    }
}
