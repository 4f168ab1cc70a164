use std::path::Path;

use anyhow::Context;
use clap::Parser;

use appgen::application::new_app::{NewAppArgs, NewAppOutcome, NewAppUseCase};
use appgen::cli::Cli;
use appgen::config::{DEFAULT_CONFIG_FILE, load_config};
use appgen::infrastructure::fs_root::FsRootInspector;
use appgen::infrastructure::fs_templates::FsTemplateSource;
use appgen::infrastructure::fs_writer::StagedProjectWriter;
use appgen::infrastructure::id::UuidGenerator;
use appgen::infrastructure::ui::format_outcome;

const REJECTED_EXIT_CODE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        1 => tracing_subscriber::EnvFilter::new("debug"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "appgen".to_string())
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = match &cli.config {
        Some(path) if !path.exists() => {
            anyhow::bail!("config file {} does not exist", path.display())
        }
        Some(path) => load_config(path)?,
        None => load_config(&cli.root.join(DEFAULT_CONFIG_FILE))?,
    };
    let layout = config.resolve(&cli.root);
    tracing::debug!(root = %layout.root.display(), apps = %layout.apps_dir.display(), "resolved layout");

    let use_case = NewAppUseCase::new(
        config,
        FsRootInspector::new(layout.root.clone(), layout.apps_dir.clone()),
        FsTemplateSource::new(layout.templates_dir, layout.assets_source_dir),
        UuidGenerator::new(),
        StagedProjectWriter::new(layout.apps_dir),
    );

    let outcome = use_case
        .execute(NewAppArgs {
            names: cli.names,
            with_assets: cli.with_assets,
            dry_run: cli.dry_run,
        })
        .context("project creation failed")?;

    println!("{}", format_outcome(&outcome, &program_name()));

    match outcome {
        NewAppOutcome::Rejected(_) if cli.strict => Ok(REJECTED_EXIT_CODE),
        _ => Ok(0),
    }
}
