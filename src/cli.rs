use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "appgen",
    version,
    about = "Create a new application under Apps/ from the AppGen templates"
)]
pub struct Cli {
    /// Name of the new project (exactly one)
    #[arg(value_name = "ProjectName", num_args = 0..)]
    pub names: Vec<String>,

    /// Repository root
    #[arg(long, env = "APPGEN_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/appgen.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Also copy the template assets into Assets/
    #[arg(long, default_value_t = false)]
    pub with_assets: bool,

    /// Print the files that would be created without writing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Exit with status 2 when the invocation is rejected
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
