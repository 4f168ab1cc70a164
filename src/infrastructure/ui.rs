use console::style;

use crate::application::invocation::Rejection;
use crate::application::new_app::NewAppOutcome;

pub fn usage_line(program: &str) -> String {
    format!("usage: {program} <ProjectName>")
}

fn file_count(n: usize) -> String {
    if n == 1 {
        "1 file".to_string()
    } else {
        format!("{n} files")
    }
}

/// 結果を1行で整形する。ドライランの場合は予定ファイルを全て列挙する。
pub fn format_outcome(outcome: &NewAppOutcome, program: &str) -> String {
    match outcome {
        NewAppOutcome::Created { name, path, files, .. } => format!(
            "{} {}",
            style("✓").green(),
            style(format!(
                "Created project '{name}' at {} ({})",
                path.display(),
                file_count(files.len())
            ))
            .green()
        ),
        NewAppOutcome::Planned { name, guid, files } => {
            let mut out = format!(
                "  {}",
                style(format!("Would create project '{name}' with GUID {guid}:")).cyan()
            );
            for file in files {
                out.push_str(&format!("\n    {}", file.display()));
            }
            out
        }
        NewAppOutcome::Rejected(Rejection::Usage) => {
            format!("{} {}", style("!").yellow(), style(usage_line(program)).yellow())
        }
        NewAppOutcome::Rejected(rejection) => {
            format!("{} {}", style("✗").red(), style(rejection).red())
        }
    }
}
