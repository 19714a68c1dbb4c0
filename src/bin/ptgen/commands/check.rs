use anyhow::{Context, Result, bail};

use periodic_table::codegen::{self, ArtifactCheck, ArtifactStatus};

use crate::cli::CheckArgs;
use crate::config::build_generator_config;
use crate::display::{Context as DisplayContext, Progress, print_checks};

const TOTAL_STEPS: u8 = 1;

pub fn run_check(args: CheckArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_generator_config(&args.paths);
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.begin("Comparing generated modules");
    let checks = codegen::check(&config).context("Failed to check generated modules")?;
    progress.end(&check_details(&checks));

    progress.finish();

    if ctx.interactive {
        print_checks(&checks);
    }

    let outdated: Vec<String> = checks
        .iter()
        .filter(|c| c.status != ArtifactStatus::UpToDate)
        .map(|c| c.path.display().to_string())
        .collect();

    if !outdated.is_empty() {
        bail!(
            "Generated modules are out of date: {}. Run `ptgen generate` to refresh them.",
            outdated.join(", ")
        );
    }

    Ok(())
}

fn check_details(checks: &[ArtifactCheck]) -> Vec<String> {
    checks
        .iter()
        .map(|c| {
            let status = match c.status {
                ArtifactStatus::UpToDate => "up to date",
                ArtifactStatus::Stale => "stale",
                ArtifactStatus::Missing => "missing",
            };
            format!("{} is {}", c.dataset.module_file_name(), status)
        })
        .collect()
}
