use anyhow::{Context, Result};

use periodic_table::codegen::{self, Artifact};

use crate::cli::GenerateArgs;
use crate::config::build_generator_config;
use crate::display::{Context as DisplayContext, Progress, print_artifacts};

const TOTAL_STEPS: u8 = 2;

pub fn run_generate(args: GenerateArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_generator_config(&args.paths);
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.begin("Validating sources");
    for dataset in periodic_table::Dataset::ALL {
        codegen::read_source(&config.source_path(dataset))
            .context("Source dataset is not usable")?;
    }
    progress.end(&source_details(&config));

    progress.begin("Writing modules");
    let artifacts = codegen::generate(&config).context("Module generation failed")?;
    progress.end(&write_details(&artifacts));

    progress.finish();

    if ctx.interactive {
        print_artifacts(&artifacts);
    }

    Ok(())
}

fn source_details(config: &codegen::GeneratorConfig) -> Vec<String> {
    periodic_table::Dataset::ALL
        .iter()
        .map(|d| format!("Parse {}", config.source_path(*d).display()))
        .collect()
}

fn write_details(artifacts: &[Artifact]) -> Vec<String> {
    artifacts
        .iter()
        .map(|a| {
            let name = a
                .path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .into_owned();
            format!("{} → {} ({} bytes)", a.dataset.binding(), name, a.bytes)
        })
        .collect()
}
