use std::{fs, io, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::{
    config::{CONFIG_FILE_NAME, ScanConfig, default_config_json},
    core::{PROJECT_FILE_NAME, generate},
};

mod args;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command, GenerateArgs, InitCommand};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init(cmd)) => init(&cmd.dir),
        None => run_generate(&args.generate),
    }
}

fn run_generate(args: &GenerateArgs) -> Result<ExitStatus> {
    let (Some(input), Some(output)) = (&args.input, &args.output) else {
        bail!("Both --input and --output are required. Use --help to see usage.");
    };

    let (config, from_file) = ScanConfig::resolve(input, output, args.overrides())?;
    report::print_default_config_note(from_file, config.verbose);

    let result = generate(&config)?;

    if config.verbose && result.files_ignored > 0 {
        eprintln!(
            "{} {} file(s) skipped by ignore patterns",
            "note:".bold().cyan(),
            result.files_ignored
        );
    }
    report::print_summary(&result, config.verbose);

    Ok(ExitStatus::Success)
}

fn init(dir: &Path) -> Result<ExitStatus> {
    if !dir.join(PROJECT_FILE_NAME).is_file() {
        eprintln!(
            "{} {} has no {}; writing configuration anyway",
            "warning:".bold().yellow(),
            dir.display(),
            PROJECT_FILE_NAME
        );
    }

    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    let json = default_config_json().context("Failed to generate default config.")?;
    fs::write(&config_path, json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    report::print_init_success_to(&config_path, &mut io::stdout().lock());
    Ok(ExitStatus::Success)
}
