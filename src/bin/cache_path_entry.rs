use std::{error::Error, path::PathBuf, process::ExitCode};

use clap::Parser;
use mavengen::cache_path::{CachePathEntry, DEFAULT_ANCHOR};

/// Prints `group\:artifact\:version=../../../<path>` lines for jars inside a dependency cache.
#[derive(Debug, Parser)]
#[clap(version)]
struct CliArgs {
    /// Directory name the relative paths start from
    #[clap(short, long, default_value = DEFAULT_ANCHOR)]
    anchor: String,
    /// Jar paths of the form .../<anchor>/<group path>/<artifact>/<version>/<file>.jar
    #[clap(required = true)]
    jars: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse();

    let entries = cli_args
        .jars
        .iter()
        .map(|jar| CachePathEntry::from_jar_path(jar, &cli_args.anchor))
        .collect::<Result<Vec<_>, _>>()?;

    for entry in entries {
        log::debug!("{} -> {}", entry.key(), entry.relative_path);
        println!("{entry}");
    }

    Ok(())
}
