use std::{error::Error, process::ExitCode};

use clap::Parser;
use mavengen::{
    cli::{args::CliArgs, command_handlers::dispatch},
    config::MavengenConfig,
};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<u8, Box<dyn Error>> {
    let cli_args: CliArgs = CliArgs::parse();
    let config = MavengenConfig::load()?;

    dispatch(cli_args.cmd, config, &mut std::io::stdout().lock())
}
