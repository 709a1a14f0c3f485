use std::{error::Error, io::Write};

use clap::CommandFactory;
use log::{error, info};

use crate::{
    cli::args::{CliArgs, Command, GradleArgs, MigrateArgs},
    config::MavengenConfig,
    model::Configuration,
    Mavengen,
};

pub const EXIT_SUCCESS: u8 = 0;
/// Exit status when no supported build system was given.
pub const EXIT_USAGE: u8 = 2;

/// Runs a parsed command, writing declarations and help to `out`.
///
/// Returns the process exit status. Errors are left to the caller to report.
pub fn dispatch(
    cmd: Option<Command>,
    config: MavengenConfig,
    out: &mut impl Write,
) -> Result<u8, Box<dyn Error>> {
    match cmd {
        Some(Command::Gradle(args)) => {
            do_gradle(&args, config, out)?;
            Ok(EXIT_SUCCESS)
        }
        Some(Command::Migrate(args)) => {
            do_migrate(&args, config, out)?;
            Ok(EXIT_SUCCESS)
        }
        Some(Command::Maven) => {
            error!("Maven projects are not supported, only gradle");
            write_help(out)?;
            Ok(EXIT_USAGE)
        }
        None => {
            write_help(out)?;
            Ok(EXIT_USAGE)
        }
    }
}

fn write_help(out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    write!(out, "{}", CliArgs::command().render_help())?;
    Ok(())
}

/// Handler to gradle command
/// Prints the declaration, or appends it to the project directory when asked to
pub fn do_gradle(
    args: &GradleArgs,
    config: MavengenConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let mut builder = Mavengen::builder().root(&args.directory);
    if let Some(wrapper) = config.gradle_wrapper {
        builder = builder.gradle_wrapper(wrapper);
    }
    if let Some(plugin) = config.required_plugin {
        builder = builder.required_plugin(plugin);
    }
    if let Some(output_file) = config.output_file {
        builder = builder.output_file_name(output_file);
    }
    let mavengen = builder.try_build()?;

    let configurations: Vec<&str> = args
        .configurations
        .iter()
        .map(Configuration::as_str)
        .collect();

    if args.write_to_project_directory {
        let path =
            mavengen.write_to_project_directory(&args.modules, configurations.as_slice())?;
        info!("Add the contents of {} to your WORKSPACE", path.display());
    } else {
        let declaration = mavengen.generate(&args.modules, configurations.as_slice())?;
        write!(out, "{declaration}")?;
    }

    Ok(())
}

/// Handler to migrate command
pub fn do_migrate(
    args: &MigrateArgs,
    config: MavengenConfig,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    let mut builder = Mavengen::builder().root(&args.directory);
    if let Some(binary) = config.bazel_binary {
        builder = builder.bazel_binary(binary);
    }
    let declaration = builder.try_build()?.migrate_maven_jars()?;
    write!(out, "{declaration}")?;
    info!("Replace the maven_jar rules with the declaration above");
    Ok(())
}
