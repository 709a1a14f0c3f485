use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::Configuration;

/// Generates a rules_jvm_external maven_install declaration from a build tool's dependency report.
#[derive(Debug, Parser)]
#[clap(version)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    ///Generates the declaration for a Gradle project
    Gradle(GradleArgs),
    ///Maven projects are not supported yet
    Maven,
    ///Prints a maven_install declaration replacing the maven_jar rules of a Bazel workspace
    Migrate(MigrateArgs),
}

#[derive(Debug, Args)]
pub struct GradleArgs {
    /// Path to the root project directory, typically the one containing `gradlew`
    #[clap(short, long)]
    pub directory: PathBuf,
    /// Module to resolve dependencies for. Defaults to the root project. Can be repeated
    #[clap(short, long = "module")]
    pub modules: Vec<String>,
    /// Configuration to resolve dependencies for. Defaults to all configurations. Can be repeated
    #[clap(short, long = "configuration", value_enum)]
    pub configurations: Vec<Configuration>,
    /// Append the declaration to a file in the project directory instead of printing it
    #[clap(short, long)]
    pub write_to_project_directory: bool,
}

#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Bazel workspace directory. Set by `bazel run`
    #[clap(short, long, env = "BUILD_WORKING_DIRECTORY")]
    pub directory: PathBuf,
}
