use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::{
    bazel::{self, MavenJarQuery},
    gradle::{self, DependencyLister},
    model::{ArtifactCollection, Configuration, ParseError, Selection},
    process::CommandError,
};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("Invalid selection: {0}")]
    Parse(#[from] ParseError),
    #[error("Module `{module}` does not apply the {plugin} plugin")]
    MissingPlugin { module: String, plugin: String },
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}

/// Lists the dependencies of every selection and returns them deduplicated.
///
/// Selections are processed in order and the first failure aborts the whole run.
/// Duplicates are removed once, across all selections, after every listing succeeded.
pub fn collect_artifacts<L: DependencyLister>(
    lister: &L,
    directory: &Path,
    modules: &[String],
    configurations: &[Configuration],
) -> Result<ArtifactCollection, GenerateError> {
    let mut artifacts = ArtifactCollection::new();

    for selection in Selection::cross_product(modules, configurations) {
        info!("Resolving dependencies of {}", selection);
        let lines = lister.list_dependencies(
            directory,
            selection.module.as_deref(),
            selection.configuration,
        )?;
        let found = gradle::extract_artifacts(&lines);
        debug!("Found {} artifacts for {}", found.len(), selection);

        artifacts.push_comment(selection);
        artifacts.extend_artifacts(found);
    }

    Ok(artifacts.deduplicated())
}

/// Collects the coordinates of every `maven_jar` rule in a Bazel workspace, sorted.
pub fn collect_maven_jars<Q: MavenJarQuery>(
    query: &Q,
    workspace: &Path,
) -> Result<ArtifactCollection, GenerateError> {
    info!("Querying maven_jar rules in {}", workspace.display());
    let lines = query.query_maven_jars(workspace)?;
    let found = bazel::extract_maven_jar_artifacts(&lines);
    debug!("Found {} maven_jar artifacts", found.len());

    let mut artifacts = ArtifactCollection::new();
    artifacts.extend_artifacts(found);
    Ok(artifacts.deduplicated())
}

/// Checks that every selected module (the root project when none) applies `plugin`.
pub fn verify_plugin<L: DependencyLister>(
    lister: &L,
    directory: &Path,
    modules: &[String],
    plugin: &str,
) -> Result<(), GenerateError> {
    let modules: Vec<Option<&str>> = if modules.is_empty() {
        vec![None]
    } else {
        modules.iter().map(|module| Some(module.as_str())).collect()
    };

    for module in modules {
        let properties = lister.list_properties(directory, module)?;
        if !gradle::has_plugin(&properties, plugin) {
            return Err(GenerateError::MissingPlugin {
                module: module.unwrap_or("root").to_owned(),
                plugin: plugin.to_owned(),
            });
        }
        debug!("{} applies {}", module.unwrap_or("root"), plugin);
    }

    Ok(())
}
