use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use super::MavenJarQuery;
use crate::process::{output_lines, CommandError};

pub const DEFAULT_BAZEL: &str = "bazel";

const MAVEN_JAR_QUERY: [&str; 4] = [
    "query",
    "kind(maven_jar, //external:all)",
    "--output=build",
    "--noshow_progress",
];

/// Runs `bazel query` inside a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BazelQuery {
    // Looked up on PATH unless it contains a separator
    binary: PathBuf,
}

impl Default for BazelQuery {
    fn default() -> Self {
        BazelQuery::new(DEFAULT_BAZEL)
    }
}

impl BazelQuery {
    pub fn new(binary: impl Into<PathBuf>) -> BazelQuery {
        BazelQuery {
            binary: binary.into(),
        }
    }
}

impl MavenJarQuery for BazelQuery {
    fn query_maven_jars(&self, workspace: &Path) -> Result<Vec<String>, CommandError> {
        let command = format!(
            "{} query 'kind(maven_jar, //external:all)' --output=build --noshow_progress",
            self.binary.display()
        );
        debug!("Running `{}` in {}", command, workspace.display());
        output_lines(
            Command::new(&self.binary)
                .args(MAVEN_JAR_QUERY)
                .current_dir(workspace),
            &command,
        )
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn runs_query_in_workspace() {
        let workspace = tempfile::tempdir().unwrap();
        let bazel = workspace.path().join("fake-bazel");
        std::fs::write(
            &bazel,
            "#!/bin/sh\nprintf '%s\\n' \"$1|$2|$3|$4\" \"cwd:$(basename \"$(pwd)\")\"\n",
        )
        .unwrap();
        std::fs::set_permissions(&bazel, std::fs::Permissions::from_mode(0o755)).unwrap();

        let lines = BazelQuery::new(&bazel)
            .query_maven_jars(workspace.path())
            .unwrap();
        let dir_name = workspace
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert_eq!(
            lines,
            vec![
                "query|kind(maven_jar, //external:all)|--output=build|--noshow_progress".to_string(),
                format!("cwd:{dir_name}"),
            ]
        );
    }

    #[test]
    fn missing_bazel_is_a_spawn_error() {
        let workspace = tempfile::tempdir().unwrap();
        let error = BazelQuery::new(workspace.path().join("no-such-bazel"))
            .query_maven_jars(workspace.path())
            .unwrap_err();
        assert!(matches!(error, CommandError::Spawn { .. }));
    }
}
