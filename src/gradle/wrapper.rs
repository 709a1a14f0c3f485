use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use crate::model::Configuration;

use super::{task_path, DependencyLister};
use crate::process::{output_lines, CommandError};

pub const DEFAULT_WRAPPER: &str = "gradlew";

/// Runs the project's Gradle wrapper script with plain console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradleWrapper {
    // Relative to the project directory
    wrapper: PathBuf,
}

impl Default for GradleWrapper {
    fn default() -> Self {
        GradleWrapper::new(DEFAULT_WRAPPER)
    }
}

impl GradleWrapper {
    pub fn new(wrapper: impl Into<PathBuf>) -> GradleWrapper {
        GradleWrapper {
            wrapper: wrapper.into(),
        }
    }

    fn run(&self, directory: &Path, args: &[String]) -> Result<Vec<String>, CommandError> {
        let program = directory.join(&self.wrapper);
        let command = format!("{} {}", program.display(), args.join(" "));
        // The program path would otherwise be resolved against the new working directory
        let directory = directory
            .canonicalize()
            .map_err(|source| CommandError::Spawn {
                command: command.clone(),
                source,
            })?;
        debug!("Running `{}` in {}", command, directory.display());

        output_lines(
            Command::new(directory.join(&self.wrapper))
                .args(args)
                .current_dir(&directory),
            &command,
        )
    }
}

impl DependencyLister for GradleWrapper {
    fn list_dependencies(
        &self,
        directory: &Path,
        module: Option<&str>,
        configuration: Option<Configuration>,
    ) -> Result<Vec<String>, CommandError> {
        let mut args = vec![
            task_path(module, "dependencies"),
            "--console".to_owned(),
            "plain".to_owned(),
        ];
        if let Some(configuration) = configuration {
            args.push("--configuration".to_owned());
            args.push(configuration.to_string());
        }
        self.run(directory, &args)
    }

    fn list_properties(
        &self,
        directory: &Path,
        module: Option<&str>,
    ) -> Result<Vec<String>, CommandError> {
        let args = vec![
            task_path(module, "properties"),
            "--console".to_owned(),
            "plain".to_owned(),
        ];
        self.run(directory, &args)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::os::unix::fs::PermissionsExt;

    use super::*;

    use pretty_assertions::assert_eq;

    fn write_script(directory: &Path, name: &str, body: &str) {
        let path = directory.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn runs_wrapper_from_project_directory() {
        let project = tempfile::tempdir().unwrap();
        // Echo the arguments back as a dependency tree
        write_script(
            project.path(),
            "gradlew",
            r#"printf '%s\n' "+--- args:$*:end"
printf '%s\n' "cwd:$(basename "$(pwd)")""#,
        );
        write_script(project.path(), "failing", "echo broken >&2\nexit 3");

        let lines = GradleWrapper::default()
            .list_dependencies(
                project.path(),
                Some("app"),
                Some(Configuration::TestImplementation),
            )
            .unwrap();
        let dir_name = project
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert_eq!(
            lines,
            vec![
                "+--- args:app:dependencies --console plain --configuration testImplementation:end"
                    .to_string(),
                format!("cwd:{dir_name}"),
            ]
        );

        let lines = GradleWrapper::default()
            .list_properties(project.path(), None)
            .unwrap();
        assert_eq!(lines[0], "+--- args:properties --console plain:end");

        let error = GradleWrapper::new("failing")
            .list_dependencies(project.path(), None, None)
            .unwrap_err();
        match error {
            CommandError::Failed {
                command,
                status,
                stderr,
            } => {
                assert!(command.ends_with("failing dependencies --console plain"));
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_wrapper_is_a_spawn_error() {
        let project = tempfile::tempdir().unwrap();
        let error = GradleWrapper::default()
            .list_dependencies(project.path(), None, None)
            .unwrap_err();
        assert!(matches!(error, CommandError::Spawn { .. }));
        assert!(error.to_string().contains("gradlew dependencies --console plain"));
    }
}
