use std::{env, io, path::PathBuf};

use crate::{
    bazel::{BazelQuery, MavenJarQuery},
    gradle::{DependencyLister, GradleWrapper},
    Mavengen,
};

pub const DEFAULT_OUTPUT_FILE_NAME: &str = "maven_install.bzl";
pub const DEFAULT_REQUIRED_PLUGIN: &str = "com.android.build.gradle";

#[derive(Default)]
pub struct MavengenBuilder {
    root: Option<PathBuf>,
    gradle_wrapper: Option<PathBuf>,
    bazel_binary: Option<PathBuf>,
    output_file_name: Option<PathBuf>,
    required_plugin: Option<String>,
}

impl MavengenBuilder {
    /// Gradle project root directory, the one containing the wrapper script.
    ///
    /// Defaults to the current directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Gradle entry point, relative to `root`.
    ///
    /// Defaults to `gradlew`.
    pub fn gradle_wrapper(mut self, path: impl Into<PathBuf>) -> Self {
        self.gradle_wrapper = Some(path.into());
        self
    }

    /// Bazel binary used to query `maven_jar` rules.
    ///
    /// Defaults to `bazel` on the PATH.
    pub fn bazel_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.bazel_binary = Some(path.into());
        self
    }

    /// Name of the file written into `root` by `write_to_project_directory`.
    ///
    /// Defaults to `maven_install.bzl`.
    pub fn output_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file_name = Some(path.into());
        self
    }

    /// Plugin every module must apply before anything is written into `root`.
    ///
    /// Defaults to `com.android.build.gradle`.
    pub fn required_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.required_plugin = Some(plugin.into());
        self
    }

    pub fn try_build(mut self) -> Result<Mavengen, io::Error> {
        if self.root.is_none() {
            self.root = Some(env::current_dir()?);
        }
        let gradle_wrapper = self
            .gradle_wrapper
            .clone()
            .map(GradleWrapper::new)
            .unwrap_or_default();
        Ok(self.build_with(gradle_wrapper))
    }

    /// Builds against another view of the Gradle project.
    pub fn build_with<L: DependencyLister>(mut self, lister: L) -> Mavengen<L> {
        let query = self
            .bazel_binary
            .take()
            .map(BazelQuery::new)
            .unwrap_or_default();
        self.build_with_tools(lister, query)
    }

    /// Builds against other views of both the Gradle project and the Bazel workspace.
    pub fn build_with_tools<L: DependencyLister, Q: MavenJarQuery>(
        self,
        lister: L,
        query: Q,
    ) -> Mavengen<L, Q> {
        let Self {
            root,
            gradle_wrapper: _,
            bazel_binary: _,
            output_file_name,
            required_plugin,
        } = self;

        Mavengen {
            lister,
            query,
            root: root.unwrap_or_else(|| PathBuf::from(".")),
            output_file_name: output_file_name
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE_NAME)),
            required_plugin: required_plugin.unwrap_or_else(|| DEFAULT_REQUIRED_PLUGIN.to_owned()),
        }
    }
}
