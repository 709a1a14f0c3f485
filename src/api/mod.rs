use std::{fs::OpenOptions, io::Write, path::PathBuf};

use log::info;

use crate::{
    bazel::{BazelQuery, MavenJarQuery},
    generate::{collect_artifacts, collect_maven_jars, verify_plugin, GenerateError},
    gradle::{DependencyLister, GradleWrapper},
    model::Configuration,
    render::render_maven_install,
};

mod builder;

pub use builder::MavengenBuilder;

pub struct Mavengen<L = GradleWrapper, Q = BazelQuery> {
    lister: L,
    query: Q,
    root: PathBuf,
    output_file_name: PathBuf,
    required_plugin: String,
}

impl Mavengen {
    pub fn builder() -> MavengenBuilder {
        MavengenBuilder::default()
    }
}

impl<L: DependencyLister, Q> Mavengen<L, Q> {
    /// Renders the `maven_install` declaration for the given modules and configurations.
    ///
    /// Configuration names are validated before Gradle is run.
    pub fn generate<S: AsRef<str>>(
        &self,
        modules: &[String],
        configurations: &[S],
    ) -> Result<String, GenerateError> {
        let configurations = Configuration::parse_all(configurations)?;
        let artifacts = collect_artifacts(&self.lister, &self.root, modules, &configurations)?;
        Ok(render_maven_install(&artifacts))
    }

    /// Appends the declaration to the output file in the project directory.
    ///
    /// Every selected module must apply the required plugin. The file is only
    /// touched once the declaration has been rendered.
    pub fn write_to_project_directory<S: AsRef<str>>(
        &self,
        modules: &[String],
        configurations: &[S],
    ) -> Result<PathBuf, GenerateError> {
        let configurations = Configuration::parse_all(configurations)?;
        verify_plugin(&self.lister, &self.root, modules, &self.required_plugin)?;
        let artifacts = collect_artifacts(&self.lister, &self.root, modules, &configurations)?;
        let declaration = render_maven_install(&artifacts);

        let output_path = self.root.join(&self.output_file_name);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&output_path)?;
        file.write_all(declaration.as_bytes())?;
        info!("Wrote maven_install to {}", output_path.display());

        Ok(output_path)
    }
}

impl<L, Q: MavenJarQuery> Mavengen<L, Q> {
    /// Renders a `maven_install` declaration replacing the workspace's `maven_jar` rules.
    ///
    /// `root` is the Bazel workspace here. Rules loaded from other repositories count too.
    pub fn migrate_maven_jars(&self) -> Result<String, GenerateError> {
        let artifacts = collect_maven_jars(&self.query, &self.root)?;
        Ok(render_maven_install(&artifacts))
    }
}
