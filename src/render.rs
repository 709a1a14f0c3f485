use std::fmt::{Display, Formatter};

use crate::model::{ArtifactCollection, ArtifactEntry};

pub const MAVEN_INSTALL_PREFIX: &str = r#"load("@rules_jvm_external//:defs.bzl", "maven_install")
maven_install(
    name = "maven",
    artifacts = [
"#;

pub const MAVEN_INSTALL_SUFFIX: &str = "    ],\n    repositories = [\n";

pub const MAVEN_INSTALL_END: &str = "    ],\n)\n";

/// Repositories every generated declaration resolves against, in lookup order.
pub const REPOSITORIES: [&str; 3] = [
    "https://maven.google.com",
    "https://jcenter.bintray.com",
    "https://repo1.maven.org/maven2",
];

const ENTRY_INDENT: &str = "        ";

/// The `maven_install` declaration for an already deduplicated collection.
pub struct MavenInstall<'a>(pub &'a ArtifactCollection);

impl Display for MavenInstall<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(MAVEN_INSTALL_PREFIX)?;
        for entry in self.0.entries() {
            match entry {
                ArtifactEntry::Comment(selection) => writeln!(f, "{ENTRY_INDENT}# {selection}")?,
                ArtifactEntry::Artifact(coordinate) => {
                    writeln!(f, "{ENTRY_INDENT}\"{coordinate}\",")?
                }
            }
        }
        f.write_str(MAVEN_INSTALL_SUFFIX)?;
        for repository in REPOSITORIES {
            writeln!(f, "{ENTRY_INDENT}\"{repository}\",")?;
        }
        f.write_str(MAVEN_INSTALL_END)
    }
}

pub fn render_maven_install(artifacts: &ArtifactCollection) -> String {
    MavenInstall(artifacts).to_string()
}
