mod parser;
mod query;

use std::path::Path;

use crate::process::CommandError;

pub use parser::{attribute_values, extract_maven_jar_artifacts};
pub use query::BazelQuery;

/// Read-only view of the `maven_jar` rules a Bazel workspace declares.
pub trait MavenJarQuery {
    /// Lines printed by `bazel query 'kind(maven_jar, //external:all)' --output=build`.
    fn query_maven_jars(&self, workspace: &Path) -> Result<Vec<String>, CommandError>;
}

impl<T: MavenJarQuery + ?Sized> MavenJarQuery for &T {
    fn query_maven_jars(&self, workspace: &Path) -> Result<Vec<String>, CommandError> {
        (**self).query_maven_jars(workspace)
    }
}
