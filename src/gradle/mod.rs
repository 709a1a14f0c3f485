mod parser;
mod wrapper;

use std::path::Path;

use crate::{model::Configuration, process::CommandError};

pub use parser::{extract_artifacts, has_plugin};
pub use wrapper::GradleWrapper;

/// Read-only view of a Gradle build, answered with the raw console lines.
pub trait DependencyLister {
    /// Lines printed by `[<module>:]dependencies`, optionally narrowed to one configuration.
    fn list_dependencies(
        &self,
        directory: &Path,
        module: Option<&str>,
        configuration: Option<Configuration>,
    ) -> Result<Vec<String>, CommandError>;

    /// Lines printed by `[<module>:]properties`.
    fn list_properties(
        &self,
        directory: &Path,
        module: Option<&str>,
    ) -> Result<Vec<String>, CommandError>;
}

impl<T: DependencyLister + ?Sized> DependencyLister for &T {
    fn list_dependencies(
        &self,
        directory: &Path,
        module: Option<&str>,
        configuration: Option<Configuration>,
    ) -> Result<Vec<String>, CommandError> {
        (**self).list_dependencies(directory, module, configuration)
    }

    fn list_properties(
        &self,
        directory: &Path,
        module: Option<&str>,
    ) -> Result<Vec<String>, CommandError> {
        (**self).list_properties(directory, module)
    }
}

/// Gradle task path, `dependencies` for the root project and `app:dependencies` for a module.
pub(crate) fn task_path(module: Option<&str>, task: &str) -> String {
    match module {
        Some(module) => format!("{module}:{task}"),
        None => task.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn root_and_module_task_paths() {
        assert_eq!(task_path(None, "dependencies"), "dependencies");
        assert_eq!(task_path(Some("app"), "properties"), "app:properties");
        assert_eq!(
            task_path(Some(":feature:login"), "dependencies"),
            ":feature:login:dependencies"
        );
    }
}
