use log::trace;
use regex_lite::Regex;

use crate::model::ArtifactCoordinate;

/// One tree-drawing character, the `--- ` marker, then a `group:artifact:version`.
const ARTIFACT_LINE: &str = r"^.---\s.+:.+:.+";

/// Nested tree levels are drawn with `|`, `+` or `\` after some indentation.
const CONTINUATION_LINE: &str = r"\s[|+\\]";

struct LineFilter {
    artifact: Regex,
    continuation: Regex,
}

impl LineFilter {
    fn new() -> LineFilter {
        LineFilter {
            artifact: Regex::new(ARTIFACT_LINE).unwrap(),
            continuation: Regex::new(CONTINUATION_LINE).unwrap(),
        }
    }

    fn accepts(&self, line: &str) -> bool {
        self.artifact.is_match(line) && !self.continuation.is_match(line)
    }
}

/// Picks the direct dependencies out of `gradle dependencies --console plain` output.
///
/// Each line is judged on its own: a nested line is dropped even when its parent
/// was kept. The coordinate is the second whitespace separated field, so version
/// conflict suffixes such as `-> 1.1 (*)` are ignored.
pub fn extract_artifacts<S: AsRef<str>>(lines: &[S]) -> Vec<ArtifactCoordinate> {
    let filter = LineFilter::new();
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| filter.accepts(line))
        .filter_map(|line| {
            let coordinate = line.split_whitespace().nth(1)?;
            trace!("Found artifact {} in `{}`", coordinate, line);
            Some(ArtifactCoordinate::new(coordinate))
        })
        .collect()
}

/// Whether `properties` output mentions the given plugin anywhere.
pub fn has_plugin<S: AsRef<str>>(lines: &[S], plugin: &str) -> bool {
    lines.iter().any(|line| line.as_ref().contains(plugin))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    use pretty_assertions::assert_eq;

    fn extract(lines: &[&str]) -> Vec<String> {
        extract_artifacts(lines)
            .into_iter()
            .map(|coordinate| coordinate.to_string())
            .collect()
    }

    #[test]
    fn keeps_top_level_artifacts_only() {
        let lines = [
            "+--- com.example:lib:1.0",
            "|    +--- com.example:sub:2.0",
            "\\--- com.example:last:3.0",
        ];
        assert_eq!(extract(&lines), vec!["com.example:lib:1.0", "com.example:last:3.0"]);
    }

    #[test]
    fn nested_line_is_dropped_on_its_own() {
        // Same coordinate, different depth: only the top-level line qualifies
        let lines = [
            "|    \\--- com.example:sub:2.0",
            "+--- com.example:sub:2.0",
            "     \\--- com.example:other:1.0",
        ];
        assert_eq!(extract(&lines), vec!["com.example:sub:2.0"]);
    }

    #[test]
    fn takes_second_field_of_conflict_lines() {
        let lines = [
            "+--- androidx.core:core:1.2.0 -> 1.3.1 (*)",
            "\\--- org.jetbrains.kotlin:kotlin-stdlib:1.3.72 (c)",
        ];
        assert_eq!(
            extract(&lines),
            vec!["androidx.core:core:1.2.0", "org.jetbrains.kotlin:kotlin-stdlib:1.3.72"]
        );
    }

    #[test]
    fn ignores_headers_projects_and_short_coordinates() {
        let lines = [
            "",
            "implementation - Implementation only dependencies for 'main' sources. (n)",
            "No dependencies",
            "+--- project :core",
            "+--- com.google.guava:guava",
            "--- com.example:lib:1.0",
            "BUILD SUCCESSFUL in 1s",
        ];
        assert_eq!(extract(&lines), Vec::<String>::new());
    }

    #[test]
    fn extract_from_captured_output() {
        let path = project_root::get_project_root()
            .unwrap()
            .join(Path::new("resources/dependencies.txt"));
        let output = std::fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            extract(&lines),
            vec![
                "androidx.appcompat:appcompat:1.1.0",
                "androidx.constraintlayout:constraintlayout:1.1.3",
                "com.google.dagger:dagger:2.28",
                "androidx.appcompat:appcompat:1.1.0",
                "org.jetbrains.kotlin:kotlin-stdlib-jdk7:1.3.72",
            ]
        );
    }

    #[test]
    fn finds_plugin_in_properties() {
        let lines = [
            "name: app",
            "plugins: [org.gradle.api.plugins.HelpTasksPlugin@1a2b, com.android.build.gradle.AppPlugin@3c4d]",
        ];
        assert!(has_plugin(&lines, "com.android.build.gradle"));
        assert!(!has_plugin(&lines, "org.jetbrains.kotlin.android"));
        assert!(!has_plugin(&Vec::<String>::new(), "com.android.build.gradle"));
    }
}
