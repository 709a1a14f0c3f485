use log::trace;

use crate::model::ArtifactCoordinate;

/// Values of a string attribute in `--output=build` rule listings, in listing order.
///
/// Only `  <attribute> = "<value>",` lines count: `artifact_sha1` is not `artifact`.
pub fn attribute_values<S: AsRef<str>>(lines: &[S], attribute: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| {
            line.split_once('=')
                .is_some_and(|(name, _)| name.trim() == attribute)
        })
        .filter_map(|line| {
            let value = line.split('"').nth(1)?;
            trace!("Found {} {} in `{}`", attribute, value, line);
            Some(value.to_owned())
        })
        .collect()
}

/// Coordinates of every `maven_jar` rule, sorted.
pub fn extract_maven_jar_artifacts<S: AsRef<str>>(lines: &[S]) -> Vec<ArtifactCoordinate> {
    let mut artifacts: Vec<ArtifactCoordinate> = attribute_values(lines, "artifact")
        .into_iter()
        .map(ArtifactCoordinate::new)
        .collect();
    artifacts.sort();
    artifacts
}
