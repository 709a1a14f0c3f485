use std::{collections::HashMap, path::PathBuf};

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Default)]
pub struct MavengenConfig {
    pub gradle_wrapper: Option<PathBuf>,
    pub bazel_binary: Option<PathBuf>,
    pub required_plugin: Option<String>,
    pub output_file: Option<PathBuf>,
}

impl MavengenConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            gradle_wrapper: raw_config.gradle.wrapper,
            bazel_binary: raw_config.bazel.binary,
            required_plugin: raw_config.gradle.plugin,
            output_file: raw_config.output.file,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    gradle: GradleConfig,
    #[serde(default)]
    bazel: BazelConfig,
    #[serde(default)]
    output: OutputConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct GradleConfig {
    wrapper: Option<PathBuf>,
    plugin: Option<String>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct BazelConfig {
    binary: Option<PathBuf>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct OutputConfig {
    file: Option<PathBuf>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("MAVENGEN")
                    .separator("_")
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn load_empty() {
        let env = HashMap::from([]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                gradle: GradleConfig {
                    wrapper: None,
                    plugin: None
                },
                bazel: BazelConfig { binary: None },
                output: OutputConfig { file: None }
            }
        )
    }

    #[test]
    fn load_environment() {
        let env = HashMap::from([
            ("MAVENGEN_GRADLE_WRAPPER".to_owned(), "tools/gradlew".to_owned()),
            (
                "MAVENGEN_GRADLE_PLUGIN".to_owned(),
                "org.jetbrains.kotlin.jvm".to_owned(),
            ),
            ("MAVENGEN_BAZEL_BINARY".to_owned(), "/usr/bin/bazelisk".to_owned()),
            ("MAVENGEN_OUTPUT_FILE".to_owned(), "deps.bzl".to_owned()),
        ]);
        let config = RawConfig::load(Some(env)).unwrap();
        assert_eq!(
            config,
            RawConfig {
                gradle: GradleConfig {
                    wrapper: Some("tools/gradlew".into()),
                    plugin: Some("org.jetbrains.kotlin.jvm".to_owned())
                },
                bazel: BazelConfig {
                    binary: Some("/usr/bin/bazelisk".into())
                },
                output: OutputConfig {
                    file: Some("deps.bzl".into())
                }
            }
        )
    }
}
