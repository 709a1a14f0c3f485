use std::{
    collections::HashSet,
    fmt::{Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Unknown configuration `{0}`, expected one of: {choices}",
        choices = Configuration::names().join(", ")
    )]
    InvalidConfiguration(String),
}

/// A `group:artifact:version` string as printed by the build tool.
///
/// The coordinate is never split into its parts, it is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtifactCoordinate(String);

impl ArtifactCoordinate {
    pub fn new(value: impl Into<String>) -> ArtifactCoordinate {
        ArtifactCoordinate(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gradle dependency scopes that can be selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Configuration {
    #[value(name = "api")]
    Api,
    #[value(name = "implementation")]
    Implementation,
    #[value(name = "testImplementation")]
    TestImplementation,
    #[value(name = "androidTestImplementation")]
    AndroidTestImplementation,
    #[value(name = "kapt")]
    Kapt,
    #[value(name = "annotationProcessor")]
    AnnotationProcessor,
}

impl Configuration {
    pub const ALL: [Configuration; 6] = [
        Configuration::Api,
        Configuration::Implementation,
        Configuration::TestImplementation,
        Configuration::AndroidTestImplementation,
        Configuration::Kapt,
        Configuration::AnnotationProcessor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Configuration::Api => "api",
            Configuration::Implementation => "implementation",
            Configuration::TestImplementation => "testImplementation",
            Configuration::AndroidTestImplementation => "androidTestImplementation",
            Configuration::Kapt => "kapt",
            Configuration::AnnotationProcessor => "annotationProcessor",
        }
    }

    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Configuration::as_str).collect()
    }

    /// Parses every name, failing on the first one that is not a known configuration.
    pub fn parse_all<S: AsRef<str>>(names: &[S]) -> Result<Vec<Configuration>, ParseError> {
        names.iter().map(|name| name.as_ref().parse()).collect()
    }
}

impl FromStr for Configuration {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|configuration| configuration.as_str() == value)
            .ok_or_else(|| ParseError::InvalidConfiguration(value.to_owned()))
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (module, configuration) pair the build tool is asked about.
///
/// A missing module stands for the root project, a missing configuration for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub module: Option<String>,
    pub configuration: Option<Configuration>,
}

impl Selection {
    pub fn new(module: Option<String>, configuration: Option<Configuration>) -> Selection {
        Selection {
            module,
            configuration,
        }
    }

    /// Every selection for the cross product of modules and configurations,
    /// modules in the outer loop.
    pub fn cross_product(modules: &[String], configurations: &[Configuration]) -> Vec<Selection> {
        let modules: Vec<Option<String>> = if modules.is_empty() {
            vec![None]
        } else {
            modules.iter().cloned().map(Some).collect()
        };
        let configurations: Vec<Option<Configuration>> = if configurations.is_empty() {
            vec![None]
        } else {
            configurations.iter().copied().map(Some).collect()
        };

        modules
            .into_iter()
            .flat_map(|module| {
                configurations
                    .iter()
                    .map(move |configuration| Selection::new(module.clone(), *configuration))
            })
            .collect()
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(self.module.as_deref().unwrap_or("root"))?;
        if let Some(configuration) = self.configuration {
            write!(f, ":{configuration}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactEntry {
    /// Marks which selection produced the artifacts that follow it.
    Comment(Selection),
    Artifact(ArtifactCoordinate),
}

/// Artifacts in the order they were reported, interleaved with selection markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactCollection {
    entries: Vec<ArtifactEntry>,
}

impl ArtifactCollection {
    pub fn new() -> ArtifactCollection {
        ArtifactCollection::default()
    }

    pub fn push_comment(&mut self, selection: Selection) {
        self.entries.push(ArtifactEntry::Comment(selection));
    }

    pub fn extend_artifacts<I>(&mut self, artifacts: I)
    where
        I: IntoIterator<Item = ArtifactCoordinate>,
    {
        self.entries
            .extend(artifacts.into_iter().map(ArtifactEntry::Artifact));
    }

    pub fn entries(&self) -> &[ArtifactEntry] {
        &self.entries
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &ArtifactCoordinate> {
        self.entries.iter().filter_map(|entry| match entry {
            ArtifactEntry::Artifact(coordinate) => Some(coordinate),
            ArtifactEntry::Comment(_) => None,
        })
    }

    /// Keeps the first occurrence of every coordinate. Comments are always kept.
    pub fn deduplicated(self) -> ArtifactCollection {
        let mut seen: HashSet<ArtifactCoordinate> = HashSet::new();
        let entries = self
            .entries
            .into_iter()
            .filter(|entry| match entry {
                ArtifactEntry::Comment(_) => true,
                ArtifactEntry::Artifact(coordinate) => seen.insert(coordinate.clone()),
            })
            .collect();
        ArtifactCollection { entries }
    }
}
