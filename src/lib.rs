pub mod bazel;
pub mod cache_path;
pub mod cli;
pub mod config;
pub mod generate;
pub mod gradle;
pub mod model;
pub mod process;
pub mod render;

mod api;

pub use api::{Mavengen, MavengenBuilder};
