//! Directory settings loaded via OrthoConfig.
//!
//! Values come from `USER_DIRECTORY_*` environment variables, configuration
//! files, and command-line flags, in OrthoConfig's usual precedence.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::generator::{DEFAULT_SAMPLE_COUNT, SampleSpec};

fn default_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("users.json")
}

/// Where the startup collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Read records from a JSON dataset file.
    Dataset(PathBuf),
    /// Generate deterministic sample records.
    Sample(SampleSpec),
}

/// Configuration for building and presenting a directory.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct DirectorySettings {
    /// Optional dataset path override.
    pub dataset_path: Option<PathBuf>,
    /// Generate sample users from this seed instead of reading a dataset.
    pub sample_seed: Option<u64>,
    /// Number of sample users to generate.
    pub sample_count: Option<usize>,
    /// Initial search term.
    pub search: Option<String>,
}

impl DirectorySettings {
    /// Resolves the data source; a sample seed takes precedence over a path.
    #[must_use]
    pub fn data_source(&self) -> DataSource {
        self.sample_seed.map_or_else(
            || {
                DataSource::Dataset(
                    self.dataset_path
                        .clone()
                        .unwrap_or_else(default_dataset_path),
                )
            },
            |seed| {
                DataSource::Sample(SampleSpec::new(
                    seed,
                    self.sample_count.unwrap_or(DEFAULT_SAMPLE_COUNT),
                ))
            },
        )
    }

    /// Returns the configured search term, empty when unset.
    #[must_use]
    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }
}
