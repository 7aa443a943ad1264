//! Read-only directory listing.
//!
//! Loads [`DirectorySettings`], builds a directory from the configured data
//! source, applies the configured search term, and writes one line per card.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use user_directory::config::{DataSource, DirectorySettings};
use user_directory::{
    DatasetError, Directory, GenerationError, UserCard, generate_sample_users, load_records,
};

#[derive(Debug, Error)]
enum ListingError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("failed to write listing: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ListingError> {
    let settings =
        DirectorySettings::load().map_err(|err| ListingError::Config(err.to_string()))?;

    let records = match settings.data_source() {
        DataSource::Dataset(path) => {
            info!(path = %path.display(), "loading dataset");
            load_records(&path)?
        }
        DataSource::Sample(spec) => {
            info!(seed = spec.seed(), count = spec.count(), "generating sample users");
            generate_sample_users(&spec)?
        }
    };

    let mut directory = Directory::new(records)?;
    directory.set_search_term(settings.search());

    let mut out = io::stdout().lock();
    for card in directory.cards() {
        writeln!(out, "{}", card_line(&card))?;
    }
    Ok(())
}

fn card_line(card: &UserCard) -> String {
    format!(
        "#{} {} | {} years | {} | {} | {} | {}",
        card.id, card.full_name, card.age, card.gender, card.country, card.email, card.description
    )
}
