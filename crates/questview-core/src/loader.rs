//! Loading quest definitions and progress snapshots from disk.
//!
//! `.json` and `.ron` files are accepted. Loading only parses; whether the
//! result can be displayed is decided by [`Validity`](crate::definition::Validity).
//!
//! RON is read with implicit `Some`, so optional fields such as `boss`,
//! `rage`, and the colours can be written without a `Some(...)` wrapper.

use crate::definition::QuestDefinition;
use crate::progress::QuestProgressSnapshot;
use questview_common::{LoadError, LoadResult};
use ron::extensions::Extensions;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON, as served by the content API
    Json,
    /// RON, for hand-written fixtures
    Ron,
}

impl InputFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "ron" => Some(Self::Ron),
            _ => None,
        }
    }
}

fn parse<T: DeserializeOwned>(contents: &str, format: InputFormat) -> LoadResult<T> {
    Ok(match format {
        InputFormat::Json => serde_json::from_str(contents)?,
        InputFormat::Ron => ron::Options::default()
            .with_default_extension(Extensions::IMPLICIT_SOME)
            .from_str(contents)?,
    })
}

fn load<T: DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let format =
        InputFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    debug!("Reading {:?} from {}", format, path.display());

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, format)
}

/// Parses a quest definition from JSON.
pub fn definition_from_json(json: &str) -> LoadResult<QuestDefinition> {
    parse(json, InputFormat::Json)
}

/// Parses a progress snapshot from JSON.
pub fn progress_from_json(json: &str) -> LoadResult<QuestProgressSnapshot> {
    parse(json, InputFormat::Json)
}

/// Loads a quest definition from a `.json` or `.ron` file.
pub fn load_definition(path: impl AsRef<Path>) -> LoadResult<QuestDefinition> {
    let path = path.as_ref();
    let definition: QuestDefinition = load(path)?;
    info!("Loaded quest definition {} from {}", definition.key, path.display());
    Ok(definition)
}

/// Loads a progress snapshot from a `.json` or `.ron` file.
pub fn load_progress(path: impl AsRef<Path>) -> LoadResult<QuestProgressSnapshot> {
    let path = path.as_ref();
    let progress = load(path)?;
    info!("Loaded quest progress from {}", path.display());
    Ok(progress)
}
