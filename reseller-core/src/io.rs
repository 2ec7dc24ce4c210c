use crate::error::LoadError;
use crate::models::RawReseller;
use crate::schema::reseller_schema;
use crate::schema_validation::validate_against_schema;
use crate::validation::{dataset_warnings, validate_resellers};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Dataset bundled with the crate, used when no file is given
pub const SAMPLE_RESELLERS: &str = include_str!("../data/resellers.json");

/// Load and validate resellers from a JSON file
pub fn load_resellers<P: AsRef<Path>>(path: P) -> Result<Vec<RawReseller>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "reseller file read");
    parse_resellers(&contents)
}

/// Parse and validate a reseller JSON document
/// The schema check runs first so structural problems are reported with
/// their location rather than as a deserialization error
pub fn parse_resellers(json: &str) -> Result<Vec<RawReseller>, LoadError> {
    let document: Value = serde_json::from_str(json)?;
    validate_against_schema(&reseller_schema(), &document).map_err(LoadError::Schema)?;

    let resellers: Vec<RawReseller> = serde_json::from_value(document)?;
    validate_resellers(&resellers).map_err(LoadError::Validation)?;
    for warning in dataset_warnings(&resellers) {
        warn!("{}", warning);
    }

    Ok(resellers)
}

/// The bundled sample dataset
pub fn sample_resellers() -> Result<Vec<RawReseller>, LoadError> {
    parse_resellers(SAMPLE_RESELLERS)
}
