//! Deal file loading

use super::types::{BatchError, DealSpec};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DealFile {
    #[serde(default)]
    deal: Vec<DealSpec>,
}

/// Parse deals from TOML (`[[deal]]` tables)
pub fn deals_from_toml(content: &str) -> Result<Vec<DealSpec>, BatchError> {
    let file: DealFile = toml::from_str(content).map_err(|e| BatchError::Parse(e.to_string()))?;
    Ok(file.deal)
}

/// Parse deals from a JSON array
pub fn deals_from_json(content: &str) -> Result<Vec<DealSpec>, BatchError> {
    serde_json::from_str(content).map_err(|e| BatchError::Parse(e.to_string()))
}

/// Load deals, choosing the parser by file extension
pub fn load_deals(path: impl AsRef<Path>) -> Result<Vec<DealSpec>, BatchError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let deals = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => deals_from_toml(&content)?,
        Some("json") => deals_from_json(&content)?,
        _ => return Err(BatchError::UnsupportedFormat(path.to_path_buf())),
    };

    tracing::info!(path = %path.display(), deals = deals.len(), "Loaded deals");
    Ok(deals)
}
