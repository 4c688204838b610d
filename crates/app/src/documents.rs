//! Loading of the JSON documents the planner persists.

use std::fs;

use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

pub fn load<T: DeserializeOwned>(path: &str) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| AppError::Document {
        path: path.to_string(),
        source,
    })?;
    let document = serde_json::from_str(&content)?;
    tracing::debug!(path, "loaded document");
    Ok(document)
}
