use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::ConvertError;

pub const DEFAULT_CHART_FILE: &str = "Chart.yaml";

/// Set `version` and `appVersion` in the chart file, leaving every other key
/// (and key order) as it was.
pub fn update_chart(path: &Path, version: &str) -> Result<(), ConvertError> {
    let content = fs::read_to_string(path).map_err(|source| ConvertError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut chart: Value = serde_yaml::from_str(&content).map_err(|source| {
        ConvertError::ChartParse {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let mapping = chart
        .as_mapping_mut()
        .ok_or_else(|| ConvertError::ChartShape {
            path: path.to_path_buf(),
        })?;
    for key in ["version", "appVersion"] {
        mapping.insert(
            Value::String(key.to_string()),
            Value::String(version.to_string()),
        );
    }

    let content = serde_yaml::to_string(&chart).map_err(|source| ConvertError::ChartSerialize {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(|source| ConvertError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), version, "Updated chart metadata");
    Ok(())
}
