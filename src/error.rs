use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove file: {path}")]
    FileRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory: {path}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk directory: {path}")]
    DirWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("download failed with status {status}: {url}")]
    FetchStatus { url: String, status: u16 },

    #[error("failed to parse bundle: {0}")]
    BundleParse(#[source] serde_yaml::Error),

    #[error("document {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("ClusterRoleBinding document {index} has no namespaced subject")]
    MissingSubject { index: usize },

    #[error("failed to serialize document {index}")]
    DocumentSerialize {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse chart file: {path}")]
    ChartParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize chart file: {path}")]
    ChartSerialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("chart file is not a YAML mapping: {path}")]
    ChartShape { path: PathBuf },
}
