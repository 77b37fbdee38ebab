pub mod convert;

use std::path::PathBuf;

use clap::Parser;

use crate::fetch::{DEFAULT_BUNDLE_URL, DEFAULT_TIMEOUT_SECS};
use crate::store::chart::DEFAULT_CHART_FILE;

pub const DEFAULT_VERSION: &str = "v0.60.1";

#[derive(Debug, Parser)]
#[command(
    name = "bundle-to-chart",
    about = "Split an operator install bundle into Helm chart templates and CRDs",
    version
)]
pub struct Cli {
    /// Operator release tag to fetch
    #[arg(long = "version-tag", env = "VERSION", default_value = DEFAULT_VERSION)]
    pub version_tag: String,

    /// Output directory for non-CRD resources
    #[arg(long, env = "TEMPLATE_DIR", default_value = "templates")]
    pub template_dir: PathBuf,

    /// Output directory for CustomResourceDefinitions
    #[arg(long, env = "CRDS_DIR", default_value = "crds")]
    pub crds_dir: PathBuf,

    /// Chart metadata file to update
    #[arg(long, env = "CHART_FILE", default_value = DEFAULT_CHART_FILE)]
    pub chart_file: PathBuf,

    /// Bundle URL; `{version}` is replaced with the release tag
    #[arg(long, env = "BUNDLE_URL", default_value = DEFAULT_BUNDLE_URL)]
    pub bundle_url: String,

    /// Download timeout in seconds
    #[arg(long, env = "FETCH_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
