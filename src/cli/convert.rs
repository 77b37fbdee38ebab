use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::fetch;
use crate::model::Bundle;
use crate::store::{self, OutputWriter};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub written: usize,
    pub skipped: usize,
    pub cleaned: usize,
    pub collisions: usize,
}

pub async fn run(cli: &Cli) -> Result<ConvertSummary> {
    let url = fetch::bundle_url(&cli.bundle_url, &cli.version_tag);
    tracing::info!(version = %cli.version_tag, %url, "Getting bundle");
    let body = fetch::fetch_bundle(&url, Duration::from_secs(cli.timeout))
        .await
        .with_context(|| format!("failed to fetch bundle for {}", cli.version_tag))?;

    let bundle = Bundle::parse(&body).context("failed to parse bundle")?;
    let skipped = bundle.empty_documents();
    tracing::debug!(documents = bundle.document_count(), skipped, "Parsed bundle");
    let mut resources = bundle
        .into_resources()
        .context("bundle contains a malformed document")?;

    tracing::info!("Cleaning old files");
    let mut cleaned = 0;
    for dir in [&cli.template_dir, &cli.crds_dir] {
        cleaned += store::clean(dir)
            .with_context(|| format!("failed to clean {}", dir.display()))?;
    }

    tracing::info!(count = resources.len(), "Iterating over documents");
    let mut writer = OutputWriter::new(&cli.template_dir, &cli.crds_dir);
    for resource in &mut resources {
        resource.templatize_namespace()?;
        writer
            .write(resource)
            .with_context(|| format!("failed to write {} document", resource.kind()))?;
    }

    store::update_chart(&cli.chart_file, &cli.version_tag)
        .with_context(|| format!("failed to update {}", cli.chart_file.display()))?;

    let summary = ConvertSummary {
        written: writer.files(),
        skipped,
        cleaned,
        collisions: writer.collisions(),
    };

    println!(
        "Converted {} bundle: {} files written, {} empty documents skipped, {} stale files removed",
        cli.version_tag, summary.written, summary.skipped, summary.cleaned
    );
    if summary.collisions > 0 {
        println!(
            "warning: {} documents overwrote an earlier document with the same file name",
            summary.collisions
        );
    }
    Ok(summary)
}
