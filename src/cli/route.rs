//! CLI route: request structs and run context. Dispatches parsed
//! commands to the library; owns no traversal or diff logic itself.

use crate::cli::output;
use crate::cli::parse::Commands;
use crate::diff;
use crate::error::CommandError;
use crate::manifest::builder::ManifestBuilder;
use crate::skip::SkipSet;
use crate::store;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs for one manifest build, assembled from parsed flags.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub root: PathBuf,
    pub output: PathBuf,
    pub skip_file: Option<PathBuf>,
    pub verbose: bool,
}

/// Inputs for one manifest comparison, assembled from parsed flags.
#[derive(Debug, Clone)]
pub struct CompareRequest {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub output: PathBuf,
}

/// Runtime context for CLI execution.
pub struct RunContext {
    verbose: bool,
}

impl RunContext {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Execute a CLI command via the route table.
    pub fn execute(&self, command: &Commands) -> Result<String, CommandError> {
        match command {
            Commands::Generate {
                path,
                output,
                skip_file,
            } => self.generate(&GenerateRequest {
                root: path.clone(),
                output: output.clone(),
                skip_file: skip_file.clone(),
                verbose: self.verbose,
            }),
            Commands::Compare {
                source,
                dest,
                output,
            } => self.compare(&CompareRequest {
                source: source.clone(),
                dest: dest.clone(),
                output: output.clone(),
            }),
        }
    }

    /// Build a manifest of the requested root and persist it.
    pub fn generate(&self, request: &GenerateRequest) -> Result<String, CommandError> {
        let skip = match &request.skip_file {
            Some(path) => {
                let skip = SkipSet::from_file(path)?;
                debug!(skip_names = skip.len(), "Loaded skip set");
                skip
            }
            None => SkipSet::new(),
        };

        let manifest = ManifestBuilder::new(request.root.clone())
            .with_skip_set(skip)
            .with_verbose(request.verbose)
            .build()?;

        store::write_manifest(&manifest, &request.output)?;
        info!(path = %request.output.display(), "Manifest written");

        Ok(output::format_generate_summary(&manifest, &request.output))
    }

    /// Load two manifests, diff them, and persist the report.
    pub fn compare(&self, request: &CompareRequest) -> Result<String, CommandError> {
        let source = store::read_manifest(&request.source)?;
        let dest = store::read_manifest(&request.dest)?;

        let report = diff::diff(&source, &dest)?;
        if self.verbose {
            for pair in &report.modified {
                info!(source = %pair.source, dest = %pair.dest, "modified");
            }
            for entry in &report.source_only {
                info!(entry = %entry, "source only");
            }
            for entry in &report.dest_only {
                info!(entry = %entry, "dest only");
            }
        }

        store::write_report(&report, &request.output)?;
        info!(path = %request.output.display(), "Report written");

        Ok(output::format_compare_summary(&report, &request.output))
    }
}
