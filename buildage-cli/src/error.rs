//! Error types emitted by the buildage CLI.
//!
//! Keep this error type reasonably small, as most CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use buildage_data::export::ExportError;
use buildage_data::overpass::{ClientBuildError, FetchError};
use thiserror::Error;

/// Errors emitted by the buildage CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A merged option holds an unusable value.
    #[error("invalid {field} (set --{field} or {env}): {reason}")]
    InvalidArgument {
        field: &'static str,
        env: &'static str,
        reason: &'static str,
    },
    /// Constructing the Overpass client failed.
    #[error("failed to build Overpass client for {endpoint:?}: {source}")]
    BuildClient {
        endpoint: String,
        #[source]
        source: ClientBuildError,
    },
    /// Fetching a district failed; nothing is exported.
    #[error("failed to fetch buildings for {district}: {source}")]
    Fetch {
        district: String,
        #[source]
        source: FetchError,
    },
    /// No district produced any features.
    #[error("no building footprints were fetched; adjust bounding boxes or retry later")]
    EmptyResult,
    /// Writing an export file failed.
    #[error(transparent)]
    Export(#[from] ExportError),
}
