// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// Failure to load the metadata document.
///
/// Every variant is fatal for the view; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The metadata file could not be read.
    #[error("failed to read metadata from {}: {source}", path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The metadata request failed or returned a non-success status.
    #[cfg(feature = "http")]
    #[error("metadata request to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: Box<ureq::Error>,
    },
    /// The document is not valid metadata JSON.
    #[error("metadata is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to derive a view.
///
/// Stale selections are never errors; only a missing snapshot or a snapshot
/// without a root drawing prevents derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    /// No metadata has been loaded.
    #[error("project metadata is not available")]
    NoMetadata,
    /// The metadata has no drawing without a parent.
    #[error("project metadata has no root drawing")]
    NoRootDrawing,
}
