// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use understory_drawing_model::Metadata;

use crate::LoadError;

/// Where the metadata document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetadataSource {
    /// A file on the local filesystem.
    Path(PathBuf),
    /// An HTTP(S) URL, fetched with a single blocking GET.
    #[cfg(feature = "http")]
    Url(String),
    /// A document already held in memory.
    Inline(String),
}

impl MetadataSource {
    /// Interprets a user-supplied location.
    ///
    /// `http://` and `https://` locations become [`MetadataSource::Url`] when
    /// the `http` feature is enabled; everything else is a path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        Self::url(location).unwrap_or_else(|| Self::Path(PathBuf::from(location)))
    }

    #[cfg(feature = "http")]
    fn url(location: &str) -> Option<Self> {
        (location.starts_with("http://") || location.starts_with("https://"))
            .then(|| Self::Url(location.to_owned()))
    }

    #[cfg(not(feature = "http"))]
    fn url(_location: &str) -> Option<Self> {
        None
    }

    fn describe(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            #[cfg(feature = "http")]
            Self::Url(url) => url.clone(),
            Self::Inline(_) => "<inline>".to_owned(),
        }
    }
}

/// Loads and parses the metadata document.
///
/// There is exactly one attempt; callers decide whether to try again.
///
/// # Errors
///
/// Returns [`LoadError`] when the document cannot be read or fetched, or
/// when it is not a metadata object.
pub fn load_metadata(source: &MetadataSource) -> Result<Metadata, LoadError> {
    let result = match source {
        MetadataSource::Path(path) => std::fs::read(path)
            .map_err(|source| LoadError::Read {
                path: path.clone(),
                source,
            })
            .and_then(|bytes| Metadata::from_json_slice(&bytes).map_err(LoadError::from)),
        #[cfg(feature = "http")]
        MetadataSource::Url(url) => {
            fetch(url).and_then(|body| Metadata::from_json_str(&body).map_err(LoadError::from))
        }
        MetadataSource::Inline(json) => Metadata::from_json_str(json).map_err(LoadError::from),
    };
    match &result {
        Ok(metadata) => tracing::info!(
            source = %source.describe(),
            drawings = metadata.drawings.len(),
            "loaded metadata"
        ),
        Err(err) => tracing::warn!(source = %source.describe(), %err, "failed to load metadata"),
    }
    result
}

#[cfg(feature = "http")]
fn fetch(url: &str) -> Result<String, LoadError> {
    let request_error = |source| LoadError::Request {
        url: url.to_owned(),
        source: Box::new(source),
    };
    let mut response = ureq::get(url).call().map_err(request_error)?;
    response.body_mut().read_to_string().map_err(request_error)
}

/// Progress of the one-time metadata load.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// The load has not finished.
    #[default]
    Loading,
    /// The metadata snapshot is available.
    Ready(Metadata),
    /// The load failed; the message is shown in place of the view.
    Failed(String),
}

impl LoadState {
    /// Converts the outcome of [`load_metadata`] into a state.
    #[must_use]
    pub fn from_result(result: Result<Metadata, LoadError>) -> Self {
        match result {
            Ok(metadata) => Self::Ready(metadata),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    /// Returns the metadata once it is loaded.
    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        match self {
            Self::Ready(metadata) => Some(metadata),
            _ => None,
        }
    }

    /// Returns the failure message, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Returns `true` while the load is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
