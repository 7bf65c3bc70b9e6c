// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::Serialize;
use understory_drawing_model::{Drawing, Revision};

use crate::ExplorerView;

/// Returns the spaces whose name contains `query`, ignoring case and
/// surrounding whitespace.
///
/// An empty query matches every space. Input order is kept.
#[must_use]
pub fn filter_spaces<'a>(spaces: &[&'a Drawing], query: &str) -> Vec<&'a Drawing> {
    let query = query.trim().to_lowercase();
    spaces
        .iter()
        .copied()
        .filter(|space| query.is_empty() || space.name.to_lowercase().contains(&query))
        .collect()
}

/// Where the user is, and what the selected revision is.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSummary<'a> {
    /// Path from the root drawing to the revision, e.g.
    /// `Site > Level 1 > Structural > Region A > REV2`.
    pub breadcrumb: String,
    /// The selected revision.
    pub revision: Option<&'a Revision>,
    /// Version of the latest revision in the pool.
    pub latest_version: Option<&'a str>,
    /// `true` if the selected revision is the latest one.
    pub is_latest: bool,
}

impl<'a> ContextSummary<'a> {
    /// Summarizes `view`.
    #[must_use]
    pub fn from_view(view: &ExplorerView<'a>) -> Self {
        let mut breadcrumb = format!(
            "{} > {} > {} > ",
            view.root.name,
            view.space.map_or("-", |s| s.name.as_str()),
            view.discipline_name.unwrap_or("-"),
        );
        if let Some(region) = view.region_name {
            breadcrumb.push_str("Region ");
            breadcrumb.push_str(region);
            breadcrumb.push_str(" > ");
        }
        breadcrumb.push_str(view.revision.map_or("-", |r| r.version.as_str()));

        let latest_version = view.latest_revision.map(|r| r.version.as_str());
        let is_latest = view
            .revision
            .is_some_and(|r| Some(r.version.as_str()) == latest_version);
        Self {
            breadcrumb,
            revision: view.revision,
            latest_version,
            is_latest,
        }
    }
}
