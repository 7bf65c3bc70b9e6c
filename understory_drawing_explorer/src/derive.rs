// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectors: pure functions from metadata plus intent to effective values.
//!
//! Every level uses the same fallback rule. If the requested id or name is
//! one of the current candidates, it is used; otherwise the first candidate
//! is used; with no candidates the effective value is `None`.

use serde::Serialize;
use understory_drawing_model::{DisciplineData, Drawing, Metadata, Revision};
use understory_drawing_selection::SelectionIntent;

use crate::DeriveError;

/// Picks the requested candidate, or the first one.
///
/// `level` names the selection level in logs when a stale request is
/// replaced.
fn resolve<'a, T: ?Sized>(
    level: &'static str,
    candidates: impl IntoIterator<Item = &'a T>,
    requested: Option<&str>,
    key: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let mut first = None;
    for candidate in candidates {
        if requested.is_some_and(|r| key(candidate) == r) {
            return Some(candidate);
        }
        first.get_or_insert(candidate);
    }
    if let (Some(requested), Some(fallback)) = (requested, first) {
        tracing::debug!(level, requested, fallback = key(fallback), "stale selection replaced by default");
    }
    first
}

/// Returns the root drawing, or `None` without metadata or without a
/// parentless drawing.
#[must_use]
pub fn root_drawing(metadata: Option<&Metadata>) -> Option<&Drawing> {
    metadata?.root()
}

/// Returns the spaces under `root`, ordered by id.
#[must_use]
pub fn spaces<'a>(metadata: &'a Metadata, root: &Drawing) -> Vec<&'a Drawing> {
    metadata.children_of(&root.id)
}

/// Returns the effective space.
#[must_use]
pub fn effective_space<'a>(spaces: &[&'a Drawing], requested: Option<&str>) -> Option<&'a Drawing> {
    resolve("space", spaces.iter().copied(), requested, |d| d.id.as_str())
}

/// Returns the discipline names of `space` in document order.
#[must_use]
pub fn discipline_names(space: Option<&Drawing>) -> Vec<&str> {
    space.map(|s| s.discipline_names().collect()).unwrap_or_default()
}

/// Returns the effective discipline name.
#[must_use]
pub fn effective_discipline_name<'a>(names: &[&'a str], requested: Option<&str>) -> Option<&'a str> {
    resolve("discipline", names.iter().copied(), requested, |n| n)
}

/// Returns the discipline named `name` on `space`.
#[must_use]
pub fn selected_discipline<'a>(
    space: Option<&'a Drawing>,
    name: Option<&str>,
) -> Option<&'a DisciplineData> {
    space?.discipline(name?)
}

/// Returns the region names of `discipline` in document order.
#[must_use]
pub fn region_names(discipline: Option<&DisciplineData>) -> Vec<&str> {
    discipline
        .and_then(|d| d.regions.as_ref())
        .map(|regions| regions.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

/// Returns the effective region name.
#[must_use]
pub fn effective_region_name<'a>(names: &[&'a str], requested: Option<&str>) -> Option<&'a str> {
    resolve("region", names.iter().copied(), requested, |n| n)
}

/// Returns the revision pool for the current discipline and region.
///
/// A selected region that exists on the discipline replaces the pool
/// entirely, even when its own list is empty; pools are never merged.
#[must_use]
pub fn revision_candidates<'a>(
    discipline: Option<&'a DisciplineData>,
    region: Option<&str>,
) -> &'a [Revision] {
    let Some(discipline) = discipline else {
        return &[];
    };
    match region.and_then(|name| discipline.region(name)) {
        Some(region) => &region.revisions,
        None => &discipline.revisions,
    }
}

/// Returns the effective revision.
#[must_use]
pub fn effective_revision<'a>(candidates: &'a [Revision], requested: Option<&str>) -> Option<&'a Revision> {
    resolve("revision", candidates, requested, |r| r.version.as_str())
}

/// Returns the latest revision of a normalized pool.
#[must_use]
pub fn latest_revision(candidates: &[Revision]) -> Option<&Revision> {
    candidates.first()
}

/// Returns the image file shown as the base layer.
///
/// A discipline that has regions and its own image always shows that image;
/// its regions only switch the revision pool. Otherwise the first present of
/// the revision's, the discipline's, and the space's image wins.
#[must_use]
pub fn base_image<'a>(
    revision: Option<&'a Revision>,
    discipline: Option<&'a DisciplineData>,
    space: Option<&'a Drawing>,
) -> Option<&'a str> {
    if let Some(discipline) = discipline
        && discipline.regions.is_some()
        && let Some(image) = discipline.image.as_deref()
    {
        return Some(image);
    }
    revision
        .map(|r| r.image.as_str())
        .or_else(|| discipline.and_then(|d| d.image.as_deref()))
        .or_else(|| space.map(|s| s.image.as_str()))
}

/// Returns every discipline of the space except the selected one.
#[must_use]
pub fn overlay_candidates<'a>(names: &[&'a str], selected: Option<&str>) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|name| Some(*name) != selected)
        .collect()
}

/// Returns the requested overlays that are still candidates, in request order.
#[must_use]
pub fn effective_overlays<'a, 'r>(
    requested: impl IntoIterator<Item = &'r str>,
    candidates: &[&'a str],
) -> Vec<&'a str> {
    requested
        .into_iter()
        .filter_map(|name| candidates.iter().copied().find(|c| *c == name))
        .collect()
}

/// The fully resolved selection, as owned values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EffectiveSelection {
    /// Effective space id.
    pub space_id: Option<String>,
    /// Effective discipline name.
    pub discipline: Option<String>,
    /// Effective region name.
    pub region: Option<String>,
    /// Effective revision version.
    pub revision_version: Option<String>,
    /// Effective overlay disciplines, in the order they were requested.
    pub overlays: Vec<String>,
}

/// Everything derived from metadata and intent for one render.
///
/// All references borrow from the metadata.
#[derive(Clone, Debug)]
pub struct ExplorerView<'a> {
    /// The metadata this view was derived from.
    pub metadata: &'a Metadata,
    /// The root drawing.
    pub root: &'a Drawing,
    /// Candidate spaces, ordered by id.
    pub spaces: Vec<&'a Drawing>,
    /// Effective space.
    pub space: Option<&'a Drawing>,
    /// Candidate disciplines of the effective space.
    pub discipline_names: Vec<&'a str>,
    /// Effective discipline name.
    pub discipline_name: Option<&'a str>,
    /// Effective discipline.
    pub discipline: Option<&'a DisciplineData>,
    /// Candidate regions of the effective discipline.
    pub region_names: Vec<&'a str>,
    /// Effective region name.
    pub region_name: Option<&'a str>,
    /// Revision pool, latest first.
    pub revision_candidates: &'a [Revision],
    /// Effective revision.
    pub revision: Option<&'a Revision>,
    /// Latest revision of the pool.
    pub latest_revision: Option<&'a Revision>,
    /// Base image file name.
    pub base_image: Option<&'a str>,
    /// Disciplines that may be overlaid.
    pub overlay_candidates: Vec<&'a str>,
    /// Effective overlay disciplines.
    pub overlays: Vec<&'a str>,
}

impl ExplorerView<'_> {
    /// Returns the resolved selection as owned values.
    #[must_use]
    pub fn selection(&self) -> EffectiveSelection {
        EffectiveSelection {
            space_id: self.space.map(|s| s.id.clone()),
            discipline: self.discipline_name.map(str::to_owned),
            region: self.region_name.map(str::to_owned),
            revision_version: self.revision.map(|r| r.version.clone()),
            overlays: self.overlays.iter().map(|&name| name.to_owned()).collect(),
        }
    }
}

/// Derives the whole view for `intent`.
///
/// # Errors
///
/// Returns [`DeriveError::NoMetadata`] when `metadata` is `None` and
/// [`DeriveError::NoRootDrawing`] when no drawing is parentless. Stale or
/// missing choices in `intent` are never errors.
pub fn derive_view<'a>(
    metadata: Option<&'a Metadata>,
    intent: &SelectionIntent,
) -> Result<ExplorerView<'a>, DeriveError> {
    let metadata = metadata.ok_or(DeriveError::NoMetadata)?;
    let root = metadata.root().ok_or(DeriveError::NoRootDrawing)?;

    let spaces = spaces(metadata, root);
    let space = effective_space(&spaces, intent.space_id());

    let discipline_names = discipline_names(space);
    let discipline_name = effective_discipline_name(&discipline_names, intent.discipline());
    let discipline = selected_discipline(space, discipline_name);

    let region_names = region_names(discipline);
    let region_name = effective_region_name(&region_names, intent.region());

    let revision_candidates = revision_candidates(discipline, region_name);
    let revision = effective_revision(revision_candidates, intent.revision_version());
    let latest_revision = latest_revision(revision_candidates);

    let base_image = base_image(revision, discipline, space);

    let overlay_candidates = overlay_candidates(&discipline_names, discipline_name);
    let overlays = effective_overlays(
        intent.overlays().iter().map(String::as_str),
        &overlay_candidates,
    );

    Ok(ExplorerView {
        metadata,
        root,
        spaces,
        space,
        discipline_names,
        discipline_name,
        discipline,
        region_names,
        region_name,
        revision_candidates,
        revision,
        latest_revision,
        base_image,
        overlay_candidates,
        overlays,
    })
}

/// Derives only the resolved selection for `intent`.
///
/// # Errors
///
/// See [`derive_view`].
pub fn derive_effective_selection(
    metadata: Option<&Metadata>,
    intent: &SelectionIntent,
) -> Result<EffectiveSelection, DeriveError> {
    derive_view(metadata, intent).map(|view| view.selection())
}
