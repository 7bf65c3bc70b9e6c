// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::OrderedToggleSet;

/// One user action that changes the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A space was picked.
    SpaceSelected {
        /// Id of the chosen space drawing.
        space_id: String,
    },
    /// A discipline was picked.
    DisciplineSelected {
        /// Name of the chosen discipline.
        discipline: String,
    },
    /// A region was picked.
    RegionSelected {
        /// Name of the chosen region.
        region: String,
    },
    /// A revision was picked.
    RevisionSelected {
        /// Version label of the chosen revision.
        version: String,
    },
    /// An overlay discipline was switched on or off.
    OverlayToggled {
        /// Name of the overlay discipline.
        discipline: String,
    },
}

impl SelectionEvent {
    /// Shorthand for [`SelectionEvent::SpaceSelected`].
    #[must_use]
    pub fn space(space_id: impl Into<String>) -> Self {
        Self::SpaceSelected {
            space_id: space_id.into(),
        }
    }

    /// Shorthand for [`SelectionEvent::DisciplineSelected`].
    #[must_use]
    pub fn discipline(discipline: impl Into<String>) -> Self {
        Self::DisciplineSelected {
            discipline: discipline.into(),
        }
    }

    /// Shorthand for [`SelectionEvent::RegionSelected`].
    #[must_use]
    pub fn region(region: impl Into<String>) -> Self {
        Self::RegionSelected {
            region: region.into(),
        }
    }

    /// Shorthand for [`SelectionEvent::RevisionSelected`].
    #[must_use]
    pub fn revision(version: impl Into<String>) -> Self {
        Self::RevisionSelected {
            version: version.into(),
        }
    }

    /// Shorthand for [`SelectionEvent::OverlayToggled`].
    #[must_use]
    pub fn overlay(discipline: impl Into<String>) -> Self {
        Self::OverlayToggled {
            discipline: discipline.into(),
        }
    }
}

/// What the user has asked to see.
///
/// Every field may be absent (no explicit choice yet) or stale (names
/// something the metadata no longer has). The intent is never validated here.
///
/// A revision counter bumps whenever an event changes the recorded choices,
/// which lets callers skip re-deriving the view when nothing changed.
/// Equality ignores the counter.
#[derive(Clone, Debug, Default)]
pub struct SelectionIntent {
    space_id: Option<String>,
    discipline: Option<String>,
    region: Option<String>,
    revision_version: Option<String>,
    overlays: OrderedToggleSet<String>,
    revision: u64,
}

impl SelectionIntent {
    /// Creates an intent with no choices.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            space_id: None,
            discipline: None,
            region: None,
            revision_version: None,
            overlays: OrderedToggleSet::new(),
            revision: 0,
        }
    }

    /// Returns the requested space id.
    #[must_use]
    pub fn space_id(&self) -> Option<&str> {
        self.space_id.as_deref()
    }

    /// Returns the requested discipline name.
    #[must_use]
    pub fn discipline(&self) -> Option<&str> {
        self.discipline.as_deref()
    }

    /// Returns the requested region name.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the requested revision version.
    #[must_use]
    pub fn revision_version(&self) -> Option<&str> {
        self.revision_version.as_deref()
    }

    /// Returns the requested overlay disciplines in the order they were added.
    #[must_use]
    pub fn overlays(&self) -> &OrderedToggleSet<String> {
        &self.overlays
    }

    /// Returns the change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Applies `event` in place, with cascading resets.
    ///
    /// Returns `true` if the recorded choices changed.
    pub fn apply(&mut self, event: SelectionEvent) -> bool {
        let changed = match event {
            SelectionEvent::SpaceSelected { space_id } => {
                let mut changed = replace(&mut self.space_id, space_id);
                changed |= self.discipline.take().is_some();
                changed |= self.clear_below_discipline();
                changed
            }
            SelectionEvent::DisciplineSelected { discipline } => {
                let mut changed = replace(&mut self.discipline, discipline);
                changed |= self.clear_below_discipline();
                changed
            }
            SelectionEvent::RegionSelected { region } => {
                let mut changed = replace(&mut self.region, region);
                changed |= self.revision_version.take().is_some();
                changed
            }
            SelectionEvent::RevisionSelected { version } => {
                replace(&mut self.revision_version, version)
            }
            SelectionEvent::OverlayToggled { discipline } => {
                self.overlays.toggle(discipline);
                true
            }
        };
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
        changed
    }

    fn clear_below_discipline(&mut self) -> bool {
        let had_overlays = !self.overlays.is_empty();
        self.overlays.clear();
        let had_region = self.region.take().is_some();
        let had_revision = self.revision_version.take().is_some();
        had_overlays | had_region | had_revision
    }
}

impl PartialEq for SelectionIntent {
    fn eq(&self, other: &Self) -> bool {
        self.space_id == other.space_id
            && self.discipline == other.discipline
            && self.region == other.region
            && self.revision_version == other.revision_version
            && self.overlays == other.overlays
    }
}

impl Eq for SelectionIntent {}

fn replace(slot: &mut Option<String>, value: String) -> bool {
    if slot.as_deref() == Some(value.as_str()) {
        return false;
    }
    *slot = Some(value);
    true
}

/// Returns the intent that results from applying `event` to `intent`.
///
/// This is the pure form of [`SelectionIntent::apply`].
#[must_use]
pub fn apply_selection_event(intent: &SelectionIntent, event: SelectionEvent) -> SelectionIntent {
    let mut next = intent.clone();
    next.apply(event);
    next
}
