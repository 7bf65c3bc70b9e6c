// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use understory_drawing_geometry::Transform;

use crate::Polygon;

/// Naive date-time layouts accepted after RFC 3339. Interpreted as UTC.
const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// A dated version of a discipline's or region's drawing image.
///
/// `version` is unique within its owning revision list only.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    /// Version label, e.g. `"REV2"`.
    pub version: String,
    /// Image file name.
    pub image: String,
    /// Issue date as written in the metadata.
    pub date: String,
    /// Free-text description.
    pub description: String,
    /// Change notes; empty for an initial issue.
    pub changes: Vec<String>,
    /// Placement of this revision's image relative to a base image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_transform: Option<Transform>,
    /// Outline of the area this revision covers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<Polygon>,
}

impl Revision {
    /// Creates a revision with no changes, transform, or polygon.
    #[must_use]
    pub fn new(
        version: impl Into<String>,
        image: impl Into<String>,
        date: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            image: image.into(),
            date: date.into(),
            description: description.into(),
            changes: Vec::new(),
            image_transform: None,
            polygon: None,
        }
    }

    /// Builds a revision from one raw metadata entry.
    ///
    /// Returns `None` unless `version`, `image`, `date`, and `description` are
    /// all present as strings. `changes` keeps only its string elements and
    /// defaults to empty; an unreadable `imageTransform` or `polygon` is
    /// treated as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let text = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_owned);

        let changes = entry
            .get("changes")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            version: text("version")?,
            image: text("image")?,
            date: text("date")?,
            description: text("description")?,
            changes,
            image_transform: entry
                .get("imageTransform")
                .and_then(|v| Transform::deserialize(v).ok()),
            polygon: entry
                .get("polygon")
                .and_then(|v| Polygon::deserialize(v).ok()),
        })
    }

    /// Returns the parsed issue date, if it can be read.
    #[must_use]
    pub fn parsed_date(&self) -> Option<DateTime<Utc>> {
        parse_revision_date(&self.date)
    }
}

/// Parses a revision date.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM[:SS[.f]]` or
/// `YYYY-MM-DD HH:MM:SS[.f]` (taken as UTC), and bare `YYYY-MM-DD`
/// (UTC midnight).
#[must_use]
pub fn parse_revision_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(date, format) {
            return Some(parsed.and_utc());
        }
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Validates and orders a raw revision collection, latest first.
///
/// `raw` may be an array of entries or an object whose values are entries
/// (taken in document order). Any other value yields an empty list. Entries
/// that [`Revision::from_value`] rejects are dropped.
///
/// Ordering is descending by [`parse_revision_date`]; entries with equal
/// dates keep their input order, and entries with unreadable dates sort after
/// every readable one.
#[must_use]
pub fn normalize_revisions(raw: &Value) -> Vec<Revision> {
    let entries: Vec<&Value> = match raw {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    };

    let total = entries.len();
    let revisions: Vec<Revision> = entries.into_iter().filter_map(Revision::from_value).collect();
    if revisions.len() < total {
        tracing::debug!(
            dropped = total - revisions.len(),
            kept = revisions.len(),
            "ignored malformed revision entries"
        );
    }
    normalize_revision_list(revisions)
}

/// Orders already-validated revisions latest first.
///
/// This is the sorting half of [`normalize_revisions`] and has the same tie
/// behavior. Applying it to its own output returns the output unchanged.
#[must_use]
pub fn normalize_revision_list(revisions: Vec<Revision>) -> Vec<Revision> {
    let mut keyed: Vec<(Option<DateTime<Utc>>, Revision)> = revisions
        .into_iter()
        .map(|revision| (revision.parsed_date(), revision))
        .collect();
    // `None < Some(_)`, so reversing the comparison puts unreadable dates last.
    keyed.sort_by(|(a, _), (b, _)| b.cmp(a));
    keyed.into_iter().map(|(_, revision)| revision).collect()
}

/// Deserializes any JSON value into a normalized revision list.
pub(crate) fn deserialize_revisions<'de, D>(deserializer: D) -> Result<Vec<Revision>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(normalize_revisions(&raw))
}
