// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Returns the URL of a drawing image file under `base_path`.
///
/// The file name is percent-encoded as a single path component: everything
/// but `A-Z a-z 0-9 - _ . ~` is escaped, so spaces, slashes and non-ASCII
/// names are all safe.
#[must_use]
pub fn drawing_url(base_path: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        base_path.trim_end_matches('/'),
        urlencoding::encode(file_name)
    )
}
