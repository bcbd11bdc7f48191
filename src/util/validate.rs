// SPDX-License-Identifier: MPL-2.0
//! Upload allow-list validation by file extension.

/// Returns the lower-cased substring after the last `.` of `file_name`.
///
/// A name with no dot yields the whole name. This mirrors the historical
/// behavior of the upload form: such a name only validates when it is
/// literally present in the allow-list.
fn extension_of(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or(file_name)
        .to_lowercase()
}

/// Checks whether `file_name` carries an extension present in `allowed`.
///
/// Matching is case-insensitive on the file name side; entries in `allowed`
/// are expected in lower case (e.g. `["html", "htm", "xlsx", "xls"]`).
#[must_use]
pub fn validate_file_type(file_name: &str, allowed: &[&str]) -> bool {
    let extension = extension_of(file_name);
    allowed.contains(&extension.as_str())
}
