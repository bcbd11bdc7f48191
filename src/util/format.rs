// SPDX-License-Identifier: MPL-2.0
//! Human-readable file size formatting.

/// Units ordered by increasing magnitude, base 1024.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count as a human-readable string.
///
/// Picks the largest unit among Bytes/KB/MB/GB for which the scaled value is
/// at least 1, rounds to two decimal places, and trims trailing zeros:
/// `1024` becomes `"1 KB"`, `1536` becomes `"1.5 KB"`. Zero is special-cased
/// as `"0 Bytes"`. Sizes beyond the GB range stay expressed in GB.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    #[allow(clippy::cast_precision_loss)] // Display-only precision is fine
    let magnitude = (bytes as f64).ln() / 1024_f64.ln();
    let exponent = (magnitude.floor() as usize).min(UNITS.len() - 1);

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    let mut number = format!("{value:.2}");
    while number.ends_with('0') {
        number.pop();
    }
    if number.ends_with('.') {
        number.pop();
    }

    format!("{number} {}", UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn below_one_kilobyte_stays_in_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn exact_unit_boundaries_trim_decimals() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn fractional_values_keep_significant_decimals() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_572_864), "1.5 MB");
    }

    #[test]
    fn rounds_to_two_decimal_places() {
        // 1150 / 1024 = 1.123046875 -> 1.12
        assert_eq!(format_file_size(1150), "1.12 KB");
    }

    #[test]
    fn sizes_past_gigabytes_stay_in_gigabytes() {
        // 2 TB expressed in GB, the largest unit in the table
        assert_eq!(format_file_size(2_199_023_255_552), "2048 GB");
    }
}
