// SPDX-License-Identifier: MPL-2.0
//! Small stateless helpers shared across the UI: human-readable formatting,
//! upload validation, and input debouncing.

pub mod debounce;
pub mod format;
pub mod validate;

pub use debounce::Debouncer;
pub use format::format_file_size;
pub use validate::validate_file_type;
