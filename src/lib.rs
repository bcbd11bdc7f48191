// SPDX-License-Identifier: MPL-2.0
//! `newsdesk` is a desktop companion for newsletter production built with
//! the Iced GUI framework.
//!
//! It keeps a draft of titled sections and wires up the conveniences around
//! it: clipboard copy with temporary button feedback, toast notifications,
//! alert banners, a loading overlay, debounced filtering, smooth scrolling
//! to named sections, and plain-text export through a save dialog.

#![doc(html_root_url = "https://docs.rs/newsdesk/0.1.0")]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod draft;
pub mod error;
pub mod export;
pub mod ui;
pub mod util;

#[cfg(test)]
pub mod test_utils;
