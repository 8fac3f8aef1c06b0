// SPDX-License-Identifier: MPL-2.0
//! `iced_whisper` is a transient notification banner ("whisper") component
//! for the Iced GUI framework.
//!
//! It computes a banner's geometry from measured title text - deriving the
//! line count and total height at construction time - positions an optional
//! loader image next to the title, and renders the result as an Iced element.

#![doc(html_root_url = "https://docs.rs/iced_whisper/0.1.0")]

pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
