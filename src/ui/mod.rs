// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`banner`] - The transient notification banner and its layout algorithm
//! - [`design_tokens`] - Design system constants (colors, dimensions, timing)

pub mod banner;
pub mod design_tokens;
