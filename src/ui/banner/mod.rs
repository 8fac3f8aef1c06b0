// SPDX-License-Identifier: MPL-2.0
//! Transient banner ("whisper") component.
//!
//! A banner presents one short-lived notification message: a title, an
//! optional leading image or loader animation, and a background color. Its
//! height is derived from the wrapped title text at construction time and
//! never recomputed afterwards.
//!
//! # Components
//!
//! - [`message`] - The `Message` value object consumed by the banner
//! - [`measure`] - The `TextMeasurer` boundary and a headless approximation
//! - [`view`] - `BannerView` construction, sizing, and the layout pass
//! - [`animation`] - Loader image playback state
//! - [`widget`] - Rendering a laid-out banner as an Iced element
//!
//! # Usage
//!
//! ```
//! use iced_whisper::ui::banner::{BannerView, HeuristicMeasurer, Message};
//!
//! let message = Message::new("Connection restored");
//! let banner = BannerView::new(64.0, &message, 375.0, &HeuristicMeasurer::default());
//!
//! // The caller reserves this much vertical space for the banner.
//! let reserved = banner.total_frame_height();
//! assert_eq!(reserved % 24.0, 0.0);
//! ```

pub mod animation;
pub mod measure;
pub mod message;
pub mod view;
pub mod widget;

pub use animation::Playback;
pub use measure::{HeuristicMeasurer, TextMeasurer};
pub use message::Message;
pub use view::{BannerDelegate, BannerMetrics, BannerView, ImageElement, TitleElement};
