// SPDX-License-Identifier: MPL-2.0
//! Loader image playback.
//!
//! A banner with two or more images loops through them at a fixed cycle
//! duration, starting the moment the banner is constructed. Playback is pure
//! bookkeeping: the current frame is a function of the clock, with no timers
//! or tasks owned here.

use iced::widget::image::Handle;
use std::time::{Duration, Instant};

/// Playback state of the banner's complement image.
#[derive(Debug, Clone)]
pub enum Playback {
    /// A single image, shown as-is.
    Static(Handle),
    /// Two or more images looping in their original order.
    Looping {
        frames: Vec<Handle>,
        /// Duration of one full pass through `frames`.
        cycle: Duration,
        started_at: Instant,
    },
}

impl Playback {
    /// Builds the playback state for an image sequence.
    ///
    /// Returns `None` for an empty sequence: the banner attaches no image
    /// element at all in that case.
    pub(crate) fn from_images(images: &[Handle], cycle: Duration) -> Option<Self> {
        match images {
            [] => None,
            [single] => Some(Self::Static(single.clone())),
            many => Some(Self::Looping {
                frames: many.to_vec(),
                cycle,
                started_at: Instant::now(),
            }),
        }
    }

    /// Whether the image is looping through an animation sequence.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Self::Looping { .. })
    }

    /// The full-cycle duration, when animating.
    #[must_use]
    pub fn cycle(&self) -> Option<Duration> {
        match self {
            Self::Static(_) => None,
            Self::Looping { cycle, .. } => Some(*cycle),
        }
    }

    /// Index of the frame visible at `now`.
    ///
    /// Static playback always reports frame 0. Looping playback divides the
    /// cycle evenly across its frames and wraps around indefinitely.
    #[must_use]
    pub fn frame_index_at(&self, now: Instant) -> usize {
        match self {
            Self::Static(_) => 0,
            Self::Looping {
                frames,
                cycle,
                started_at,
            } => {
                let elapsed = now.saturating_duration_since(*started_at).as_secs_f32();
                let per_frame = cycle.as_secs_f32() / frames.len() as f32;
                (elapsed / per_frame) as usize % frames.len()
            }
        }
    }

    /// The image handle visible at `now`.
    #[must_use]
    pub fn frame_at(&self, now: Instant) -> &Handle {
        match self {
            Self::Static(handle) => handle,
            Self::Looping { frames, .. } => &frames[self.frame_index_at(now)],
        }
    }
}
