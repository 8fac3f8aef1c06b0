// SPDX-License-Identifier: MPL-2.0
//! The message value object consumed by the banner.
//!
//! A `Message` carries everything the banner needs to display itself:
//! title text, colors, and an optional ordered image sequence. It is
//! immutable once handed to the banner, which copies what it needs at
//! construction and keeps no back-reference.

use crate::ui::design_tokens::palette;
use iced::widget::image::Handle;
use iced::Color;

/// A short-lived notification message to be shown in a banner.
#[derive(Debug, Clone)]
pub struct Message {
    /// Title text; may be empty.
    title: String,
    /// Title text color.
    text_color: Color,
    /// Banner background color.
    background_color: Color,
    /// Ordered image sequence: empty for text-only banners, a single entry
    /// for a static icon, two or more for a looping loader animation.
    images: Vec<Handle>,
}

impl Message {
    /// Creates a message with the default banner colors and no images.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text_color: palette::TEXT,
            background_color: palette::BACKGROUND,
            images: Vec::new(),
        }
    }

    /// Sets the title text color.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Sets the banner background color.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Replaces the image sequence, preserving the given order.
    #[must_use]
    pub fn with_images(mut self, images: Vec<Handle>) -> Self {
        self.images = images;
        self
    }

    /// Appends a single image to the sequence.
    #[must_use]
    pub fn with_image(mut self, image: Handle) -> Self {
        self.images.push(image);
        self
    }

    /// Returns the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the title text color.
    #[must_use]
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Returns the banner background color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Returns the image sequence in its original order.
    #[must_use]
    pub fn images(&self) -> &[Handle] {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn new_message_uses_default_colors() {
        let message = Message::new("saved");
        assert_eq!(message.text_color(), palette::TEXT);
        assert_eq!(message.background_color(), palette::BACKGROUND);
        assert!(message.images().is_empty());
    }

    #[test]
    fn builder_overrides_colors() {
        let message = Message::new("saved")
            .with_text_color(Color::BLACK)
            .with_background_color(Color::WHITE);
        assert_eq!(message.text_color(), Color::BLACK);
        assert_eq!(message.background_color(), Color::WHITE);
    }

    #[test]
    fn with_image_appends_in_order() {
        let message = Message::new("loading")
            .with_image(pixel())
            .with_image(pixel())
            .with_image(pixel());
        assert_eq!(message.images().len(), 3);
    }

    #[test]
    fn empty_title_is_valid() {
        let message = Message::new("");
        assert_eq!(message.title(), "");
    }
}
