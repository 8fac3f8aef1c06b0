// SPDX-License-Identifier: MPL-2.0
//! Banner construction, text sizing, and child layout.
//!
//! The banner derives its height at construction time from the wrapped
//! bounding box of its title, anchors itself at a caller-supplied vertical
//! offset spanning the full screen width, and positions its children either
//! centered (text only) or offset to accommodate a leading loader image.
//! Once built, the layout is static: nothing here re-measures or re-flows
//! on content change.

use super::animation::Playback;
use super::measure::TextMeasurer;
use super::message::Message;
use crate::ui::design_tokens::{animation, dimensions, typography};
use iced::{Color, Point, Rectangle, Size};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Capability offered by whoever presents the banner: be told that the
/// banner is about to be hidden.
///
/// The banner only exposes an optional, non-owning slot of this type; the
/// owning controller is responsible for invoking it and for removing the
/// banner afterwards.
pub trait BannerDelegate {
    fn banner_will_hide(&self);
}

/// Fixed styling and sizing constants driving the layout algorithm.
///
/// Defaults come from [`crate::ui::design_tokens`]; injecting a custom value
/// keeps the sizing algorithm independent of any particular style source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerMetrics {
    /// Height of one banner line unit; the total height is a multiple of it.
    pub line_height: f32,
    /// Side length of the square loader image.
    pub image_size: f32,
    /// Gap between the loader image and the title.
    pub loader_title_offset: f32,
    /// Total horizontal inset reserved around the title label.
    pub label_total_margins: f32,
    /// Rightward shift of the centered title when an icon is shown.
    pub center_shift_with_icon: f32,
    /// Title font size.
    pub title_font_size: f32,
    /// Coarse per-line pixel height used to derive the line count.
    pub char_height_approx: f32,
    /// Full-cycle duration of the loader animation.
    pub animation_cycle: Duration,
}

impl Default for BannerMetrics {
    fn default() -> Self {
        Self {
            line_height: dimensions::LINE_HEIGHT,
            image_size: dimensions::IMAGE_SIZE,
            loader_title_offset: dimensions::LOADER_TITLE_OFFSET,
            label_total_margins: dimensions::LABEL_TOTAL_MARGINS,
            center_shift_with_icon: dimensions::CENTER_SHIFT_WITH_ICON,
            title_font_size: typography::TITLE,
            char_height_approx: typography::LINE_APPROX,
            animation_cycle: Duration::from_secs_f32(animation::CYCLE_SECONDS),
        }
    }
}

/// The banner's text-display child.
#[derive(Debug, Clone)]
pub struct TitleElement {
    text: String,
    color: Color,
    font_size: f32,
    number_of_lines: usize,
    frame: Rectangle,
}

impl TitleElement {
    /// Returns the title text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the font size.
    #[must_use]
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the wrapping clamp applied to the rendered label.
    #[must_use]
    pub fn number_of_lines(&self) -> usize {
        self.number_of_lines
    }

    /// Returns the element's frame in banner-local coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }
}

/// The banner's optional image/loader child.
#[derive(Debug, Clone)]
pub struct ImageElement {
    frame: Rectangle,
    playback: Playback,
}

impl ImageElement {
    /// Returns the element's frame in banner-local coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Returns the image playback state.
    #[must_use]
    pub fn playback(&self) -> &Playback {
        &self.playback
    }
}

/// A transient notification banner, fully laid out at construction.
pub struct BannerView {
    /// Vertical offset at which the banner's top edge is anchored.
    height: f32,
    /// The banner's own frame in screen coordinates.
    frame: Rectangle,
    /// Derived banner height; always a multiple of `metrics.line_height`.
    total_frame_height: f32,
    background_color: Color,
    title: TitleElement,
    image: Option<ImageElement>,
    clips_children: bool,
    metrics: BannerMetrics,
    delegate: Option<Weak<dyn BannerDelegate>>,
}

impl BannerView {
    /// Builds a fully laid-out banner anchored at `offset`, using the default
    /// metrics from the design tokens.
    #[must_use]
    pub fn new(
        offset: f32,
        message: &Message,
        screen_width: f32,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        Self::with_metrics(offset, message, screen_width, measurer, BannerMetrics::default())
    }

    /// Builds a fully laid-out banner with explicit metrics.
    ///
    /// The title is measured against `screen_width` minus the label margins,
    /// the line count is derived as `floor(floor(measured_height) / char_height_approx)`,
    /// and the banner height is `line_height * number_of_lines`. The double
    /// floor is deliberate: it reproduces the original coarse sizing, which
    /// can yield a zero-height banner when the measured text is shorter than
    /// one approximate line.
    #[must_use]
    pub fn with_metrics(
        offset: f32,
        message: &Message,
        screen_width: f32,
        measurer: &dyn TextMeasurer,
        metrics: BannerMetrics,
    ) -> Self {
        let label_width = screen_width - metrics.label_total_margins;

        let bounding_box = measurer.measure(message.title(), metrics.title_font_size, label_width);
        let calculated_height = bounding_box.height.floor();
        let number_of_lines = (calculated_height / metrics.char_height_approx).floor();
        let total_frame_height = metrics.line_height * number_of_lines;

        let frame = Rectangle::new(
            Point::new(0.0, offset),
            Size::new(screen_width, total_frame_height),
        );

        // Shrink-to-fit for the title resolves to the same wrapped bounding
        // box already measured above, so the sizing result is reused.
        let fitted = bounding_box;
        let title = TitleElement {
            text: message.title().to_owned(),
            color: message.text_color(),
            font_size: metrics.title_font_size,
            number_of_lines: number_of_lines as usize,
            frame: Rectangle::new(
                Point::ORIGIN,
                Size::new(fitted.width.min(label_width), fitted.height),
            ),
        };

        let image = Playback::from_images(message.images(), metrics.animation_cycle).map(
            |playback| ImageElement {
                frame: Rectangle::new(
                    Point::ORIGIN,
                    Size::new(metrics.image_size, metrics.image_size),
                ),
                playback,
            },
        );

        let mut view = Self {
            height: offset,
            frame,
            total_frame_height,
            background_color: message.background_color(),
            title,
            image,
            clips_children: true,
            metrics,
            delegate: None,
        };
        view.layout_children();
        view
    }

    /// Reconstructing a banner from an archived representation is not
    /// supported and aborts immediately.
    #[must_use]
    pub fn from_archive(_bytes: &[u8]) -> Self {
        unimplemented!("constructing a BannerView from an archived representation is not supported")
    }

    /// Positions the children within the current frame.
    ///
    /// With an image, the title is centered then shifted right, and the image
    /// sits to its left, vertically centered within one line unit. Without an
    /// image, the title is simply centered. Idempotent: a pure function of
    /// the current frame and title width.
    pub fn layout_children(&mut self) {
        let metrics = self.metrics;
        let title_width = self.title.frame.width;

        if let Some(image) = &mut self.image {
            let title_x =
                (self.frame.width - title_width) / 2.0 + metrics.center_shift_with_icon;
            self.title.frame = Rectangle::new(
                Point::new(title_x, 0.0),
                Size::new(title_width, self.frame.height),
            );

            image.frame = Rectangle::new(
                Point::new(
                    title_x - metrics.image_size - metrics.loader_title_offset,
                    (metrics.line_height - metrics.image_size) / 2.0,
                ),
                Size::new(metrics.image_size, metrics.image_size),
            );
        } else {
            let title_x = (self.frame.width - title_width) / 2.0;
            self.title.frame = Rectangle::new(
                Point::new(title_x, 0.0),
                Size::new(title_width, self.frame.height),
            );
        }
    }

    /// Vertical offset at which the banner is anchored.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The banner's frame in screen coordinates.
    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    /// Derived banner height, readable immediately after construction so the
    /// caller knows how much screen space to reserve.
    #[must_use]
    pub fn total_frame_height(&self) -> f32 {
        self.total_frame_height
    }

    /// The banner background color.
    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The title child.
    #[must_use]
    pub fn title(&self) -> &TitleElement {
        &self.title
    }

    /// The image child, when the message carried any images.
    #[must_use]
    pub fn image(&self) -> Option<&ImageElement> {
        self.image.as_ref()
    }

    /// Whether children are clipped to the banner bounds.
    #[must_use]
    pub fn clips_children(&self) -> bool {
        self.clips_children
    }

    /// The metrics this banner was laid out with.
    #[must_use]
    pub fn metrics(&self) -> BannerMetrics {
        self.metrics
    }

    /// Installs the non-owning delegate slot.
    pub fn set_delegate(&mut self, delegate: Weak<dyn BannerDelegate>) {
        self.delegate = Some(delegate);
    }

    /// Returns the delegate, if one is installed and still alive.
    #[must_use]
    pub fn delegate(&self) -> Option<Rc<dyn BannerDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use iced::widget::image::Handle;
    use std::cell::Cell;

    const SCREEN_WIDTH: f32 = 375.0;

    /// Measurer returning a fixed bounding box regardless of input.
    struct FixedMeasurer(Size);

    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, _content: &str, _font_size: f32, _max_width: f32) -> Size {
            self.0
        }
    }

    fn pixel() -> Handle {
        Handle::from_rgba(1, 1, vec![255, 0, 0, 255])
    }

    fn banner_with(measured: Size, images: usize, offset: f32) -> BannerView {
        let mut message = Message::new("Loading new content");
        for _ in 0..images {
            message = message.with_image(pixel());
        }
        BannerView::new(offset, &message, SCREEN_WIDTH, &FixedMeasurer(measured))
    }

    #[test]
    fn frame_spans_screen_width_at_given_offset() {
        for offset in [0.0, 20.0, 64.0] {
            let banner = banner_with(Size::new(100.0, 30.0), 0, offset);
            let frame = banner.frame();
            assert_eq!(frame.x, 0.0);
            assert_eq!(frame.y, offset);
            assert_eq!(frame.width, SCREEN_WIDTH);
            assert_eq!(frame.height, banner.total_frame_height());
        }
    }

    #[test]
    fn total_height_is_a_multiple_of_the_line_unit() {
        for height in [0.0, 14.0, 15.0, 31.0, 46.5, 120.0] {
            let banner = banner_with(Size::new(100.0, height), 0, 0.0);
            let lines = (height.floor() / 15.0).floor();
            assert_abs_diff_eq!(
                banner.total_frame_height(),
                24.0 * lines,
                epsilon = F32_EPSILON
            );
        }
    }

    #[test]
    fn line_count_uses_the_double_floor() {
        let cases = [
            (14.9, 0),
            (15.0, 1),
            (29.9, 1),
            (30.0, 2),
            (44.9, 2),
            (45.0, 3),
        ];
        for (measured_height, expected_lines) in cases {
            let banner = banner_with(Size::new(100.0, measured_height), 0, 0.0);
            assert_eq!(
                banner.title().number_of_lines(),
                expected_lines,
                "measured height {measured_height}"
            );
        }
    }

    #[test]
    fn short_text_yields_a_zero_height_banner() {
        let banner = banner_with(Size::new(40.0, 14.0), 0, 20.0);
        assert_eq!(banner.title().number_of_lines(), 0);
        assert_eq!(banner.total_frame_height(), 0.0);
        assert_eq!(banner.frame().height, 0.0);
    }

    #[test]
    fn without_images_title_is_centered() {
        let banner = banner_with(Size::new(100.0, 30.0), 0, 0.0);
        assert!(banner.image().is_none());

        let title = banner.title().frame();
        assert_abs_diff_eq!(
            title.x,
            (SCREEN_WIDTH - title.width) / 2.0,
            epsilon = F32_EPSILON
        );
        assert_eq!(title.y, 0.0);
        assert_eq!(title.height, banner.frame().height);
    }

    #[test]
    fn with_one_image_title_shifts_right_by_twenty() {
        let plain = banner_with(Size::new(100.0, 30.0), 0, 0.0);
        let with_icon = banner_with(Size::new(100.0, 30.0), 1, 0.0);

        assert_abs_diff_eq!(
            with_icon.title().frame().x,
            plain.title().frame().x + 20.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn image_sits_left_of_the_title_with_a_five_unit_gap() {
        let banner = banner_with(Size::new(100.0, 30.0), 1, 0.0);
        let image = banner.image().expect("image child should be attached");
        let frame = image.frame();

        assert_abs_diff_eq!(
            frame.x,
            banner.title().frame().x - 14.0 - 5.0,
            epsilon = F32_EPSILON
        );
        assert_eq!(frame.width, 14.0);
        assert_eq!(frame.height, 14.0);
        assert_abs_diff_eq!(frame.y, 5.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn one_image_is_static() {
        let banner = banner_with(Size::new(100.0, 30.0), 1, 0.0);
        let image = banner.image().unwrap();
        assert!(!image.playback().is_animating());
    }

    #[test]
    fn several_images_loop_at_the_token_cycle() {
        let banner = banner_with(Size::new(100.0, 30.0), 3, 0.0);
        let image = banner.image().unwrap();
        assert!(image.playback().is_animating());
        assert_eq!(
            image.playback().cycle(),
            Some(Duration::from_secs_f32(0.7))
        );
    }

    #[test]
    fn layout_pass_is_idempotent() {
        let mut banner = banner_with(Size::new(100.0, 30.0), 1, 0.0);
        let title_before = banner.title().frame();
        let image_before = banner.image().unwrap().frame();

        banner.layout_children();
        banner.layout_children();

        assert_eq!(banner.title().frame(), title_before);
        assert_eq!(banner.image().unwrap().frame(), image_before);
    }

    #[test]
    fn children_are_clipped() {
        let banner = banner_with(Size::new(100.0, 30.0), 0, 0.0);
        assert!(banner.clips_children());
    }

    #[test]
    #[should_panic(expected = "archived representation")]
    fn from_archive_always_aborts() {
        let _ = BannerView::from_archive(&[0x62, 0x70, 0x6c, 0x69]);
    }

    struct Controller {
        hidden: Cell<bool>,
    }

    impl BannerDelegate for Controller {
        fn banner_will_hide(&self) {
            self.hidden.set(true);
        }
    }

    #[test]
    fn delegate_slot_is_non_owning() {
        let mut banner = banner_with(Size::new(100.0, 30.0), 0, 0.0);
        assert!(banner.delegate().is_none());

        let controller = Rc::new(Controller {
            hidden: Cell::new(false),
        });
        let weak_controller = Rc::downgrade(&controller);
        let weak: Weak<dyn BannerDelegate> = weak_controller;
        banner.set_delegate(weak);

        banner.delegate().unwrap().banner_will_hide();
        assert!(controller.hidden.get());

        drop(controller);
        assert!(banner.delegate().is_none());
    }

    #[test]
    fn custom_metrics_drive_the_layout() {
        let metrics = BannerMetrics {
            line_height: 30.0,
            char_height_approx: 10.0,
            ..BannerMetrics::default()
        };
        let message = Message::new("text");
        let banner = BannerView::with_metrics(
            0.0,
            &message,
            SCREEN_WIDTH,
            &FixedMeasurer(Size::new(100.0, 25.0)),
            metrics,
        );

        // floor(floor(25) / 10) = 2 lines, 30 units each.
        assert_eq!(banner.title().number_of_lines(), 2);
        assert_abs_diff_eq!(banner.total_frame_height(), 60.0, epsilon = F32_EPSILON);
    }
}
