// SPDX-License-Identifier: MPL-2.0
//! Iced rendering adapter for a laid-out banner.
//!
//! All geometry decisions are made in [`super::view`]; this module only
//! translates the computed frames and colors into Iced widgets.

use super::view::BannerView;
use iced::widget::image::Image;
use iced::widget::{container, text, Container, Row, Text};
use iced::{alignment, Color, ContentFit, Element, Length, Padding, Theme};
use std::time::Instant;

/// Renders a banner as an Iced element.
///
/// The element takes the banner's computed frame size, fills it with the
/// message background color, and clips its content to the bounds.
pub fn view<'a, M: 'a>(banner: &'a BannerView) -> Element<'a, M> {
    let metrics = banner.metrics();
    let title_color = banner.title().color();
    let background = banner.background_color();

    let title_widget = Text::new(banner.title().text())
        .size(banner.title().font_size())
        .style(move |_theme: &Theme| text::Style {
            color: Some(title_color),
        });

    let mut content = Row::new()
        .spacing(metrics.loader_title_offset)
        .align_y(alignment::Vertical::Center);

    if let Some(image) = banner.image() {
        let frame = image.frame();
        let handle = image.playback().frame_at(Instant::now()).clone();
        let image_widget = Image::new(handle)
            .content_fit(ContentFit::Cover)
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height));
        content = content.push(image_widget);
    }
    content = content.push(title_widget);

    // Mirror the computed geometry's rightward title shift when an icon leads.
    let shift = if banner.image().is_some() {
        metrics.center_shift_with_icon
    } else {
        0.0
    };

    Container::new(content)
        .width(Length::Fixed(banner.frame().width))
        .height(Length::Fixed(banner.frame().height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(Padding {
            left: shift,
            ..Padding::ZERO
        })
        .clip(banner.clips_children())
        .style(move |_theme: &Theme| banner_container_style(background))
        .into()
}

/// Style function for the banner container.
fn banner_container_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        ..Default::default()
    }
}
