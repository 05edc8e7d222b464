// SPDX-License-Identifier: MPL-2.0
//! Gallery viewer: the active media pane, the thumbnail strip, and the
//! previous/next controls.
//!
//! The previous/next controls render only when the carousel has more than
//! one entry; with zero or one thumbnail there is nothing to navigate and
//! the strip shows no controls at all.

use crate::media::{ActiveMedia, Carousel, MediaType};
use iced::alignment::Vertical;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{Element, Length};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub carousel: &'a Carousel,
    /// Localized caption of the current entry, if the manifest declares one.
    pub caption: Option<&'a str>,
}

/// Messages emitted by the gallery viewer.
#[derive(Debug, Clone)]
pub enum Message {
    ThumbnailPressed(usize),
    Next,
    Previous,
}

/// Renders the gallery: media pane on top, thumbnail strip below.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new().spacing(12);

    if let Some(media) = ctx.carousel.active_media() {
        column = column.push(view_media_pane(&media));
    }
    if let Some(caption) = ctx.caption {
        column = column.push(Text::new(caption).size(14));
    }
    if !ctx.carousel.is_empty() {
        column = column.push(view_strip(ctx.carousel));
    }

    Container::new(column).width(Length::Fill).into()
}

/// Renders the currently displayed media node.
///
/// Images go straight to the image widget. Videos render as a labeled pane;
/// the playback attributes travel with the node for the pane to honor. A
/// source that cannot be rendered is the widget's problem, not ours.
fn view_media_pane(media: &ActiveMedia) -> Element<'static, Message> {
    match media.kind {
        MediaType::Image => Container::new(
            image(media.source.clone())
                .width(Length::Fill)
                .height(Length::Fixed(320.0)),
        )
        .width(Length::Fill)
        .into(),
        MediaType::Video => {
            let mut pane = Column::new()
                .spacing(4)
                .push(Text::new(format!("\u{25B6} {}", media.source)));
            if let Some(params) = media.video {
                let mut badges = Vec::new();
                if params.autoplay {
                    badges.push("autoplay");
                }
                if params.looped {
                    badges.push("loop");
                }
                if params.muted {
                    badges.push("muted");
                }
                pane = pane.push(Text::new(badges.join(" \u{00B7} ")).size(12));
            }
            Container::new(pane)
                .width(Length::Fill)
                .height(Length::Fixed(320.0))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(320.0))
                .into()
        }
    }
}

/// Renders the thumbnail strip with optional previous/next controls.
fn view_strip(carousel: &Carousel) -> Element<'_, Message> {
    let mut strip = Row::new().spacing(8).align_y(Vertical::Center);

    if carousel.has_navigation() {
        strip = strip.push(
            button(Text::new("\u{2039}"))
                .on_press(Message::Previous)
                .padding([4, 10]),
        );
    }

    for (index, thumbnail) in carousel.thumbnails().iter().enumerate() {
        let label = Text::new(thumbnail_label(&thumbnail.source)).size(13);
        let control = if carousel.is_active(index) {
            button(label).style(button::primary)
        } else {
            button(label)
                .style(button::secondary)
                .on_press(Message::ThumbnailPressed(index))
        };
        strip = strip.push(control);
    }

    if carousel.has_navigation() {
        strip = strip.push(
            button(Text::new("\u{203A}"))
                .on_press(Message::Next)
                .padding([4, 10]),
        );
    }

    strip.into()
}

/// Short label for a thumbnail control: the source's file name.
fn thumbnail_label(source: &str) -> String {
    source
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source)
        .to_string()
}
