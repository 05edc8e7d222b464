// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that composes the navbar, the
//! localized content sections, and the gallery viewer over the decorative
//! starfield background.

use super::Message;
use crate::content::{Block, Portfolio, Section};
use crate::i18n::LocaleCode;
use crate::media::Carousel;
use crate::ui::effects::Starfield;
use crate::ui::{effects, navbar, viewer};
use iced::widget::{image, scrollable, tooltip, Column, Container, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub portfolio: &'a Portfolio,
    pub carousel: &'a Carousel,
    pub current_locale: LocaleCode,
    pub menu_open: bool,
    pub starfield: &'a Starfield,
}

/// Renders the whole application: navbar on top, content and gallery below,
/// layered over the starfield.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        current_locale: ctx.current_locale,
        menu_open: ctx.menu_open,
        sections: &ctx.portfolio.sections,
    })
    .map(Message::Navbar);

    let caption = ctx
        .portfolio
        .gallery
        .items
        .get(ctx.carousel.current_index())
        .and_then(|item| item.caption.as_deref());

    let gallery_view = viewer::view(viewer::ViewContext {
        carousel: ctx.carousel,
        caption,
    })
    .map(Message::Viewer);

    let mut content = Column::new().spacing(24).padding(16);
    for section in &ctx.portfolio.sections {
        content = content.push(view_section(section));
    }
    content = content.push(gallery_view);

    let page = Stack::new()
        .push(effects::view(ctx.starfield))
        .push(scrollable(content).width(Length::Fill).height(Length::Fill));

    Column::new()
        .push(navbar_view)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_section(section: &Section) -> Element<'_, Message> {
    let mut column = Column::new().spacing(8);
    for block in &section.blocks {
        column = column.push(view_block(block));
    }
    Container::new(column).width(Length::Fill).into()
}

/// Renders one content block: its text (wrapped in a tooltip when one is
/// set), an optional image, and an optional link target shown as plain text.
fn view_block(block: &Block) -> Element<'_, Message> {
    let mut column = Column::new().spacing(4);

    let text: Element<'_, Message> = Text::new(&block.text).into();
    let text = match &block.tooltip {
        Some(tip) => tooltip(text, Text::new(tip.as_str()), tooltip::Position::Bottom).into(),
        None => text,
    };
    column = column.push(text);

    if let Some(source) = &block.image {
        column = column.push(image(source).width(Length::Shrink));
    }
    if let Some(link) = &block.link {
        column = column.push(Text::new(link.as_str()).size(13));
    }

    column.into()
}
