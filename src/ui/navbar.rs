// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the hamburger menu and the language-selector
//! controls. The selector appears twice, matching the page layout it
//! renders: a row in the top bar and a second set inside the collapsible
//! menu. Both sets mark exactly the current locale active.

use crate::content::Section;
use crate::i18n::LocaleCode;
use iced::alignment::Vertical;
use iced::widget::{button, Button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub current_locale: LocaleCode,
    pub menu_open: bool,
    /// Content sections, listed as navigation items in the menu.
    pub sections: &'a [Section],
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    /// A navigation item was pressed; the menu closes.
    NavItemPressed,
    LocaleSelected(LocaleCode),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LocaleSelected(LocaleCode),
}

/// Processes a navbar message and returns the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::NavItemPressed => {
            *menu_open = false;
            Event::None
        }
        Message::LocaleSelected(code) => {
            *menu_open = false;
            Event::LocaleSelected(code)
        }
    }
}

/// Renders the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));
    if ctx.menu_open {
        content = content.push(build_menu(&ctx));
    }

    content.into()
}

/// Builds the top bar with the locale selector row and the hamburger button.
fn build_top_bar(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let mut bar = Row::new()
        .spacing(8)
        .padding(8)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill).height(Length::Shrink));

    for code in LocaleCode::ALL {
        bar = bar.push(locale_button(code, ctx.current_locale));
    }

    let menu_button = button(Text::new("\u{2630}"))
        .on_press(Message::ToggleMenu)
        .padding([4, 8]);
    bar = bar.push(menu_button);

    Container::new(bar).width(Length::Fill).into()
}

/// Builds the collapsible menu: one item per content section plus the second
/// locale-selector set.
fn build_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut menu = Column::new().spacing(4).padding(8);

    for section in ctx.sections {
        menu = menu.push(
            button(Text::new(section.id.as_str()))
                .on_press(Message::NavItemPressed)
                .style(button::text)
                .width(Length::Fill),
        );
    }

    let mut locale_row = Row::new().spacing(8);
    for code in LocaleCode::ALL {
        locale_row = locale_row.push(locale_button(code, ctx.current_locale));
    }
    menu = menu.push(locale_row);

    Container::new(menu).width(Length::Fill).into()
}

/// A selector control for one locale; the current one is highlighted and
/// pressing it again does nothing.
fn locale_button(code: LocaleCode, current: LocaleCode) -> Button<'static, Message> {
    let label = Text::new(code.as_str().to_uppercase());
    if code == current {
        button(label).style(button::primary)
    } else {
        button(label)
            .style(button::secondary)
            .on_press(Message::LocaleSelected(code))
    }
}
