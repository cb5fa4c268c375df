//! Home screen
//!
//! Intro banner followed by one card per catalog entry, in catalog order.
//! Cards wrap to fill the window width.

use iced::widget::{button, column, container, row, text, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::catalog::{self, CalculatorDescriptor};

use super::icons;
use crate::Message;

const CARD_WIDTH: f32 = 290.0;

/// Render the home screen
pub fn view() -> Element<'static, Message> {
    let banner = container(
        column![
            text("Start Calculating").size(24),
            text("Find tools, references and guides to help you plan and build your project efficiently.")
                .size(12)
                .color([0.5, 0.5, 0.5]),
        ]
        .spacing(6),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box);

    let cards = Row::with_children(catalog::all().iter().map(view_card))
        .spacing(12)
        .wrap()
        .vertical_spacing(12);

    column![banner, Space::new().height(20), cards].into()
}

fn view_card(descriptor: &'static CalculatorDescriptor) -> Element<'static, Message> {
    let body = row![
        icons::view_icon(descriptor.icon, 32.0),
        column![
            text(descriptor.title).size(15),
            text(descriptor.description).size(11).color([0.5, 0.5, 0.5]),
        ]
        .spacing(4)
        .width(Length::Fill),
    ]
    .spacing(12)
    .align_y(Alignment::Start);

    button(container(body).padding(12).style(container::bordered_box))
        .on_press(Message::Navigate(descriptor.path()))
        .padding(Padding::ZERO)
        .width(Length::Fixed(CARD_WIDTH))
        .style(button::text)
        .into()
}
