//! Calculator screen
//!
//! Back link, icon, title and description, then the form and results for
//! implemented calculators or the "coming soon" notice for placeholders.

use iced::widget::{button, column, container, row, rule, text, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::routing::HOME_PATH;
use calc_core::{CalculatorScreen, DisplaySettings};

use super::{coming_soon, icons, input_panel, results_panel};
use crate::Message;

/// Render one calculator screen
pub fn view<'a>(screen: &'a CalculatorScreen, display: &DisplaySettings) -> Element<'a, Message> {
    let descriptor = screen.descriptor();

    let back = button(text("← Back to all calculators").size(12))
        .on_press(Message::Navigate(HOME_PATH.to_string()))
        .padding(Padding::from([2, 0]))
        .style(button::text);

    let heading = row![
        icons::view_icon(descriptor.icon, 40.0),
        column![
            text(descriptor.title).size(24),
            text(descriptor.description).size(12).color([0.5, 0.5, 0.5]),
        ]
        .spacing(4),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let mut card: Column<'a, Message> = column![heading, Space::new().height(12), rule::horizontal(1), Space::new().height(12)];

    if descriptor.is_implemented() {
        card = card.push(input_panel::view(screen));
        if let Some(results) = screen.result_set(display) {
            card = card.push(Space::new().height(16)).push(results_panel::view(results));
        }
    } else {
        card = card.push(coming_soon::view());
    }

    column![
        back,
        Space::new().height(8),
        container(card.padding(16)).width(Length::Fill).max_width(760.0).style(container::bordered_box),
    ]
    .into()
}
