//! Shown for unknown routes and unknown calculator slugs.

use iced::widget::{button, column, text, Space};
use iced::{Alignment, Element, Length};

use calc_core::routing::HOME_PATH;

use crate::Message;

pub fn view(path: String) -> Element<'static, Message> {
    column![
        text("Calculator not found").size(22),
        text(path).size(11).color([0.5, 0.5, 0.5]),
        Space::new().height(12),
        button(text("Back to Home").size(12))
            .on_press(Message::Navigate(HOME_PATH.to_string()))
            .style(button::text),
    ]
    .spacing(4)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .into()
}
