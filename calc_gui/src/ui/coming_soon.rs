//! "Coming soon" notice for calculators without a formula.

use iced::widget::{column, container, text};
use iced::{Element, Length};

use calc_core::calculations::coming_soon::NOTICE;

use crate::Message;

pub fn view() -> Element<'static, Message> {
    container(
        column![
            text(format!("⚠ {}", NOTICE.title)).size(14).color([0.8, 0.6, 0.0]),
            text(NOTICE.message).size(12),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
