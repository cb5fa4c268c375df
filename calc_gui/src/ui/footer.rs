//! Footer (Bottom)
//!
//! Displays:
//! - Copyright line with the current year
//! - Status messages (e.g. a failed settings save)

use chrono::Datelike;
use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the footer
pub fn view_footer(status: &str) -> Element<'_, Message> {
    let year = chrono::Local::now().year();

    row![
        text(format!("© {} Builder's Calculator. All rights reserved.", year)).size(10),
        Space::new().width(Length::Fill),
        text(status).size(10).color([0.6, 0.3, 0.0]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
