//! Toolbar component
//!
//! Application title, Home button and the settings dropdown.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::routing::HOME_PATH;

use crate::Message;

/// Render the header with title, Home and Settings buttons
pub fn view_toolbar(settings_menu_open: bool) -> Element<'static, Message> {
    let title = column![
        text("Builder's Calculator").size(26),
        text("Fast, accurate answers for all your construction calculations.")
            .size(12)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(2);

    let home_button = button(text("Home").size(11))
        .on_press(Message::Navigate(HOME_PATH.to_string()))
        .padding(Padding::from([4, 8]))
        .style(button::secondary);

    // Settings button with dropdown indicator
    let settings_button_text = if settings_menu_open { "Settings ▲" } else { "Settings ▼" };
    let settings_button = button(text(settings_button_text).size(11))
        .on_press(Message::ToggleSettingsMenu)
        .padding(Padding::from([4, 8]))
        .style(if settings_menu_open { button::primary } else { button::secondary });

    row![
        title,
        Space::new().width(Length::Fill),
        row![home_button, settings_button].spacing(4),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}

/// Render the settings dropdown menu
pub fn view_settings_menu(dark_mode: bool) -> Element<'static, Message> {
    let theme_label = if dark_mode { "Light Mode" } else { "Dark Mode" };

    let dropdown_content = column![button(text(theme_label).size(10))
        .on_press(Message::ToggleDarkMode)
        .padding(Padding::from([4, 12]))
        .width(Length::Fill)
        .style(button::secondary),]
    .spacing(2)
    .width(Length::Fixed(130.0));

    container(dropdown_content)
        .padding(4)
        .style(container::bordered_box)
        .into()
}
