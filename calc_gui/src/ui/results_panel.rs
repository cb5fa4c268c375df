//! Results Panel
//!
//! Heading, labeled rows with units, optional dashed separators and the
//! footnote. Only rendered when the open calculator has a result.

use iced::widget::{column, container, row, rule, text, Column, Space};
use iced::{Element, Length};

use calc_core::ResultSet;

use crate::Message;

/// Render a result set
pub fn view(results: ResultSet) -> Element<'static, Message> {
    let mut rows = Column::new().spacing(6);
    for result in results.rows {
        if result.separator_before {
            rows = rows.push(rule::horizontal(1));
        }
        rows = rows.push(row![
            text(result.label).size(12),
            Space::new().width(Length::Fill),
            text(format!("{} {}", result.value, result.unit)).size(13),
        ]);
    }

    container(
        column![
            text(results.heading).size(16),
            Space::new().height(8),
            rows,
            Space::new().height(10),
            text(format!("*{}", results.footnote)).size(10).color([0.5, 0.5, 0.5]),
        ]
        .spacing(2),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::bordered_box)
    .into()
}
