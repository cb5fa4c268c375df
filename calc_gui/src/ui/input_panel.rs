//! Input Panel
//!
//! One labeled row per field of the open calculator: a text input with a
//! unit suffix for numeric fields, a pick list for choice fields. Raw text
//! goes straight into the screen's input set; parsing happens on compute.

use iced::widget::{button, column, pick_list, row, text, text_input, Column, Space};
use iced::{Alignment, Element, Length, Padding};

use calc_core::inputs::{ChoiceOption, FieldKind, FieldSpec};
use calc_core::CalculatorScreen;

use crate::Message;

const LABEL_WIDTH: f32 = 170.0;
const INPUT_WIDTH: f32 = 140.0;

/// Render the form for the open calculator
pub fn view(screen: &CalculatorScreen) -> Column<'_, Message> {
    let inputs = screen.inputs();

    let mut form = Column::new().spacing(8);
    for field in screen.descriptor().fields() {
        form = form.push(view_field(field, inputs.raw(field.name)));
    }

    column![
        form,
        Space::new().height(8),
        button(text("Reset").size(11))
            .on_press(Message::ResetFields)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
}

fn view_field<'a>(field: &'static FieldSpec, value: &'a str) -> Element<'a, Message> {
    let name = field.name;
    let label = text(field.label).size(12).width(Length::Fixed(LABEL_WIDTH));

    let control: Element<'a, Message> = match field.kind {
        FieldKind::Choice { options } => pick_list(options, field.option_for(value), move |option: ChoiceOption| {
            Message::FieldChanged(name, option.value.to_string())
        })
        .width(Length::Fixed(INPUT_WIDTH + 60.0))
        .text_size(12)
        .into(),
        FieldKind::Number | FieldKind::Integer => row![
            text_input("", value)
                .on_input(move |s| Message::FieldChanged(name, s))
                .width(Length::Fixed(INPUT_WIDTH))
                .padding(4)
                .size(12),
            Space::new().width(6),
            text(field.unit).size(11).color([0.5, 0.5, 0.5]),
        ]
        .align_y(Alignment::Center)
        .into(),
    };

    row![label, control].align_y(Alignment::Center).into()
}
