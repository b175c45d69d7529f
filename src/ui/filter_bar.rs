use iced::widget::{button, row, text};
use iced::{Element, Theme};

use crate::state::filter::FilterBar;
use crate::Message;

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// One button per filter control; the active one is highlighted
pub fn view(filters: &FilterBar) -> Element<'_, Message> {
    let buttons = filters.controls().iter().map(|control| {
        let style: ButtonStyle = if filters.is_active(&control.filter) {
            button::primary
        } else {
            button::secondary
        };

        Element::from(
            button(text(control.label.as_str()).size(14))
                .padding([6, 14])
                .style(style)
                .on_press(Message::FilterSelected(control.filter.clone())),
        )
    });

    row(buttons).spacing(8).into()
}
