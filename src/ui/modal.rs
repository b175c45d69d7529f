use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, row, stack, text,
};
use iced::{Alignment, Color, ContentFit, Element, Length};

use super::Handles;
use crate::state::catalog::Catalog;
use crate::state::navigator::{Direction, ModalNavigator, NavCommand};
use crate::Message;

/// Height of the photo slot
const PHOTO_HEIGHT: f32 = 560.0;

/// Modal body for the photo the navigator points at; None while closed
pub fn view<'a>(
    navigator: &ModalNavigator,
    catalog: &'a Catalog,
    handles: &'a Handles,
) -> Option<Element<'a, Message>> {
    let record = navigator.current(catalog)?;

    let photo: Element<'a, Message> = match handles.get(&record.path) {
        Some(picture) => picture.view(Length::Fill, PHOTO_HEIGHT, ContentFit::Contain),
        None => container(text("Loading…").size(16))
            .center_x(Length::Fill)
            .center_y(PHOTO_HEIGHT)
            .into(),
    };

    let header = row![
        text(record.title.as_str()).size(24),
        horizontal_space(),
        button(text("✕").size(16))
            .style(button::text)
            .on_press(Message::Navigate(NavCommand::Close)),
    ]
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = if navigator.shows_navigation() {
        row![
            nav_button("‹", Direction::Previous),
            photo,
            nav_button("›", Direction::Next),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
    } else {
        photo
    };

    let mut content = column![header, body, text(record.description.as_str()).size(16)]
        .spacing(16)
        .padding(24)
        .max_width(1100.0);

    let mut footer = row![text(record.filename()).size(12), horizontal_space()]
        .align_y(Alignment::Center);
    if let Some((position, total)) = navigator.position(catalog) {
        footer = footer.push(text(format!("{position} / {total}")).size(14));
    }
    content = content.push(footer);

    Some(
        container(content)
            .style(container::rounded_box)
            .into(),
    )
}

/// Layer `content` over `base`; clicking the backdrop sends `on_blur`
pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.85,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

fn nav_button<'a>(label: &'a str, direction: Direction) -> Element<'a, Message> {
    button(text(label).size(32))
        .padding([8, 14])
        .on_press(Message::Navigate(NavCommand::Step(direction)))
        .into()
}
