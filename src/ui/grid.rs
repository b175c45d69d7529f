use iced::widget::{button, column, container, mouse_area, scrollable, stack, text};
use iced::{border, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use super::{Handles, Picture};
use crate::state::catalog::Catalog;
use crate::state::data::split_subcategory_key;
use crate::state::filter::FilterBar;
use crate::state::grid::{photo_count_label, GalleryGrid, Tile, NO_IMAGES};
use crate::Message;

/// Edge length of a tile's square cover
const TILE_SIZE: f32 = 240.0;

/// Spacing between tiles, both directions
const TILE_SPACING: f32 = 16.0;

/// The scrollable tile grid, or the placeholder when there is nothing to show
pub fn view<'a>(
    grid: &'a GalleryGrid,
    catalog: &'a Catalog,
    filters: &'a FilterBar,
    handles: &'a Handles,
) -> Element<'a, Message> {
    if grid.is_placeholder() {
        return container(text(NO_IMAGES).size(16))
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    let tiles: Vec<Element<'a, Message>> = grid
        .visible(catalog, filters)
        .filter_map(|tile| tile_view(tile, catalog, handles, grid.is_revealed()))
        .collect();

    scrollable(
        container(
            Wrap::with_elements(tiles)
                .spacing(TILE_SPACING)
                .line_spacing(TILE_SPACING),
        )
        .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn tile_view<'a>(
    tile: &'a Tile,
    catalog: &'a Catalog,
    handles: &'a Handles,
    revealed: bool,
) -> Option<Element<'a, Message>> {
    let cover = tile.cover(catalog)?;
    let image_box = cover_image(handles.get(&cover.path), revealed);

    let element: Element<'a, Message> = match tile {
        Tile::Representative { key } => {
            let count = catalog.group_len(key);
            let (category, subcategory) = split_subcategory_key(key);
            let open = Message::OpenGroup(key.clone());

            let badge = container(
                container(text(count.to_string()).size(14))
                    .padding([2, 10])
                    .style(badge_style),
            )
            .padding(8)
            .align_right(Length::Fill);

            column![
                mouse_area(stack![image_box, badge]).on_press(open.clone()),
                text(subcategory).size(18),
                text(photo_count_label(count)).size(14),
                text(format!("📁 {category}")).size(12),
                button(text("View All").size(14)).on_press(open),
            ]
            .spacing(6)
            .width(TILE_SIZE)
            .into()
        }
        Tile::Single { path } => {
            let open = Message::OpenPhoto(path.clone());

            column![
                mouse_area(image_box).on_press(open.clone()),
                text(cover.title.as_str()).size(18),
                text(cover.description.as_str()).size(14),
                button(text("View").size(14)).on_press(open),
            ]
            .spacing(6)
            .width(TILE_SIZE)
            .into()
        }
    };

    Some(element)
}

/// The cover photo, or a neutral box until the tile is revealed and decoded
fn cover_image<'a>(picture: Option<&Picture>, revealed: bool) -> Element<'a, Message> {
    match picture {
        Some(picture) if revealed => picture.view(TILE_SIZE, TILE_SIZE, ContentFit::Cover),
        _ => container(text(""))
            .width(TILE_SIZE)
            .height(TILE_SIZE)
            .style(container::rounded_box)
            .into(),
    }
}

fn badge_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.primary.strong.color.into()),
        text_color: Some(palette.primary.strong.text),
        border: border::rounded(12.0),
        ..container::Style::default()
    }
}
