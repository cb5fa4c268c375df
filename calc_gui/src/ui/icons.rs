//! Card icons, embedded at compile time from `assets/icons`.

use iced::widget::{svg, Space};
use iced::{Element, Length};
use rust_embed::RustEmbed;

use calc_core::catalog::Icon;

use crate::Message;

#[derive(RustEmbed)]
#[folder = "assets/icons"]
struct IconAssets;

fn handle(icon: Icon) -> Option<svg::Handle> {
    IconAssets::get(icon.file_name()).map(|file| svg::Handle::from_memory(file.data))
}

/// Square icon of `size` pixels; blank space if the asset is missing
pub fn view_icon(icon: Icon, size: f32) -> Element<'static, Message> {
    match handle(icon) {
        Some(handle) => svg(handle).width(Length::Fixed(size)).height(Length::Fixed(size)).into(),
        None => {
            tracing::warn!(file = icon.file_name(), "icon asset missing");
            Space::new().width(Length::Fixed(size)).height(Length::Fixed(size)).into()
        }
    }
}
