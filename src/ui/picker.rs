// SPDX-License-Identifier: MPL-2.0
//! Picker screen: a folder button and, after a failed scan, the reason.

use crate::app::Message;
use iced::widget::{button, container, text, Column};
use iced::{Alignment, Element, Length};

/// Builds the picker screen. `status` carries the message of the last
/// failed scan, if any; picking again clears it.
pub fn view(status: Option<&str>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(20)
        .align_x(Alignment::Center)
        .push(text("Photo Book").size(32))
        .push(
            button(text("Open Folder"))
                .on_press(Message::PickFolder)
                .padding(10),
        );

    if let Some(status) = status {
        content = content.push(text(status.to_string()).size(16));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
