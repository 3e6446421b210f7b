//! Garment selector backed by the compiled-in catalog

use iced::widget::{column, pick_list, text};
use iced::Element;

use crate::state::data::{self, ClothingOption};
use crate::Message;

/// Message emitted for a pick; carries the whole record, not just its id
pub fn selection_message(option: ClothingOption) -> Message {
    Message::GarmentSelected(option)
}

pub fn view<'a>(selected: Option<ClothingOption>) -> Element<'a, Message> {
    column![
        text("Select Clothing").size(24),
        pick_list(data::catalog(), selected, selection_message)
            .placeholder("Select an option")
            .padding(8),
    ]
    .spacing(10)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_hoodie_emits_full_record() {
        let hoodie = data::find("hoodie").unwrap();
        match selection_message(hoodie) {
            Message::GarmentSelected(option) => {
                assert_eq!(option.id, "hoodie");
                assert_eq!(option.name, "Hoodie");
                assert_eq!(option.template, "/templates/hoodie.png");
            }
            other => panic!("unexpected message {other:?}"),
        }
    }
}
