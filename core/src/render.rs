//! Render functions over an explicitly passed `Screen`.
//!
//! Everything except the items functions replaces the root region outright,
//! so a second call with the same input leaves the screen unchanged. The
//! items functions only touch the slot of the card currently shown.

use tracing::debug;

use crate::screen::Screen;
use crate::types::{AssociatedItem, Entity};
use crate::view::{ErrorCard, ItemLink, ItemsSlot, ProfileCard, Root};

pub fn render_loading(screen: &mut Screen) {
    screen.set_root(Root::Loading);
}

pub fn render_entity_card(screen: &mut Screen, entity: &Entity) {
    screen.set_root(Root::Card(ProfileCard::from_entity(entity)));
}

/// Fill the card's items slot with links for the first five items.
///
/// Returns false, leaving the screen alone, when no card is shown.
pub fn append_associated_items(screen: &mut Screen, items: &[AssociatedItem]) -> bool {
    set_items_slot(screen, ItemsSlot::Links(ItemLink::first_of(items)))
}

/// Mark the card's items slot as unavailable, keeping the card.
pub fn render_items_error(screen: &mut Screen, message: &str) -> bool {
    set_items_slot(screen, ItemsSlot::Unavailable(message.to_string()))
}

pub fn render_error(screen: &mut Screen, message: &str) {
    screen.set_root(Root::Error(ErrorCard {
        message: message.to_string(),
    }));
}

fn set_items_slot(screen: &mut Screen, slot: ItemsSlot) -> bool {
    match screen.root_mut() {
        Root::Card(card) => {
            card.items = slot;
            true
        }
        _ => {
            debug!("no card on screen; dropping items render");
            false
        }
    }
}
