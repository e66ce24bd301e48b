//! Block type selection for placement (no quantities).

use blockworld_core::BlockType;
use tracing::warn;

/// Ordered list of placeable block types with one selected slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotbar {
    slots: Vec<BlockType>,
    selected: usize,
}

impl Default for Hotbar {
    fn default() -> Self {
        Self::new(BlockType::ALL.to_vec())
    }
}

impl Hotbar {
    /// Create a hotbar with slot 0 selected. An empty list falls back to every block type.
    pub fn new(slots: Vec<BlockType>) -> Self {
        let slots = if slots.is_empty() {
            warn!("empty hotbar, using every block type");
            BlockType::ALL.to_vec()
        } else {
            slots
        };
        Self { slots, selected: 0 }
    }

    /// Slot contents in order.
    pub fn slots(&self) -> &[BlockType] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false; a hotbar has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Selected slot index (0-based), for HUD highlighting.
    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    /// Block type placed by the secondary action.
    pub fn selected_type(&self) -> BlockType {
        self.slots[self.selected]
    }

    /// Select a slot by 0-based index. Out-of-range indices are ignored.
    pub fn select(&mut self, slot: usize) -> bool {
        if slot < self.slots.len() {
            self.selected = slot;
            true
        } else {
            false
        }
    }

    /// Select a slot from a number key (1 selects slot 0).
    pub fn select_key(&mut self, digit: u32) -> bool {
        match digit.checked_sub(1) {
            Some(slot) => self.select(slot as usize),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_types_with_first_selected() {
        let hotbar = Hotbar::default();
        assert_eq!(hotbar.len(), 10);
        assert_eq!(hotbar.selected_slot(), 0);
        assert_eq!(hotbar.selected_type(), BlockType::Grass);
    }

    #[test]
    fn number_keys_are_one_based() {
        let mut hotbar = Hotbar::default();
        assert!(hotbar.select_key(3));
        assert_eq!(hotbar.selected_type(), BlockType::Water);
        assert!(!hotbar.select_key(0));
        assert!(!hotbar.select_key(11));
        assert_eq!(hotbar.selected_slot(), 2);
    }

    #[test]
    fn out_of_range_select_keeps_previous() {
        let mut hotbar = Hotbar::new(vec![BlockType::Stone, BlockType::Gold]);
        assert!(hotbar.select(1));
        assert!(!hotbar.select(2));
        assert_eq!(hotbar.selected_type(), BlockType::Gold);
    }

    #[test]
    fn empty_list_falls_back() {
        let hotbar = Hotbar::new(Vec::new());
        assert_eq!(hotbar.slots(), &BlockType::ALL);
    }
}
