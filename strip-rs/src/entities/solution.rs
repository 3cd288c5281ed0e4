use crate::entities::{PlacedItem, Strip};
use crate::pack::order;
use itertools::Itertools;

/// Result of packing a batch: the strip and every placed item, in packing order.
#[derive(Debug, Clone, PartialEq)]
pub struct StripSolution {
    pub strip: Strip,
    pub placed_items: Vec<PlacedItem>,
}

impl StripSolution {
    pub fn density(&self) -> f32 {
        self.strip.density(&self.placed_items)
    }

    pub fn n_items(&self) -> usize {
        self.placed_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// The placed items restored to the order in which they appeared in the input
    pub fn in_input_order(&self) -> Vec<PlacedItem> {
        self.placed_items
            .iter()
            .copied()
            .sorted_by(order::by_original_index)
            .collect()
    }
}
