use crate::entities::PlacedItem;

/// The single-row bounding rectangle containing all packed items
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Strip {
    pub width: u64,
    pub height: u64,
}

impl Strip {
    pub fn new(width: u64, height: u64) -> Self {
        Strip { width, height }
    }

    pub fn area(&self) -> u64 {
        self.width * self.height
    }

    /// Fraction of the strip covered by the placed items, 0.0 for an empty strip
    pub fn density<'a>(&self, placed_items: impl IntoIterator<Item = &'a PlacedItem>) -> f32 {
        match self.area() {
            0 => 0.0,
            strip_area => {
                let item_area = placed_items
                    .into_iter()
                    .map(|pi| pi.item.area())
                    .sum::<u64>();
                (item_area as f64 / strip_area as f64) as f32
            }
        }
    }
}
