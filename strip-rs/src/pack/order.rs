use crate::entities::{Item, PlacedItem};
use std::cmp::Ordering;

/// Packing key: taller items first.
///
/// Items of equal height compare equal, so a stable sort keeps them in the order
/// they were normalized in (which is the input order).
pub fn by_height_desc(a: &Item, b: &Item) -> Ordering {
    b.height.cmp(&a.height)
}

/// Output key: the position of the item in the input.
pub fn by_original_index(a: &PlacedItem, b: &PlacedItem) -> Ordering {
    a.item.index.cmp(&b.item.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RawItem;

    fn item(w: u32, h: u32, index: usize) -> Item {
        Item::normalize(RawItem::new(w, h, index).unwrap())
    }

    #[test]
    fn taller_comes_first() {
        assert_eq!(by_height_desc(&item(1, 9, 0), &item(2, 4, 1)), Ordering::Less);
        assert_eq!(by_height_desc(&item(2, 4, 0), &item(1, 9, 1)), Ordering::Greater);
    }

    #[test]
    fn equal_heights_tie_regardless_of_index() {
        assert_eq!(by_height_desc(&item(1, 5, 3), &item(2, 5, 0)), Ordering::Equal);
    }

    #[test]
    fn index_order_ignores_geometry() {
        let a = PlacedItem::new(item(9, 1, 0), 10, 0);
        let b = PlacedItem::new(item(1, 1, 1), 0, 0);
        assert_eq!(by_original_index(&a, &b), Ordering::Less);
    }
}
