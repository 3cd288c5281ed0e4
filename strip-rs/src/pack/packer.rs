use crate::entities::{Item, PlacedItem, RawItem, Strip, StripSolution};
use crate::pack::order;
use crate::util::assertions;
use log::{debug, info};
use std::time::Instant;
use thousands::Separable;

/// Normalizes every raw item into its tall orientation, preserving the input order.
pub fn normalize(raw_items: impl IntoIterator<Item = RawItem>) -> Vec<Item> {
    raw_items.into_iter().map(Item::normalize).collect()
}

/// Single-shelf packer: places all items next to each other on one row,
/// tallest first, in a strip as high as the tallest item.
pub struct StripPacker {
    items: Vec<Item>,
}

impl StripPacker {
    /// The order of `items` only matters to break ties between items of equal height.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn solve(self) -> StripSolution {
        let start = Instant::now();
        let mut items = self.items;

        // stable, items of equal height keep their relative order
        items.sort_by(order::by_height_desc);

        let height = items.first().map_or(0, |item| item.height as u64);
        let n_items = items.len();

        let mut cursor = 0;
        let placed_items = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let pi = PlacedItem::new(item, cursor, 0);
                debug!(
                    "[PACK] placing item {}/{} (index {}, {}x{}, rotated: {}) at x: {}",
                    i + 1,
                    n_items,
                    item.index,
                    item.width,
                    item.height,
                    item.rotated,
                    cursor
                );
                cursor += item.width as u64;
                pi
            })
            .collect::<Vec<_>>();

        let solution = StripSolution {
            strip: Strip::new(cursor, height),
            placed_items,
        };

        debug_assert!(assertions::strip_height_fits_tallest(&solution));
        debug_assert!(assertions::strip_width_is_sum_of_widths(&solution));
        debug_assert!(assertions::placements_tile_strip(&solution));

        info!(
            "[PACK] packed {} items into a {}x{} strip with a density of {:.3}% in {:.3}ms",
            solution.n_items().separate_with_commas(),
            solution.strip.width,
            solution.strip.height,
            solution.density() * 100.0,
            start.elapsed().as_secs_f64() * 1000.0
        );

        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use rand::seq::SliceRandom;
    use rand::Rng;

    fn raw(dims: &[(u32, u32)]) -> Vec<RawItem> {
        dims.iter()
            .enumerate()
            .map(|(i, &(w, h))| RawItem::new(w, h, i).unwrap())
            .collect()
    }

    fn random_items(rng: &mut SmallRng, n: usize) -> Vec<Item> {
        let raw_items = (0..n)
            .map(|i| RawItem::new(rng.random_range(1..=20), rng.random_range(1..=20), i).unwrap())
            .collect_vec();
        normalize(raw_items)
    }

    #[test]
    fn reference_example() {
        let items = normalize(raw(&[(2, 4), (5, 2), (1, 9)]));
        let solution = StripPacker::new(items).solve();

        assert_eq!(solution.strip, Strip::new(5, 9));

        let packing_order = solution.placed_items.iter().map(|pi| pi.item.index).collect_vec();
        assert_eq!(packing_order, vec![2, 1, 0]);

        let restored = solution
            .in_input_order()
            .iter()
            .map(|pi| (pi.x, pi.y, pi.item.rotated))
            .collect_vec();
        assert_eq!(restored, vec![(3, 0, false), (1, 0, true), (0, 0, false)]);
    }

    #[test]
    fn empty_batch() {
        let solution = StripPacker::new(vec![]).solve();
        assert_eq!(solution.strip, Strip::new(0, 0));
        assert!(solution.is_empty());
        assert_eq!(solution.density(), 0.0);
    }

    #[test]
    fn ties_keep_input_order() {
        // all items end up 1 wide and 5 high
        let items = normalize(raw(&[(1, 5), (5, 1), (1, 5), (5, 1)]));
        let solution = StripPacker::new(items).solve();

        let xs = solution.in_input_order().iter().map(|pi| pi.x).collect_vec();
        assert_eq!(xs, vec![0, 1, 2, 3]);
    }

    #[test]
    fn all_same_height_is_fully_dense() {
        let items = normalize(raw(&[(2, 6), (6, 3), (6, 6)]));
        let solution = StripPacker::new(items).solve();
        assert_eq!(solution.strip, Strip::new(11, 6));
        assert_eq!(solution.density(), 1.0);
    }

    #[test]
    fn width_and_height_do_not_depend_on_input_order() {
        let mut rng = SmallRng::seed_from_u64(0);
        for n in [1, 2, 10, 100] {
            let items = random_items(&mut rng, n);
            let sum_widths = items.iter().map(|i| i.width as u64).sum::<u64>();
            let max_height = items.iter().map(|i| i.height as u64).max().unwrap();

            let mut shuffled = items.clone();
            shuffled.shuffle(&mut rng);

            for batch in [items, shuffled] {
                let solution = StripPacker::new(batch).solve();
                assert_eq!(solution.strip.width, sum_widths);
                assert_eq!(solution.strip.height, max_height);
                assert!(assertions::placements_tile_strip(&solution));
            }
        }
    }

    #[test]
    fn presorted_batch_without_ties_is_placed_identically() {
        let mut rng = SmallRng::seed_from_u64(1);
        let items = (0..20u32)
            .map(|i| RawItem::new(1 + i % 3, 100 - i, i as usize).unwrap())
            .map(Item::normalize)
            .collect_vec();

        let mut shuffled = items.clone();
        shuffled.shuffle(&mut rng);

        let presorted = StripPacker::new(items).solve();
        let unsorted = StripPacker::new(shuffled).solve();

        assert_eq!(presorted, unsorted);
    }
}
