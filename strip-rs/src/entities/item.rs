use anyhow::{Result, ensure};

/// Rectangle as it was declared in the input, before normalization
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawItem {
    pub width: u32,
    pub height: u32,
    /// Position of the item in the input, starting from 0
    pub index: usize,
}

impl RawItem {
    pub fn new(width: u32, height: u32, index: usize) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "item {index} has a non-positive dimension: {width} x {height}"
        );
        Ok(RawItem {
            width,
            height,
            index,
        })
    }
}

/// Item in its canonical "tall" orientation, ready to be packed.
///
/// The shorter side of an item is always its width.
/// If this required swapping the raw dimensions, `rotated` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    /// Position of the item in the input. Only used to restore the input order, never to pack.
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
}

impl Item {
    /// Normalizes a raw item: rotated iff `raw.width >= raw.height`.
    pub fn normalize(raw: RawItem) -> Self {
        let RawItem {
            width,
            height,
            index,
        } = raw;

        match width >= height {
            true => Item {
                index,
                width: height,
                height: width,
                rotated: true,
            },
            false => Item {
                index,
                width,
                height,
                rotated: false,
            },
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// An [`Item`] that received a position in the strip.
/// Coordinates refer to the item's bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    pub item: Item,
    pub x: u64,
    pub y: u64,
}

impl PlacedItem {
    pub fn new(item: Item, x: u64, y: u64) -> Self {
        PlacedItem { item, x, y }
    }

    /// The exclusive end of the horizontal interval occupied by the item
    pub fn x_max(&self) -> u64 {
        self.x + self.item.width as u64
    }

    pub fn y_max(&self) -> u64 {
        self.y + self.item.height as u64
    }
}
