use serde::{Deserialize, Serialize};

/// External representation of a placed item
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    /// Position of the item in the input
    pub index: usize,
    pub x: u64,
    pub y: u64,
    /// Width after normalization
    pub width: u32,
    /// Height after normalization
    pub height: u32,
    /// Whether the item was turned 90° with respect to its declared dimensions
    pub rotated: bool,
}

/// External representation of a packed strip, items are listed in input order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtStripSolution {
    pub strip_width: u64,
    pub strip_height: u64,
    /// Sum of the area of the items divided by the area of the strip
    pub density: f32,
    pub items: Vec<ExtPlacedItem>,
}

/// External representation of the shares at a single sample point
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSampleReport {
    pub point: i64,
    pub shares: Vec<ExtShare>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtShare {
    pub name: String,
    pub percentage: f64,
}
