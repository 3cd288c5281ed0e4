mod item;
mod solution;
mod strip;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::PlacedItem;

#[doc(inline)]
pub use item::RawItem;

#[doc(inline)]
pub use solution::StripSolution;

#[doc(inline)]
pub use strip::Strip;
